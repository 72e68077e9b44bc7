//! # Flank Four
//!
//! Rule engine and heuristic opponent for a two-player sliding capture game on
//! a 4x4 board. A move slides one piece into an adjacent empty cell; a run of
//! exactly three containing two of the mover's pieces captures the enemy piece
//! if it sits at an end.
//!
//! ## Modules
//!
//! - [`game`]: Board, capture rule, legal moves, action log, turn engine
//! - [`ai`]: Move-source trait, heuristic robot, random baseline
//! - [`arena`]: Headless agent-vs-agent matches and aggregate results
//! - [`ui`]: Terminal UI, the presentation reader of the action log
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
