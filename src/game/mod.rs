//! Core game logic: board representation, the flank capture rule, legal move
//! enumeration, the append-only action log, and the turn engine that ties
//! them together.

mod action;
mod board;
mod capture;
mod engine;
mod log;
mod moves;
mod player;

pub use action::{Action, ActionKind};
pub use board::{Board, Coord, PieceColor, CELLS, COLS, ROWS};
pub use capture::captures;
pub use engine::{Phase, TurnEngine};
pub use log::{ActionLog, ReadCursor};
pub use moves::{all_moves, MoveTrack};
pub use player::Side;
