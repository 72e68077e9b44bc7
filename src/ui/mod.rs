//! Terminal UI: play against the robot, with the board replayed from the
//! engine's action log.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
