//! Headless matches: play full games between two agents through the turn
//! engine and aggregate the results.

pub mod episode;
pub mod metrics;

pub use episode::{play_episode, EpisodeResult};
pub use metrics::ArenaMetrics;
