mod agent;
mod random;
pub mod robot;

pub use agent::{Agent, Seat};
pub use random::RandomAgent;
pub use robot::Robot;
