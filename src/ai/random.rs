use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{all_moves, Side, TurnEngine};

use super::agent::{Agent, Seat};

/// An agent that selects uniformly at random from legal moves.
pub struct RandomAgent {
    seat: Seat,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(side: Side) -> Self {
        RandomAgent {
            seat: Seat::new(side),
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(side: Side, seed: u64) -> Self {
        RandomAgent {
            seat: Seat::new(side),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "Random"
    }

    fn side(&self) -> Side {
        self.seat.side()
    }

    fn reset(&mut self, side: Side) {
        self.seat.reset(side);
    }

    fn attach(&mut self, engine: &mut TurnEngine) {
        self.seat.attach(engine);
    }

    fn poll(&mut self, engine: &mut TurnEngine) {
        let side = self.seat.side();
        let rng = &mut self.rng;
        self.seat.drain(engine, |board| {
            let moves = all_moves(board, side);
            if moves.is_empty() {
                return None;
            }
            Some(moves[rng.random_range(0..moves.len())])
        });
    }
}
