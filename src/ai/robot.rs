use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use tracing::debug;

use crate::game::{all_moves, captures, Board, MoveTrack, Side, TurnEngine};

use super::agent::{Agent, Seat};

/// Two-tier heuristic opponent.
///
/// Tier 1 plays the first move (in [`all_moves`] order) that captures.
/// Tier 2 avoids moves after which the opponent has a capturing reply,
/// choosing at random among the safe ones, or among all moves when none is
/// safe. Every lookahead runs on a copy of the board.
pub struct Robot {
    seat: Seat,
    rng: StdRng,
}

impl Robot {
    pub fn new(side: Side) -> Self {
        Robot {
            seat: Seat::new(side),
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(side: Side, seed: u64) -> Self {
        Robot {
            seat: Seat::new(side),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick a move for this robot's side on `board`.
    pub fn choose_move(&mut self, board: &Board) -> Option<MoveTrack> {
        pick_move(board, self.seat.side(), &mut self.rng)
    }
}

fn pick_move(board: &Board, side: Side, rng: &mut StdRng) -> Option<MoveTrack> {
    let candidates = all_moves(board, side);
    if candidates.is_empty() {
        return None;
    }

    if let Some(&attack) = attacking_moves(board, &candidates).first() {
        debug!(side = side.name(), source = %attack.source, target = %attack.target, "robot attacks");
        return Some(attack);
    }

    let safe = safe_moves(board, side, &candidates);
    let pool = if safe.is_empty() { &candidates } else { &safe };
    let chosen = pool[rng.random_range(0..pool.len())];
    debug!(
        side = side.name(),
        safe = safe.len(),
        candidates = candidates.len(),
        source = %chosen.source,
        target = %chosen.target,
        "robot defends"
    );
    Some(chosen)
}

/// Candidates that capture at least one enemy piece, in input order.
pub fn attacking_moves(board: &Board, candidates: &[MoveTrack]) -> Vec<MoveTrack> {
    candidates
        .iter()
        .copied()
        .filter(|m| !captures(&m.applied_to(board), m.target).is_empty())
        .collect()
}

/// Candidates after which no reply by the other side captures.
pub fn safe_moves(board: &Board, side: Side, candidates: &[MoveTrack]) -> Vec<MoveTrack> {
    candidates
        .iter()
        .copied()
        .filter(|m| {
            let after = m.applied_to(board);
            attacking_moves(&after, &all_moves(&after, side.other())).is_empty()
        })
        .collect()
}

impl Agent for Robot {
    fn name(&self) -> &str {
        "Robot"
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
            let choice = pick_move(board, side, rng);
            debug_assert!(choice.is_some(), "robot signalled with no legal moves");
            choice
        });
    }
}
