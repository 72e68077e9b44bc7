use std::time::Duration;

use tracing::debug;

use crate::ai::Agent;
use crate::game::{ActionKind, Board, Phase, Side, TurnEngine};

/// Simulated frame length passed to the engine each tick.
const TICK: Duration = Duration::from_millis(16);

/// Result of a single game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeResult {
    /// `None` when the tick limit ran out first
    pub winner: Option<Side>,
    pub moves: usize,
    pub captures: usize,
    pub ticks: usize,
}

/// Play one game on a fresh engine. `white` and `black` are re-seated on
/// their sides before the game starts.
pub fn play_episode(
    initial: Board,
    first_mover: Side,
    white: &mut dyn Agent,
    black: &mut dyn Agent,
    max_ticks: usize,
) -> EpisodeResult {
    let mut engine = TurnEngine::new(initial, first_mover);
    white.reset(Side::White);
    black.reset(Side::Black);
    white.attach(&mut engine);
    black.attach(&mut engine);
    engine.ready();

    let mut ticks = 0;
    while !engine.is_over() && ticks < max_ticks {
        white.poll(&mut engine);
        black.poll(&mut engine);
        engine.update(TICK);
        ticks += 1;
    }

    let winner = match engine.phase() {
        Phase::GameOver { winner } => Some(winner),
        _ => None,
    };
    let result = summarize(&engine, winner, ticks);
    debug!(
        winner = winner.map_or("draw", Side::name),
        moves = result.moves,
        captures = result.captures,
        "episode finished"
    );
    result
}

fn summarize(engine: &TurnEngine, winner: Option<Side>, ticks: usize) -> EpisodeResult {
    let log = engine.log();
    let moves = log
        .iter()
        .filter(|a| a.kind == ActionKind::Moved)
        .count();
    // Wipe entries carry no capturing cell
    let captures = log
        .iter()
        .filter(|a| a.kind == ActionKind::Killed && a.source.is_some())
        .count();
    EpisodeResult {
        winner,
        moves,
        captures,
        ticks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{RandomAgent, Robot};

    fn opening() -> Board {
        Board::from_layout(&[2, 2, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1]).unwrap()
    }

    #[test]
    fn test_episode_ends_within_limit() {
        let mut white = Robot::with_seed(Side::White, 1);
        let mut black = RandomAgent::with_seed(Side::Black, 2);
        let result = play_episode(opening(), Side::White, &mut white, &mut black, 300);

        assert!(result.ticks <= 300);
        assert!(result.moves > 0);
        if result.winner.is_none() {
            assert_eq!(result.ticks, 300);
        }
    }

    #[test]
    fn test_episode_with_immediate_capture() {
        // White's first capture leaves black with one piece
        #[rustfmt::skip]
        let board = Board::from_layout(&[
            1, 0, 2, 0,
            0, 1, 0, 0,
            0, 0, 0, 0,
            0, 0, 0, 2,
        ])
        .unwrap();
        let mut white = Robot::with_seed(Side::White, 0);
        let mut black = Robot::with_seed(Side::Black, 0);
        let result = play_episode(board, Side::White, &mut white, &mut black, 10);

        assert_eq!(result.winner, Some(Side::White));
        assert_eq!(result.moves, 1);
        assert_eq!(result.captures, 1);
    }

    #[test]
    fn test_agents_are_reseated() {
        let mut white = RandomAgent::with_seed(Side::Black, 3);
        let mut black = RandomAgent::with_seed(Side::White, 4);
        play_episode(opening(), Side::White, &mut white, &mut black, 5);
        assert_eq!(white.side(), Side::White);
        assert_eq!(black.side(), Side::Black);
    }
}
