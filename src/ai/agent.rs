use std::cell::Cell;
use std::rc::Rc;

use crate::game::{ActionKind, Board, MoveTrack, Phase, ReadCursor, Side, TurnEngine};

/// Universal interface for move sources.
///
/// A move source reads the engine's action log through its own cursor and
/// answers turn signals by calling [`TurnEngine::submit_move`]. Local robots,
/// scripted players and remote peers all plug in here.
pub trait Agent {
    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// The side this agent plays.
    fn side(&self) -> Side;

    /// Take a side for the next game.
    fn reset(&mut self, side: Side);

    /// Subscribe to the engine's log notifications.
    fn attach(&mut self, engine: &mut TurnEngine);

    /// Catch up with the log, submitting a move whenever it is this agent's turn.
    fn poll(&mut self, engine: &mut TurnEngine);
}

/// Log-reading state shared by the built-in agents: side, cursor, and the
/// flag raised by the engine's append notification.
pub struct Seat {
    side: Side,
    cursor: ReadCursor,
    notified: Rc<Cell<bool>>,
}

impl Seat {
    pub fn new(side: Side) -> Self {
        Seat {
            side,
            cursor: ReadCursor::new(),
            notified: Rc::new(Cell::new(true)),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn reset(&mut self, side: Side) {
        self.side = side;
        self.cursor = ReadCursor::new();
        self.notified.set(true);
    }

    pub fn attach(&self, engine: &mut TurnEngine) {
        let notified = Rc::clone(&self.notified);
        engine.subscribe(move || notified.set(true));
        self.notified.set(true);
    }

    /// True when the log changed since the last [`drain`](Self::drain).
    pub fn is_notified(&self) -> bool {
        self.notified.get()
    }

    /// Consume every unread action. For each Standby that hands the turn to
    /// this seat, ask `choose` for a move and submit it.
    ///
    /// A Standby names the side that just moved, so the turn belongs to us
    /// when its color is not ours.
    pub fn drain(
        &mut self,
        engine: &mut TurnEngine,
        mut choose: impl FnMut(&Board) -> Option<MoveTrack>,
    ) {
        if !self.notified.replace(false) {
            return;
        }

        loop {
            let action = self.cursor.peek(engine.log());
            if action.is_none() {
                break;
            }

            let my_turn = action.kind == ActionKind::Standby
                && action.color != self.side.to_piece()
                && engine.phase() == Phase::AwaitingMove(self.side);
            if my_turn {
                let board = engine.checkerboard_snapshot();
                if let Some(track) = choose(&board) {
                    engine.submit_move(track.source, track.target);
                }
            }
            self.cursor.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{all_moves, Coord};
    use std::time::Duration;

    fn opening() -> Board {
        Board::from_layout(&[2, 2, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1]).unwrap()
    }

    #[test]
    fn test_seat_flag_follows_log_appends() {
        let mut engine = TurnEngine::new(opening(), Side::White);
        let mut seat = Seat::new(Side::Black);
        seat.attach(&mut engine);
        engine.ready();
        assert!(seat.is_notified());

        // White opens, so black is not asked
        let mut asked = 0;
        seat.drain(&mut engine, |_| {
            asked += 1;
            None
        });
        assert!(!seat.is_notified());
        assert_eq!(asked, 0);

        // Queuing alone appends nothing
        engine.submit_move(Coord::new(0, 3), Coord::new(0, 2));
        assert!(!seat.is_notified());
        engine.update(Duration::ZERO);
        assert!(seat.is_notified());

        seat.drain(&mut engine, |b| {
            asked += 1;
            all_moves(b, Side::Black).first().copied()
        });
        assert_eq!(asked, 1);
        assert_eq!(engine.pending_moves(), 1);
        assert!(!seat.is_notified());
    }
}
