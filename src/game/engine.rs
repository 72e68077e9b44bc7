use std::collections::VecDeque;
use std::time::Duration;

use tracing::{debug, info};

use super::action::{Action, ActionKind};
use super::board::{Board, Coord};
use super::capture::captures;
use super::log::ActionLog;
use super::moves::{all_moves, MoveTrack};
use super::player::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, `ready` not called yet
    Idle,
    AwaitingMove(Side),
    GameOver { winner: Side },
}

/// Owns the board and the action log; the only writer of either.
///
/// Producers call [`submit_move`](Self::submit_move) at any time. Requests are
/// queued and validated when the host drives [`update`](Self::update).
pub struct TurnEngine {
    initial: Board,
    first_mover: Side,
    board: Board,
    phase: Phase,
    move_queue: VecDeque<MoveTrack>,
    log: ActionLog,
    elapsed: Duration,
}

impl TurnEngine {
    pub fn new(initial: Board, first_mover: Side) -> Self {
        TurnEngine {
            initial,
            first_mover,
            board: initial,
            phase: Phase::Idle,
            move_queue: VecDeque::new(),
            log: ActionLog::new(),
            elapsed: Duration::ZERO,
        }
    }

    /// Start a new game from the initial layout.
    pub fn ready(&mut self) {
        self.board = self.initial;
        self.move_queue.clear();
        self.log.clear();
        self.elapsed = Duration::ZERO;
        self.phase = Phase::AwaitingMove(self.first_mover);

        let standby = self.first_mover.other().to_piece();
        self.log.append(Action::marker(ActionKind::Ready, standby));
        self.log.append(Action::marker(ActionKind::Start, standby));
        self.log.append(Action::marker(ActionKind::Standby, standby));
        info!(first_mover = self.first_mover.name(), "game ready");
    }

    /// Queue a move request. Takes effect, if legal, on the next `update`.
    pub fn submit_move(&mut self, source: Coord, target: Coord) {
        self.move_queue.push_back(MoveTrack::new(source, target));
    }

    /// Drain every queued move in submission order.
    pub fn update(&mut self, dt: Duration) {
        self.elapsed += dt;
        while let Some(track) = self.move_queue.pop_front() {
            match self.legal_mover(&track) {
                Some(mover) => self.apply(track, mover),
                None => debug!(
                    source = %track.source,
                    target = %track.target,
                    "dropped illegal move"
                ),
            }
        }
    }

    /// The side that may play `track` right now, if any.
    fn legal_mover(&self, track: &MoveTrack) -> Option<Side> {
        let Phase::AwaitingMove(side) = self.phase else {
            return None;
        };
        let MoveTrack { source, target } = *track;
        let legal = source != target
            && self.board.is_occupied(source)
            && Board::in_bounds(target)
            && !self.board.is_occupied(target)
            && Board::is_adjacent(source, target)
            && self.board.color_at(source).side() == Some(side);
        legal.then_some(side)
    }

    fn apply(&mut self, track: MoveTrack, mover: Side) {
        let MoveTrack { source, target } = track;
        self.board.swap(source, target);
        debug_assert!(
            !self.board.is_occupied(source),
            "source {source} still occupied after move"
        );
        self.log.append(Action::moved(mover.to_piece(), source, target));
        debug!(side = mover.name(), %source, %target, "move applied");

        for pos in captures(&self.board, target) {
            self.board.clear(pos);
            self.log.append(Action::killed(Some(target), pos));
            debug!(by = %target, captured = %pos, "piece captured");
        }

        self.finish_turn(mover);
    }

    fn finish_turn(&mut self, mover: Side) {
        let other = mover.other();
        let remaining = self.board.count(other.to_piece());

        if remaining <= 1 {
            self.end_game(mover);
        } else if all_moves(&self.board, other).is_empty() {
            self.end_game(mover);
            for pos in self.board.pieces(other.to_piece()) {
                self.log.append(Action::killed(None, pos));
            }
        } else {
            self.phase = Phase::AwaitingMove(other);
            self.log.append(Action::marker(ActionKind::Standby, mover.to_piece()));
        }
    }

    fn end_game(&mut self, winner: Side) {
        self.phase = Phase::GameOver { winner };
        self.move_queue.clear();
        self.log.append(Action::marker(ActionKind::GameOver, winner.to_piece()));
        info!(winner = winner.name(), actions = self.log.len(), "game over");
    }

    /// Register a callback run after every append.
    pub fn subscribe(&mut self, callback: impl FnMut() + 'static) {
        self.log.subscribe(callback);
    }

    /// Copy of the authoritative board
    pub fn checkerboard_snapshot(&self) -> Board {
        self.board
    }

    pub fn action_at(&self, index: usize) -> Action {
        self.log.get(index)
    }

    pub fn action_count(&self) -> usize {
        self.log.len()
    }

    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    /// The side recorded in the latest Standby, i.e. the side not to move.
    pub fn standby(&self) -> Option<Side> {
        match self.phase {
            Phase::AwaitingMove(side) => Some(side.other()),
            _ => None,
        }
    }

    pub fn pending_moves(&self) -> usize {
        self.move_queue.len()
    }

    /// Time accumulated by `update` since the last `ready`
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
