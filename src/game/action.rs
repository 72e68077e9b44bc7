use super::board::{Coord, PieceColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Sentinel returned when reading past the end of the log
    None,
    Ready,
    Start,
    Moved,
    Killed,
    Standby,
    GameOver,
}

/// One immutable entry of the action log.
///
/// `color` depends on the kind: the mover for `Moved`, the side that just
/// moved (and now waits) for `Standby`, the winner for `GameOver`, and
/// `Empty` for `Killed`. Coordinates are `None` where they do not apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    pub kind: ActionKind,
    pub color: PieceColor,
    pub source: Option<Coord>,
    pub target: Option<Coord>,
}

impl Action {
    pub const NONE: Action = Action {
        kind: ActionKind::None,
        color: PieceColor::Empty,
        source: None,
        target: None,
    };

    /// An action without coordinates
    pub fn marker(kind: ActionKind, color: PieceColor) -> Self {
        Action {
            kind,
            color,
            source: None,
            target: None,
        }
    }

    pub fn moved(color: PieceColor, source: Coord, target: Coord) -> Self {
        Action {
            kind: ActionKind::Moved,
            color,
            source: Some(source),
            target: Some(target),
        }
    }

    /// `by` is the capturing cell, `None` for the end-of-game wipe.
    pub fn killed(by: Option<Coord>, target: Coord) -> Self {
        Action {
            kind: ActionKind::Killed,
            color: PieceColor::Empty,
            source: by,
            target: Some(target),
        }
    }

    pub fn is_none(&self) -> bool {
        self.kind == ActionKind::None
    }
}

impl Default for Action {
    fn default() -> Self {
        Action::NONE
    }
}
