use super::action::Action;

/// Append-only action log with synchronous change notification.
///
/// Subscribers receive no payload. Each reader keeps its own [`ReadCursor`]
/// and pulls entries when it is ready to process them.
pub struct ActionLog {
    actions: Vec<Action>,
    subscribers: Vec<Box<dyn FnMut()>>,
    generation: u64,
}

impl ActionLog {
    pub fn new() -> Self {
        ActionLog {
            actions: Vec::new(),
            subscribers: Vec::new(),
            generation: 0,
        }
    }

    /// Push `action`, then notify every subscriber in subscription order.
    pub fn append(&mut self, action: Action) {
        self.actions.push(action);
        for notify in self.subscribers.iter_mut() {
            notify();
        }
    }

    /// Entry at `index`, or [`Action::NONE`] past the end.
    pub fn get(&self, index: usize) -> Action {
        self.actions.get(index).copied().unwrap_or(Action::NONE)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }

    pub fn subscribe(&mut self, callback: impl FnMut() + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Drop every entry and start a new generation. Subscriptions survive.
    pub fn clear(&mut self) {
        self.actions.clear();
        self.generation += 1;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Default for ActionLog {
    fn default() -> Self {
        Self::new()
    }
}

/// A consumer-owned read position into an [`ActionLog`].
///
/// The position only moves forward within one log generation. When the log
/// has been cleared since the last read, the cursor restarts at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadCursor {
    position: usize,
    generation: u64,
}

impl ReadCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Entry under the cursor without consuming it.
    pub fn peek(&mut self, log: &ActionLog) -> Action {
        self.sync(log);
        log.get(self.position)
    }

    /// Step past the entry returned by the last `peek`.
    pub fn advance(&mut self) {
        self.position += 1;
    }

    /// Entries appended but not yet consumed.
    pub fn lag(&mut self, log: &ActionLog) -> usize {
        self.sync(log);
        log.len().saturating_sub(self.position)
    }

    fn sync(&mut self, log: &ActionLog) {
        if self.generation != log.generation() {
            self.generation = log.generation();
            self.position = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::action::ActionKind;
    use crate::game::board::PieceColor;
    use std::cell::Cell;
    use std::rc::Rc;

    fn standby(color: PieceColor) -> Action {
        Action::marker(ActionKind::Standby, color)
    }

    #[test]
    fn test_get_past_end_returns_sentinel() {
        let mut log = ActionLog::new();
        assert_eq!(log.get(0), Action::NONE);

        log.append(standby(PieceColor::White));
        assert_eq!(log.get(0).kind, ActionKind::Standby);
        for index in [log.len(), log.len() + 1, usize::MAX] {
            assert!(log.get(index).is_none());
        }
    }

    #[test]
    fn test_subscribers_notified_in_order() {
        let mut log = ActionLog::new();
        let order = Rc::new(std::cell::RefCell::new(Vec::new()));

        for id in 0..3 {
            let order = Rc::clone(&order);
            log.subscribe(move || order.borrow_mut().push(id));
        }
        log.append(standby(PieceColor::Black));
        log.append(standby(PieceColor::White));

        assert_eq!(*order.borrow(), vec![0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn test_cursor_pulls_at_own_pace() {
        let mut log = ActionLog::new();
        let mut fast = ReadCursor::new();
        let mut slow = ReadCursor::new();

        log.append(Action::marker(ActionKind::Ready, PieceColor::Black));
        log.append(Action::marker(ActionKind::Start, PieceColor::Black));

        let mut seen = Vec::new();
        loop {
            let action = fast.peek(&log);
            if action.is_none() {
                break;
            }
            seen.push(action.kind);
            fast.advance();
        }
        assert_eq!(seen, vec![ActionKind::Ready, ActionKind::Start]);
        assert_eq!(fast.lag(&log), 0);

        assert_eq!(slow.lag(&log), 2);
        assert_eq!(slow.peek(&log).kind, ActionKind::Ready);
    }

    #[test]
    fn test_clear_restarts_cursors() {
        let mut log = ActionLog::new();
        let notified = Rc::new(Cell::new(0));
        {
            let notified = Rc::clone(&notified);
            log.subscribe(move || notified.set(notified.get() + 1));
        }

        let mut cursor = ReadCursor::new();
        log.append(standby(PieceColor::White));
        log.append(standby(PieceColor::Black));
        cursor.peek(&log);
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.position(), 2);

        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.subscriber_count(), 1);

        log.append(Action::marker(ActionKind::Ready, PieceColor::Black));
        assert_eq!(cursor.peek(&log).kind, ActionKind::Ready);
        assert_eq!(cursor.position(), 0);
        assert_eq!(notified.get(), 3);
    }
}
