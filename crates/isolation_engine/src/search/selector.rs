//! Best-move tracking across deepening iterations

use crate::types::Move;

/// Holds the best move found so far during iterative deepening.
///
/// Starts at the sentinel and is updated only when a depth's full search
/// pass returns without interruption. A run aborted by the deadline never
/// touches it. Once a depth completes, its result permanently supersedes
/// all shallower ones.
#[derive(Debug, Default)]
pub struct MoveSelector {
    best: Move,
    completed_depth: Option<u32>,
}

impl MoveSelector {
    pub fn new() -> Self {
        MoveSelector {
            best: Move::NONE,
            completed_depth: None,
        }
    }

    /// Record the result of a fully completed depth.
    pub fn commit(&mut self, mv: Move, depth: u32) {
        self.best = mv;
        self.completed_depth = Some(depth);
    }

    /// The move to play: the deepest committed result, or the sentinel if
    /// no depth ever completed.
    pub fn best(&self) -> Move {
        self.best
    }

    /// Deepest fully completed depth, if any.
    pub fn completed_depth(&self) -> Option<u32> {
        self.completed_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_sentinel_with_no_completed_depth() {
        let selector = MoveSelector::new();
        assert!(selector.best().is_none());
        assert_eq!(selector.completed_depth(), None);
    }

    #[test]
    fn test_commit_supersedes_shallower_result() {
        let mut selector = MoveSelector::new();
        selector.commit(Move::new(0, 0), 1);
        selector.commit(Move::new(3, 4), 2);
        assert_eq!(selector.best(), Move::new(3, 4));
        assert_eq!(selector.completed_depth(), Some(2));
    }
}
