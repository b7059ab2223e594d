//! Per-node bookkeeping shared by minimax and alpha-beta.
//!
//! A node folds each child's score into a `Scored` accumulator, and alpha-beta
//! additionally narrows a `Window`. Both are plain values replaced on every
//! child, so the tie-break and cutoff rules can be checked on their own.

use crate::coretypes::Move;

/// Whether a node picks the greatest or the least child score.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Role {
    Max,
    Min,
}

impl Role {
    /// Role of the children of a node with this role.
    pub const fn flip(&self) -> Self {
        match self {
            Role::Max => Role::Min,
            Role::Min => Role::Max,
        }
    }

    /// The score every child improves on or equals.
    pub const fn worst(&self) -> f64 {
        match self {
            Role::Max => f64::NEG_INFINITY,
            Role::Min => f64::INFINITY,
        }
    }

    /// Returns true if `candidate` is strictly better than `current` for this role.
    pub fn prefers(&self, candidate: f64, current: f64) -> bool {
        match self {
            Role::Max => candidate > current,
            Role::Min => candidate < current,
        }
    }
}

/// A score paired with the move that leads to it.
/// `best_move` is `Move::NULL` for leaves, which have no move of their own.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Scored {
    pub score: f64,
    pub best_move: Move,
}

impl Scored {
    /// A leaf result.
    pub const fn leaf(score: f64) -> Self {
        Self {
            score,
            best_move: Move::NULL,
        }
    }

    /// Accumulator for a node with `role` before any child is seen.
    pub const fn start(role: Role) -> Self {
        Self::leaf(role.worst())
    }

    /// Fold one child into the accumulator.
    ///
    /// The child replaces the recorded move and score together if it is strictly
    /// better, so among equal scores the first child folded is kept. The first child
    /// is always recorded, so a node with any children names one of their moves even
    /// if every child scores the worst possible value.
    pub fn fold(self, role: Role, move_: Move, score: f64) -> Self {
        if self.best_move.is_null() || role.prefers(score, self.score) {
            Self {
                score,
                best_move: move_,
            }
        } else {
            self
        }
    }
}

/// Alpha is the best score the maxing player is already guaranteed,
/// beta is the best score the minning player is already guaranteed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Window {
    pub alpha: f64,
    pub beta: f64,
}

impl Window {
    /// Unbounded window, used at the root.
    pub const FULL: Window = Window {
        alpha: f64::NEG_INFINITY,
        beta: f64::INFINITY,
    };

    /// Raise alpha (maxing) or lower beta (minning) to a node's running best score.
    pub fn narrow(self, role: Role, best: f64) -> Self {
        match role {
            Role::Max => Self {
                alpha: self.alpha.max(best),
                ..self
            },
            Role::Min => Self {
                beta: self.beta.min(best),
                ..self
            },
        }
    }

    /// Returns true once no remaining sibling can affect the parent.
    pub fn is_closed(&self) -> bool {
        self.alpha >= self.beta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Move = Move::new(0, 1);
    const B: Move = Move::new(1, 0);
    const C: Move = Move::new(2, 2);

    #[test]
    fn first_of_equal_scores_wins() {
        let max = Scored::start(Role::Max)
            .fold(Role::Max, A, 3.0)
            .fold(Role::Max, B, 3.0);
        assert_eq!(max.best_move, A);

        let min = Scored::start(Role::Min)
            .fold(Role::Min, A, -1.0)
            .fold(Role::Min, B, -1.0);
        assert_eq!(min.best_move, A);
    }

    #[test]
    fn move_and_score_update_together() {
        let folded = [(A, 1.0), (B, 5.0), (C, 2.0)]
            .into_iter()
            .fold(Scored::start(Role::Max), |acc, (move_, score)| {
                acc.fold(Role::Max, move_, score)
            });
        assert_eq!(
            folded,
            Scored {
                score: 5.0,
                best_move: B
            }
        );

        let folded = [(A, 1.0), (B, 5.0), (C, -2.0)]
            .into_iter()
            .fold(Scored::start(Role::Min), |acc, (move_, score)| {
                acc.fold(Role::Min, move_, score)
            });
        assert_eq!(
            folded,
            Scored {
                score: -2.0,
                best_move: C
            }
        );
    }

    #[test]
    fn first_child_recorded_even_when_lost() {
        let lost = Scored::start(Role::Max)
            .fold(Role::Max, A, f64::NEG_INFINITY)
            .fold(Role::Max, B, f64::NEG_INFINITY);
        assert_eq!(lost.best_move, A);
        assert_eq!(lost.score, f64::NEG_INFINITY);

        let won = Scored::start(Role::Min).fold(Role::Min, C, f64::INFINITY);
        assert_eq!(won.best_move, C);
    }

    #[test]
    fn window_narrows_and_closes() {
        let window = Window::FULL.narrow(Role::Max, 2.0);
        assert_eq!(window.alpha, 2.0);
        assert!(!window.is_closed());

        let window = window.narrow(Role::Min, 4.0);
        assert_eq!(window.beta, 4.0);
        assert!(!window.is_closed());

        // Alpha never decreases, beta never increases.
        assert_eq!(window.narrow(Role::Max, 1.0), window);
        assert_eq!(window.narrow(Role::Min, 9.0), window);

        assert!(window.narrow(Role::Min, 2.0).is_closed());
        assert!(window.narrow(Role::Max, 4.0).is_closed());
    }

    #[test]
    fn roles_flip() {
        assert_eq!(Role::Max.flip(), Role::Min);
        assert!(Role::Min.prefers(-1.0, 0.0));
        assert!(!Role::Max.prefers(0.0, 0.0));
    }
}
