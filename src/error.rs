use std::fmt;

use thiserror::Error;

/// Errors produced by the GOAP planner.
///
/// Planning itself has a single failure mode, [`GoapError::NoPlanFound`],
/// which carries a [`NoPlan`] report describing every goal that was tried.
/// The remaining variants reject malformed input before any search runs.
///
/// # Examples
///
/// ```
/// use goap_planner::{Action, GoapError};
///
/// let err = Action::new("teleport", -1.0).unwrap_err();
/// assert!(matches!(err, GoapError::InvalidActionCost(_)));
/// assert_eq!(
///     err.to_string(),
///     "Action cost must be a finite, non-negative number, got -1"
/// );
/// ```
#[derive(Error, Debug)]
pub enum GoapError {
    /// No candidate goal produced a usable plan
    #[error("No valid plan found: {0}")]
    NoPlanFound(NoPlan),

    /// An action was declared with a negative, NaN or infinite cost
    #[error("Action cost must be a finite, non-negative number, got {0}")]
    InvalidActionCost(f32),

    /// A goal was declared with a NaN or infinite priority
    #[error("Goal priority must be a finite number, got {0}")]
    InvalidGoalPriority(f32),

    /// Two goals share a name, so the most recent goal is ambiguous
    #[error("Duplicate goal name: {0}")]
    DuplicateGoal(String),

    /// The planner configuration failed validation
    #[error("Invalid planner configuration: {0}")]
    InvalidConfig(String),

    /// Writing diagnostics output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Formatting diagnostics output failed
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

/// Result type alias for planner operations.
pub type Result<T> = std::result::Result<T, GoapError>;

/// Why a candidate goal did not yield a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// No chain of actions explains the goal's outstanding conditions
    SearchFailed,
    /// The search succeeded without choosing any action
    DeadLeaf,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::SearchFailed => write!(f, "search failed"),
            Rejection::DeadLeaf => write!(f, "dead leaf"),
        }
    }
}

/// A single goal the planner tried and gave up on.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalAttempt {
    pub goal: String,
    pub rejection: Rejection,
}

/// Structured report of a planning call that produced no plan.
///
/// `attempts` lists the candidate goals in the order they were tried. An
/// empty list means every goal was already satisfied (or had no desired
/// effects), so there was nothing to search for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoPlan {
    pub attempts: Vec<GoalAttempt>,
}

impl NoPlan {
    /// True when no goal was a planning candidate at all.
    pub fn no_candidates(&self) -> bool {
        self.attempts.is_empty()
    }

    /// The rejection recorded for `goal`, if it was attempted.
    pub fn rejection_for(&self, goal: &str) -> Option<Rejection> {
        self.attempts
            .iter()
            .find(|attempt| attempt.goal == goal)
            .map(|attempt| attempt.rejection)
    }
}

impl fmt::Display for NoPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.attempts.is_empty() {
            return write!(f, "no unsatisfied goals to plan for");
        }
        let tried = self
            .attempts
            .iter()
            .map(|attempt| format!("{} ({})", attempt.goal, attempt.rejection))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "tried {}", tried)
    }
}
