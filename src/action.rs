//! # Actions
//!
//! An [`Action`] is something an agent can do: it costs something, it needs
//! some conditions to hold first (its preconditions), and it makes some
//! conditions hold afterwards (its effects). The planner chains actions
//! backwards from a goal by matching effects against outstanding conditions.
//!
//! ```
//! use goap_planner::{Action, Beliefs};
//!
//! let chop_wood = Action::new("chop_wood", 2.0)
//!     .unwrap()
//!     .with_precondition("has_axe")
//!     .with_precondition("near_tree")
//!     .with_effect("has_wood");
//!
//! let mut beliefs = Beliefs::new();
//! beliefs.set("has_axe", true);
//! assert!(!chop_wood.can_perform(&beliefs));
//!
//! beliefs.set("near_tree", true);
//! assert!(chop_wood.can_perform(&beliefs));
//! ```

use std::fmt;

use crate::{Condition, ConditionSet, GoapError, Result, WorldOracle};

/// A cost-bearing operation with preconditions and effects.
///
/// Actions are immutable once handed to the planner. Two actions may share a
/// name; the planner tells them apart by their position in the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    /// The name of the action
    pub name: String,
    /// The cost of performing this action
    pub cost: f32,
    /// Conditions that must hold before this action can run
    pub preconditions: ConditionSet,
    /// Conditions this action establishes
    pub effects: ConditionSet,
}

impl Action {
    /// Creates an action with no preconditions and no effects.
    ///
    /// # Errors
    ///
    /// Returns `GoapError::InvalidActionCost` if `cost` is negative, NaN or
    /// infinite. A cost of zero is allowed.
    ///
    /// ```
    /// use goap_planner::Action;
    ///
    /// assert!(Action::new("wait", 0.0).is_ok());
    /// assert!(Action::new("invalid", -1.0).is_err());
    /// assert!(Action::new("invalid", f32::NAN).is_err());
    /// ```
    pub fn new(name: impl Into<String>, cost: f32) -> Result<Self> {
        if !cost.is_finite() || cost < 0.0 {
            return Err(GoapError::InvalidActionCost(cost));
        }

        Ok(Self {
            name: name.into(),
            cost,
            preconditions: ConditionSet::new(),
            effects: ConditionSet::new(),
        })
    }

    /// Adds a precondition.
    pub fn with_precondition(mut self, condition: impl Into<Condition>) -> Self {
        self.preconditions.insert(condition.into());
        self
    }

    /// Adds an effect.
    pub fn with_effect(mut self, condition: impl Into<Condition>) -> Self {
        self.effects.insert(condition.into());
        self
    }

    /// True when every precondition currently holds.
    pub fn can_perform(&self, oracle: &dyn WorldOracle) -> bool {
        self.preconditions.iter().all(|c| oracle.evaluate(c))
    }

    /// True when this action establishes at least one of `required`.
    pub fn satisfies_any(&self, required: &ConditionSet) -> bool {
        !self.effects.is_disjoint(required)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (cost {})", self.name, self.cost)
    }
}
