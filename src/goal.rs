use std::fmt;

use crate::{Condition, ConditionSet, GoapError, Result, WorldOracle};

/// A prioritized set of conditions an agent wants to hold.
///
/// A goal is satisfied when every desired effect evaluates true. Goals are
/// identified by name when the planner applies its recency tie-break.
///
/// # Examples
///
/// ```
/// use goap_planner::{Beliefs, Goal};
///
/// let survive = Goal::new("survive", 10.0)
///     .unwrap()
///     .with_desired_effect("fed")
///     .with_desired_effect("safe");
///
/// let mut beliefs = Beliefs::new();
/// beliefs.set("safe", true);
///
/// assert!(!survive.is_satisfied(&beliefs));
/// let missing: Vec<_> = survive.unsatisfied(&beliefs).map(|c| c.name()).collect();
/// assert_eq!(missing, ["fed"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    pub name: String,
    pub priority: f32,
    pub desired_effects: ConditionSet,
}

impl Goal {
    /// Creates a goal with no desired effects.
    ///
    /// # Errors
    ///
    /// Returns `GoapError::InvalidGoalPriority` if `priority` is NaN or
    /// infinite.
    pub fn new(name: impl Into<String>, priority: f32) -> Result<Self> {
        if !priority.is_finite() {
            return Err(GoapError::InvalidGoalPriority(priority));
        }

        Ok(Self {
            name: name.into(),
            priority,
            desired_effects: ConditionSet::new(),
        })
    }

    /// Adds a desired effect.
    pub fn with_desired_effect(mut self, condition: impl Into<Condition>) -> Self {
        self.desired_effects.insert(condition.into());
        self
    }

    /// True when every desired effect currently holds.
    ///
    /// A goal with no desired effects is trivially satisfied.
    pub fn is_satisfied(&self, oracle: &dyn WorldOracle) -> bool {
        self.desired_effects.iter().all(|c| oracle.evaluate(c))
    }

    /// The desired effects that do not hold right now.
    pub fn unsatisfied<'g>(
        &'g self,
        oracle: &'g dyn WorldOracle,
    ) -> impl Iterator<Item = &'g Condition> + 'g {
        self.desired_effects.iter().filter(move |c| !oracle.evaluate(c))
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (priority {})", self.name, self.priority)
    }
}
