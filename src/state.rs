//! # Beliefs: a concrete world-state snapshot
//!
//! The planner only needs a [`WorldOracle`], but most callers keep their
//! agent's view of the world as a plain table of true/false facts. [`Beliefs`]
//! is that table. It answers oracle queries directly (unknown conditions are
//! false) and can replay a plan's effects to check what the plan would
//! achieve.
//!
//! ```
//! use goap_planner::{Beliefs, WorldOracle};
//!
//! let mut beliefs = Beliefs::new();
//! beliefs.set("has_axe", true);
//! beliefs.set("near_tree", false);
//!
//! assert!(beliefs.evaluate(&"has_axe".into()));
//! assert!(!beliefs.evaluate(&"near_tree".into()));
//! assert!(!beliefs.evaluate(&"has_wood".into()));
//! ```

use std::collections::BTreeMap;

use crate::{Action, Condition, WorldOracle};

/// A snapshot of what an agent believes to be true about the world.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Beliefs {
    values: BTreeMap<Condition, bool>,
}

impl Beliefs {
    /// Creates an empty snapshot in which every condition is false.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the truth value of a condition, replacing any earlier value.
    pub fn set(&mut self, condition: impl Into<Condition>, value: bool) {
        self.values.insert(condition.into(), value);
    }

    /// The recorded value of a condition, or `None` if it was never set.
    pub fn get(&self, condition: &Condition) -> Option<bool> {
        self.values.get(condition).copied()
    }

    /// True when every condition in `conditions` holds.
    ///
    /// ```
    /// use goap_planner::{conditions, Beliefs};
    ///
    /// let mut beliefs = Beliefs::new();
    /// beliefs.set("fed", true);
    ///
    /// assert!(beliefs.satisfies(&conditions(["fed"])));
    /// assert!(!beliefs.satisfies(&conditions(["fed", "rested"])));
    /// ```
    pub fn satisfies<'c>(&self, conditions: impl IntoIterator<Item = &'c Condition>) -> bool {
        conditions.into_iter().all(|c| self.evaluate(c))
    }

    /// Marks every effect of `action` as true.
    pub fn apply_effects(&mut self, action: &Action) {
        for effect in &action.effects {
            self.set(effect.clone(), true);
        }
    }

    /// All recorded conditions and their values, ordered by name.
    pub fn values(&self) -> &BTreeMap<Condition, bool> {
        &self.values
    }
}

impl WorldOracle for Beliefs {
    fn evaluate(&self, condition: &Condition) -> bool {
        self.get(condition).unwrap_or(false)
    }
}

impl<C: Into<Condition>> FromIterator<(C, bool)> for Beliefs {
    fn from_iter<I: IntoIterator<Item = (C, bool)>>(iter: I) -> Self {
        let mut beliefs = Beliefs::new();
        for (condition, value) in iter {
            beliefs.set(condition, value);
        }
        beliefs
    }
}
