//! # Conditions and the world oracle
//!
//! A [`Condition`] is an opaque, named predicate over the world. The planner
//! never looks inside a condition: it only compares conditions for equality,
//! keeps them in ordered sets, and asks a [`WorldOracle`] whether each one
//! currently holds.
//!
//! ```
//! use goap_planner::{Condition, WorldOracle};
//!
//! let has_food = Condition::new("has_food");
//! let oracle = |c: &Condition| c.name() == "has_food";
//!
//! assert!(oracle.evaluate(&has_food));
//! assert!(!oracle.evaluate(&Condition::new("fed")));
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// An opaque, named predicate over world state.
///
/// Conditions are identified by name only. Cloning is cheap (the name is
/// shared), which matters because the search copies condition sets at every
/// node it builds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Condition(Arc<str>);

impl Condition {
    /// Creates a condition with the given name.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// The condition's name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Condition {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Condition {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// An ordered set of conditions.
pub type ConditionSet = BTreeSet<Condition>;

/// Builds a [`ConditionSet`] from anything convertible into conditions.
///
/// ```
/// use goap_planner::conditions;
///
/// let set = conditions(["fed", "has_food"]);
/// assert_eq!(set.len(), 2);
/// ```
pub fn conditions<I, C>(items: I) -> ConditionSet
where
    I: IntoIterator<Item = C>,
    C: Into<Condition>,
{
    items.into_iter().map(Into::into).collect()
}

/// Answers whether a condition currently holds in the world.
///
/// This is the only view of world state the planner has. Implementations must
/// not mutate the world while planning is in progress; the planner may
/// evaluate the same condition many times.
pub trait WorldOracle {
    /// Returns `true` if `condition` holds right now.
    fn evaluate(&self, condition: &Condition) -> bool;
}

impl<F> WorldOracle for F
where
    F: Fn(&Condition) -> bool,
{
    fn evaluate(&self, condition: &Condition) -> bool {
        self(condition)
    }
}
