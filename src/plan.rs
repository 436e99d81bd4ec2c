use std::fmt;

use crate::{Action, Beliefs, Goal};

/// The output of a successful planning call.
///
/// A plan borrows the goal and actions it was built from. `actions` is in
/// execution order: actions that establish preconditions come before the
/// actions that need them.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan<'a> {
    goal: &'a Goal,
    actions: Vec<&'a Action>,
    total_cost: f32,
}

impl<'a> Plan<'a> {
    pub(crate) fn new(goal: &'a Goal, actions: Vec<&'a Action>, total_cost: f32) -> Self {
        Self {
            goal,
            actions,
            total_cost,
        }
    }

    /// The goal this plan achieves.
    pub fn goal(&self) -> &'a Goal {
        self.goal
    }

    /// The actions to run, first to last.
    pub fn actions(&self) -> &[&'a Action] {
        &self.actions
    }

    pub fn total_cost(&self) -> f32 {
        self.total_cost
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Action names in execution order.
    pub fn action_names(&self) -> Vec<&'a str> {
        self.actions.iter().map(|a| a.name.as_str()).collect()
    }

    /// Replays every action's effects, in order, on a copy of `beliefs`.
    ///
    /// Useful for checking what the plan would achieve before running it.
    ///
    /// ```
    /// use goap_planner::{Action, Beliefs, Goal, Planner};
    ///
    /// let actions = vec![Action::new("eat", 1.0).unwrap().with_effect("fed")];
    /// let goals = vec![Goal::new("survive", 1.0).unwrap().with_desired_effect("fed")];
    /// let beliefs = Beliefs::new();
    ///
    /// let plan = Planner::new().plan(&goals, &actions, None, &beliefs).unwrap();
    /// let after = plan.simulate(&beliefs);
    /// assert!(after.satisfies(&plan.goal().desired_effects));
    /// ```
    pub fn simulate(&self, beliefs: &Beliefs) -> Beliefs {
        let mut state = beliefs.clone();
        for action in &self.actions {
            state.apply_effects(action);
        }
        state
    }
}

impl fmt::Display for Plan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> [{}] (cost {})",
            self.goal.name,
            self.action_names().join(", "),
            self.total_cost
        )
    }
}
