use crate::{Action, Goal, Plan, Planner, Result, WorldOracle};

/// An agent's static planning setup: what it can do, what it wants, and which
/// goal it went after last time.
///
/// The agent only plans. Running the plan, and deciding when to ask for a new
/// one, is left to the caller.
///
/// # Examples
///
/// ```
/// use goap_planner::{Action, Beliefs, GoapAgent, Goal};
///
/// let mut agent = GoapAgent::new(
///     vec![
///         Action::new("eat", 1.0).unwrap().with_effect("fed"),
///         Action::new("sleep", 1.0).unwrap().with_effect("rested"),
///     ],
///     vec![
///         Goal::new("hunger", 5.0).unwrap().with_desired_effect("fed"),
///         Goal::new("fatigue", 5.0).unwrap().with_desired_effect("rested"),
///     ],
/// );
///
/// let beliefs = Beliefs::new();
/// assert_eq!(agent.plan(&beliefs).unwrap().goal().name, "hunger");
/// // equal priority: the agent alternates instead of repeating itself
/// assert_eq!(agent.plan(&beliefs).unwrap().goal().name, "fatigue");
/// ```
pub struct GoapAgent {
    actions: Vec<Action>,
    goals: Vec<Goal>,
    planner: Planner,
    last_goal: Option<String>,
}

impl GoapAgent {
    /// Creates an agent using the default planner.
    pub fn new(actions: Vec<Action>, goals: Vec<Goal>) -> Self {
        Self::with_planner(actions, goals, Planner::new())
    }

    pub fn with_planner(actions: Vec<Action>, goals: Vec<Goal>, planner: Planner) -> Self {
        Self {
            actions,
            goals,
            planner,
            last_goal: None,
        }
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Name of the goal the last successful plan was for.
    pub fn last_goal(&self) -> Option<&str> {
        self.last_goal.as_deref()
    }

    /// Forgets the last chosen goal, e.g. after the agent was interrupted.
    pub fn reset(&mut self) {
        self.last_goal = None;
    }

    /// Plans against `oracle`, remembering the chosen goal for the next call.
    ///
    /// A failed call leaves the remembered goal unchanged.
    pub fn plan(&mut self, oracle: &dyn WorldOracle) -> Result<Plan<'_>> {
        let most_recent = self
            .last_goal
            .as_deref()
            .and_then(|name| self.goals.iter().find(|goal| goal.name == name));

        let plan = self
            .planner
            .plan(&self.goals, &self.actions, most_recent, oracle)?;
        self.last_goal = Some(plan.goal().name.clone());
        Ok(plan)
    }
}
