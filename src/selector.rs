use crate::{Goal, WorldOracle};

/// Priority penalty applied to the most recently chosen goal.
pub const DEFAULT_RECENCY_PENALTY: f32 = 0.01;

/// Orders candidate goals for planning.
///
/// Only goals with at least one desired effect that does not hold right now
/// are candidates. Candidates are ordered by priority, highest first. The
/// most recently chosen goal competes with its priority reduced by the
/// recency penalty, so between two goals of equal priority the planner
/// prefers switching over repeating itself. Remaining ties keep the order in
/// which the goals were given.
///
/// Goals are told apart by name: every goal named like `most_recent` is
/// penalized, so names must be unique. [`Planner`](crate::Planner) rejects
/// goal lists that break this.
///
/// # Examples
///
/// ```
/// use goap_planner::{Beliefs, Goal, GoalSelector};
///
/// let eat = Goal::new("eat", 5.0).unwrap().with_desired_effect("fed");
/// let sleep = Goal::new("sleep", 5.0).unwrap().with_desired_effect("rested");
/// let goals = vec![eat, sleep];
///
/// let selector = GoalSelector::default();
/// let ordered = selector.order(&goals, Some(&goals[0]), &Beliefs::new());
///
/// let names: Vec<_> = ordered.iter().map(|g| g.name.as_str()).collect();
/// assert_eq!(names, ["sleep", "eat"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalSelector {
    recency_penalty: f32,
}

impl GoalSelector {
    pub fn new(recency_penalty: f32) -> Self {
        Self { recency_penalty }
    }

    pub fn recency_penalty(&self) -> f32 {
        self.recency_penalty
    }

    /// The priority `goal` competes with this round.
    pub fn effective_priority(&self, goal: &Goal, most_recent: Option<&Goal>) -> f32 {
        match most_recent {
            Some(recent) if recent.name == goal.name => goal.priority - self.recency_penalty,
            _ => goal.priority,
        }
    }

    /// Filters out satisfied goals and orders the rest for planning.
    pub fn order<'a>(
        &self,
        goals: &'a [Goal],
        most_recent: Option<&Goal>,
        oracle: &dyn WorldOracle,
    ) -> Vec<&'a Goal> {
        let mut candidates: Vec<(&Goal, f32)> = goals
            .iter()
            .filter(|goal| goal.unsatisfied(oracle).next().is_some())
            .map(|goal| (goal, self.effective_priority(goal, most_recent)))
            .collect();

        // stable: equal priorities keep registry order
        candidates.sort_by(|(_, a), (_, b)| b.total_cmp(a));

        log::debug!(
            "Goal order: [{}]",
            candidates
                .iter()
                .map(|(goal, priority)| format!("{}={}", goal.name, priority))
                .collect::<Vec<_>>()
                .join(", ")
        );

        candidates.into_iter().map(|(goal, _)| goal).collect()
    }
}

impl Default for GoalSelector {
    fn default() -> Self {
        Self::new(DEFAULT_RECENCY_PENALTY)
    }
}
