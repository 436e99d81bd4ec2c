//! # Planner
//!
//! The planner ties the pieces together for one planning call:
//!
//! 1. The [`GoalSelector`] drops goals that already hold and orders the rest
//!    by priority, damping the most recently chosen goal.
//! 2. For each goal in that order, the [`PathFinder`] builds a backward search
//!    tree from the goal's desired effects.
//! 3. The first goal whose search succeeds with at least one action is handed
//!    to the [`PlanExtractor`], and the resulting [`Plan`] is returned.
//!
//! If every candidate fails, the call returns
//! [`GoapError::NoPlanFound`] with a report of what was tried.
//!
//! ## Basic Usage
//!
//! ```
//! use goap_planner::{Action, Beliefs, Goal, Planner};
//!
//! let actions = vec![
//!     Action::new("eat_meal", 1.0).unwrap()
//!         .with_precondition("has_food")
//!         .with_effect("fed"),
//!     Action::new("gather_food", 2.0).unwrap()
//!         .with_effect("has_food"),
//! ];
//! let goals = vec![Goal::new("survive", 10.0).unwrap().with_desired_effect("fed")];
//!
//! let beliefs = Beliefs::new();
//! let plan = Planner::new().plan(&goals, &actions, None, &beliefs).unwrap();
//!
//! assert_eq!(plan.action_names(), ["gather_food", "eat_meal"]);
//! assert_eq!(plan.total_cost(), 3.0);
//! ```

use std::collections::BTreeSet;

use crate::error::{GoalAttempt, NoPlan, Rejection};
use crate::extract::PlanExtractor;
use crate::search::{PathFinder, SearchTree};
use crate::{Action, Goal, GoalSelector, GoapError, Plan, PlannerConfig, Result, WorldOracle};

/// The GOAP planner.
///
/// A planner holds no registries of its own: goals and actions are passed in
/// on every call, and nothing is kept between calls. Planning is synchronous
/// and allocates a fresh search tree per goal, so independent agents can plan
/// on separate threads with their own oracles.
///
/// # Examples
///
/// Choosing the cheapest complete chain instead of the greedy default:
///
/// ```
/// use goap_planner::{ExtractionStrategy, Planner, PlannerConfig};
///
/// let planner = Planner::with_config(PlannerConfig {
///     extraction: ExtractionStrategy::CheapestPath,
///     ..PlannerConfig::default()
/// })
/// .unwrap();
/// ```
pub struct Planner {
    selector: GoalSelector,
    extractor: Box<dyn PlanExtractor + Send + Sync>,
}

impl Planner {
    /// Creates a planner with the default configuration.
    pub fn new() -> Self {
        let config = PlannerConfig::default();
        Self {
            selector: GoalSelector::new(config.recency_penalty),
            extractor: config.extraction.extractor(),
        }
    }

    /// Creates a planner from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `GoapError::InvalidConfig` if the configuration fails
    /// [`PlannerConfig::validate`].
    pub fn with_config(config: PlannerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            selector: GoalSelector::new(config.recency_penalty),
            extractor: config.extraction.extractor(),
        })
    }

    /// Replaces the plan extraction strategy.
    ///
    /// ```
    /// use goap_planner::{ExtractedPath, PlanExtractor, Planner, SearchTree};
    ///
    /// /// Takes the first chain found, ignoring cost.
    /// struct FirstFound;
    ///
    /// impl PlanExtractor for FirstFound {
    ///     fn extract<'a>(&self, tree: &SearchTree<'a>) -> Option<ExtractedPath<'a>> {
    ///         let mut id = SearchTree::ROOT;
    ///         while let Some(&next) = tree.get(id)?.leaves().first() {
    ///             id = next;
    ///         }
    ///         let actions = tree.actions_to_root(id);
    ///         if actions.is_empty() {
    ///             return None;
    ///         }
    ///         Some(ExtractedPath { actions, total_cost: tree.get(id)?.cost() })
    ///     }
    /// }
    ///
    /// let planner = Planner::new().with_extractor(Box::new(FirstFound));
    /// ```
    pub fn with_extractor(mut self, extractor: Box<dyn PlanExtractor + Send + Sync>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Finds a plan for the highest-priority achievable goal.
    ///
    /// `most_recent` is the goal chosen by the previous call, if any; it loses
    /// ties against goals of equal priority.
    ///
    /// # Errors
    ///
    /// Returns `GoapError::NoPlanFound` when no candidate goal yields a plan.
    /// Goals that already hold are never candidates, and a goal whose search
    /// succeeds without choosing any action is skipped rather than answered
    /// with an empty plan.
    ///
    /// Returns `GoapError::DuplicateGoal` when two goals share a name, since
    /// `most_recent` is matched by name.
    ///
    /// ```
    /// use goap_planner::{Action, Beliefs, Goal, GoapError, Planner};
    ///
    /// let actions = vec![Action::new("cook", 1.0).unwrap()
    ///     .with_precondition("has_ingredients")
    ///     .with_effect("has_meal")];
    /// let goals = vec![Goal::new("dinner", 1.0).unwrap().with_desired_effect("has_meal")];
    ///
    /// let result = Planner::new().plan(&goals, &actions, None, &Beliefs::new());
    /// match result {
    ///     Err(GoapError::NoPlanFound(report)) => assert_eq!(report.attempts.len(), 1),
    ///     other => panic!("expected no plan, got {:?}", other),
    /// }
    /// ```
    pub fn plan<'a>(
        &self,
        goals: &'a [Goal],
        actions: &'a [Action],
        most_recent: Option<&Goal>,
        oracle: &dyn WorldOracle,
    ) -> Result<Plan<'a>> {
        let mut names = BTreeSet::new();
        if let Some(duplicate) = goals.iter().find(|goal| !names.insert(goal.name.as_str())) {
            return Err(GoapError::DuplicateGoal(duplicate.name.clone()));
        }

        let mut report = NoPlan::default();

        for goal in self.selector.order(goals, most_recent, oracle) {
            let mut tree = SearchTree::new(goal);
            let mut finder = PathFinder::new(oracle);

            if !finder.search(&mut tree, actions) {
                log::debug!(
                    "No path for goal '{}' after {} expansions",
                    goal.name,
                    finder.expansions()
                );
                report.attempts.push(GoalAttempt {
                    goal: goal.name.clone(),
                    rejection: Rejection::SearchFailed,
                });
                continue;
            }

            let Some(path) = self.extractor.extract(&tree) else {
                log::debug!("Goal '{}' needs no action, trying next goal", goal.name);
                report.attempts.push(GoalAttempt {
                    goal: goal.name.clone(),
                    rejection: Rejection::DeadLeaf,
                });
                continue;
            };

            let plan = Plan::new(goal, path.actions, path.total_cost);
            log::info!(
                "Plan for goal '{}': {} actions, cost {} ({} nodes expanded)",
                goal.name,
                plan.len(),
                plan.total_cost(),
                finder.expansions()
            );
            return Ok(plan);
        }

        log::debug!("No plan found: {}", report);
        Err(GoapError::NoPlanFound(report))
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new()
    }
}
