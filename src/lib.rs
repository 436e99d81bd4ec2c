mod action;
mod agent;
mod condition;
mod config;
mod error;
mod extract;
mod goal;
mod plan;
mod planner;
mod search;
mod selector;
mod state;
mod visualizer;

pub use action::Action;
pub use agent::GoapAgent;
pub use condition::{conditions, Condition, ConditionSet, WorldOracle};
pub use config::{ExtractionStrategy, PlannerConfig};
pub use error::{GoalAttempt, GoapError, NoPlan, Rejection, Result};
pub use extract::{CheapestPathExtractor, ExtractedPath, GreedyExtractor, PlanExtractor};
pub use goal::Goal;
pub use plan::Plan;
pub use planner::Planner;
pub use search::{NodeId, PathFinder, SearchNode, SearchTree};
pub use selector::{GoalSelector, DEFAULT_RECENCY_PENALTY};
pub use state::Beliefs;
pub use visualizer::GoapVisualizer;
