//! # Plan extraction
//!
//! A successful search leaves a tree in which every root-to-terminal chain is
//! a complete explanation of the goal. Extraction picks one chain and turns
//! it into an execution-ordered action list.

use crate::search::{NodeId, SearchNode, SearchTree};
use crate::Action;

/// A linear chain of actions read out of a search tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedPath<'a> {
    /// Actions in execution order
    pub actions: Vec<&'a Action>,
    /// Cumulative cost of the chain's deepest node
    pub total_cost: f32,
}

/// Strategy for choosing a chain from a search tree.
///
/// Implementations return `None` for a dead-leaf tree: one whose root has no
/// leaves and no action, meaning the goal needed nothing done.
pub trait PlanExtractor {
    fn extract<'a>(&self, tree: &SearchTree<'a>) -> Option<ExtractedPath<'a>>;
}

/// Walks the tree from the root, always descending into the cheapest child.
///
/// Ties go to the child found first. The walk never reconsiders a level once
/// it has descended, so the chain it returns is not necessarily the cheapest
/// one in the tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyExtractor;

impl PlanExtractor for GreedyExtractor {
    fn extract<'a>(&self, tree: &SearchTree<'a>) -> Option<ExtractedPath<'a>> {
        if tree.is_dead_leaf() {
            return None;
        }

        let mut current = tree.root();
        let mut recorded = Vec::new();
        while let Some(next) = cheapest_leaf(tree, current.leaves()) {
            current = next;
            if let Some(action) = current.action() {
                recorded.push(action);
            }
        }

        // recorded root-first; preconditions are established deepest-first
        recorded.reverse();
        Some(ExtractedPath {
            actions: recorded,
            total_cost: current.cost(),
        })
    }
}

/// First leaf with the lowest cost.
fn cheapest_leaf<'t, 'a>(
    tree: &'t SearchTree<'a>,
    leaves: &[NodeId],
) -> Option<&'t SearchNode<'a>> {
    leaves
        .iter()
        .filter_map(|id| tree.get(*id))
        .min_by(|a, b| a.cost().total_cmp(&b.cost()))
}

/// Scans every terminal node and returns the cheapest complete chain.
///
/// Ties go to the terminal found first in depth-first order.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheapestPathExtractor;

impl PlanExtractor for CheapestPathExtractor {
    fn extract<'a>(&self, tree: &SearchTree<'a>) -> Option<ExtractedPath<'a>> {
        if tree.is_dead_leaf() {
            return None;
        }

        let (terminal, node) = tree
            .iter_depth_first()
            .filter(|(_, node)| node.leaves().is_empty() && node.action().is_some())
            .min_by(|(_, a), (_, b)| a.cost().total_cmp(&b.cost()))?;

        Some(ExtractedPath {
            actions: tree.actions_to_root(terminal),
            total_cost: node.cost(),
        })
    }
}
