//! # Backward-chaining search
//!
//! The search starts from a goal's desired effects and works backwards. At
//! each node it looks for actions whose effects cover some outstanding
//! condition, swaps those conditions for the action's preconditions, and
//! recurses with that action removed from the candidates. Conditions the
//! world already satisfies drop out along the way; a node with nothing left
//! outstanding is explained.
//!
//! The result is a [`SearchTree`]: an arena of [`SearchNode`]s addressed by
//! [`NodeId`]. Every node reachable from the root is part of some complete
//! explanation of the goal, so any root-to-terminal chain read bottom-up is
//! an executable plan. No action on a chain is made redundant by the actions
//! below it: a chain that establishes everything an action was picked for
//! before that action runs is dropped. A
//! [`PlanExtractor`](crate::PlanExtractor) picks one of the chains.
//!
//! ```
//! use goap_planner::{Action, Beliefs, Goal, PathFinder, SearchTree};
//!
//! let eat = Action::new("eat", 1.0).unwrap()
//!     .with_precondition("has_food")
//!     .with_effect("fed");
//! let gather = Action::new("gather", 2.0).unwrap().with_effect("has_food");
//! let actions = vec![eat, gather];
//! let goal = Goal::new("survive", 10.0).unwrap().with_desired_effect("fed");
//!
//! let beliefs = Beliefs::new();
//! let mut finder = PathFinder::new(&beliefs);
//! let mut tree = SearchTree::new(&goal);
//!
//! assert!(finder.search(&mut tree, &actions));
//! assert_eq!(tree.len(), 3);
//! assert!(!tree.is_dead_leaf());
//! ```

use crate::{Action, ConditionSet, Goal, WorldOracle};

/// Index of a node inside a [`SearchTree`].
pub type NodeId = usize;

/// One step of the backward search.
///
/// `required` holds the conditions still outstanding at this point, `action`
/// the action that produced the node (absent at the root), and `cost` the
/// summed cost of every action from the root down to here.
#[derive(Debug, Clone)]
pub struct SearchNode<'a> {
    parent: Option<NodeId>,
    action: Option<&'a Action>,
    required: ConditionSet,
    leaves: Vec<NodeId>,
    cost: f32,
}

impl<'a> SearchNode<'a> {
    fn new(
        parent: Option<NodeId>,
        action: Option<&'a Action>,
        required: ConditionSet,
        cost: f32,
    ) -> Self {
        Self {
            parent,
            action,
            required,
            leaves: Vec::new(),
            cost,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn action(&self) -> Option<&'a Action> {
        self.action
    }

    pub fn required(&self) -> &ConditionSet {
        &self.required
    }

    /// Children attached on successful branches, in the order found.
    pub fn leaves(&self) -> &[NodeId] {
        &self.leaves
    }

    pub fn cost(&self) -> f32 {
        self.cost
    }
}

/// Arena holding the search tree for one goal. Node 0 is the root.
#[derive(Debug, Clone)]
pub struct SearchTree<'a> {
    nodes: Vec<SearchNode<'a>>,
}

impl<'a> SearchTree<'a> {
    /// The root of every tree.
    pub const ROOT: NodeId = 0;

    /// Creates a tree whose root requires the goal's desired effects.
    pub fn new(goal: &Goal) -> Self {
        Self::from_required(goal.desired_effects.clone())
    }

    /// Creates a tree whose root requires `required`.
    pub fn from_required(required: ConditionSet) -> Self {
        Self {
            nodes: vec![SearchNode::new(None, None, required, 0.0)],
        }
    }

    pub fn root(&self) -> &SearchNode<'a> {
        &self.nodes[Self::ROOT]
    }

    /// The node at `id`, if it exists.
    pub fn get(&self, id: NodeId) -> Option<&SearchNode<'a>> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True when the root has neither leaves nor an action: the goal needed
    /// nothing done, so the tree yields no usable plan.
    pub fn is_dead_leaf(&self) -> bool {
        let root = self.root();
        root.leaves.is_empty() && root.action.is_none()
    }

    /// Nodes reachable from the root, in depth-first order.
    pub fn iter_depth_first(&self) -> impl Iterator<Item = (NodeId, &SearchNode<'a>)> + '_ {
        let mut stack = vec![Self::ROOT];
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            let node = &self.nodes[id];
            stack.extend(node.leaves.iter().rev());
            Some((id, node))
        })
    }

    /// Actions on the path from `id` up to the root, `id`'s action first.
    pub fn actions_to_root(&self, id: NodeId) -> Vec<&'a Action> {
        let mut actions = Vec::new();
        let mut current = self.nodes.get(id);
        while let Some(node) = current {
            if let Some(action) = node.action {
                actions.push(action);
            }
            current = node.parent.and_then(|parent| self.nodes.get(parent));
        }
        actions
    }

    fn push(&mut self, parent: NodeId, action: &'a Action, required: ConditionSet) -> NodeId {
        let cost = self.nodes[parent].cost + action.cost;
        let id = self.nodes.len();
        self.nodes
            .push(SearchNode::new(Some(parent), Some(action), required, cost));
        id
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent].leaves.push(child);
    }

    /// Drops every chain below `id` whose actions establish all of `pending`
    /// again. Returns `false` when `id` had leaves and none survived.
    ///
    /// Pruned nodes stay in the arena but are no longer reachable.
    fn retain_chains(&mut self, id: NodeId, pending: &ConditionSet) -> bool {
        let leaves = std::mem::take(&mut self.nodes[id].leaves);
        if leaves.is_empty() {
            return true;
        }

        let mut kept = Vec::with_capacity(leaves.len());
        for leaf in leaves {
            let still_pending: ConditionSet = match self.nodes[leaf].action {
                Some(action) => pending.difference(&action.effects).cloned().collect(),
                None => pending.clone(),
            };
            if !still_pending.is_empty() && self.retain_chains(leaf, &still_pending) {
                kept.push(leaf);
            }
        }

        let alive = !kept.is_empty();
        self.nodes[id].leaves = kept;
        alive
    }

    /// Drops `id` and every node created after it. Only valid for the most
    /// recently pushed branch, which nothing earlier refers to.
    fn discard_from(&mut self, id: NodeId) {
        self.nodes.truncate(id);
    }
}

/// Runs the backward-chaining search against a world oracle.
pub struct PathFinder<'o> {
    oracle: &'o dyn WorldOracle,
    expansions: usize,
}

impl<'o> PathFinder<'o> {
    pub fn new(oracle: &'o dyn WorldOracle) -> Self {
        Self {
            oracle,
            expansions: 0,
        }
    }

    /// Number of nodes expanded so far.
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Searches from the root of `tree` using `actions` as candidates.
    ///
    /// Returns `true` when the root's conditions are fully explained; the
    /// successful branches are attached to the tree as a side effect.
    pub fn search<'a>(&mut self, tree: &mut SearchTree<'a>, actions: &'a [Action]) -> bool {
        let available: Vec<&'a Action> = actions.iter().collect();
        self.expand(tree, SearchTree::ROOT, &available)
    }

    fn expand<'a>(
        &mut self,
        tree: &mut SearchTree<'a>,
        node: NodeId,
        available: &[&'a Action],
    ) -> bool {
        self.expansions += 1;

        // conditions the world already satisfies need no action
        let oracle = self.oracle;
        let mut required = tree.nodes[node].required.clone();
        required.retain(|c| !oracle.evaluate(c));
        tree.nodes[node].required = required.clone();

        if required.is_empty() {
            log::trace!("Node {} explained by current world state", node);
            return true;
        }

        let mut ordered = available.to_vec();
        ordered.sort_by(|a, b| a.cost.total_cmp(&b.cost));

        let mut explained = false;
        for (index, &action) in ordered.iter().enumerate() {
            if !action.satisfies_any(&required) {
                continue;
            }

            let mut child_required: ConditionSet =
                required.difference(&action.effects).cloned().collect();
            child_required.extend(action.preconditions.iter().cloned());

            let remaining: Vec<&'a Action> = ordered
                .iter()
                .enumerate()
                .filter(|(other, _)| *other != index)
                .map(|(_, candidate)| *candidate)
                .collect();

            let child = tree.push(node, action, child_required);
            log::trace!(
                "Node {}: trying '{}' as node {} (cost {})",
                node,
                action.name,
                child,
                tree.nodes[child].cost
            );

            if !self.expand(tree, child, &remaining) {
                tree.discard_from(child);
                continue;
            }

            let covered: ConditionSet =
                required.intersection(&action.effects).cloned().collect();
            if !tree.retain_chains(child, &covered) {
                log::trace!(
                    "Node {}: every chain below '{}' already establishes {:?}",
                    node,
                    action.name,
                    covered
                );
                tree.discard_from(child);
                continue;
            }

            tree.attach(node, child);
            explained = true;

            let fully_covered = required
                .iter()
                .all(|c| action.effects.contains(c) || action.preconditions.contains(c));
            if fully_covered {
                return true;
            }
        }

        if !explained {
            log::trace!("Node {}: no action explains {:?}", node, required);
        }
        explained
    }
}
