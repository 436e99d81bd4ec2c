use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::extract::{ExtractedPath, PlanExtractor};
use crate::search::{NodeId, SearchTree};
use crate::Result;

/// Renders search trees as Graphviz DOT, for debugging planner decisions.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoapVisualizer;

impl GoapVisualizer {
    /// Create a new visualizer
    pub fn new() -> Self {
        Self
    }

    /// Render the attached part of `tree` as a DOT digraph.
    ///
    /// Nodes on the chain `extractor` picks are highlighted.
    pub fn render_search_tree(
        &self,
        tree: &SearchTree<'_>,
        extractor: &dyn PlanExtractor,
    ) -> Result<String> {
        let mut dot = String::new();
        self.write_dot(&mut dot, tree, extractor)?;
        Ok(dot)
    }

    /// Write the DOT rendering of `tree` to `path`.
    pub fn write_search_tree(
        &self,
        tree: &SearchTree<'_>,
        extractor: &dyn PlanExtractor,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let dot = self.render_search_tree(tree, extractor)?;
        let mut file = File::create(path)?;
        file.write_all(dot.as_bytes())?;
        Ok(())
    }

    fn write_dot(
        &self,
        out: &mut impl fmt::Write,
        tree: &SearchTree<'_>,
        extractor: &dyn PlanExtractor,
    ) -> fmt::Result {
        let chosen = Self::chosen_nodes(tree, extractor.extract(tree));

        // header
        writeln!(out, "digraph GOAP {{")?;
        writeln!(out, "    rankdir=TB;")?;
        writeln!(out, "    node [shape=box, style=filled, fillcolor=lightblue];")?;
        writeln!(out, "    edge [fontsize=10];")?;

        for (id, node) in tree.iter_depth_first() {
            let title = match node.action() {
                Some(action) => {
                    format!("{}\\nCost: {}", Self::escape(&action.name), node.cost())
                }
                None => "Goal".to_string(),
            };
            let required = node
                .required()
                .iter()
                .map(|c| Self::escape(c.name()))
                .collect::<Vec<_>>()
                .join("\\n");
            let fill = if node.action().is_none() {
                "lightpink"
            } else if chosen.contains(&id) {
                "lightcoral"
            } else {
                "lightblue"
            };
            writeln!(
                out,
                "    node_{} [label=\"{}\\nNeeds: {}\", fillcolor={}];",
                id, title, required, fill
            )?;
            for leaf in node.leaves() {
                let style = if chosen.contains(leaf) {
                    " [color=red, penwidth=2.0]"
                } else {
                    ""
                };
                writeln!(out, "    node_{} -> node_{}{};", id, leaf, style)?;
            }
        }

        writeln!(out, "}}")
    }

    /// Node ids along the extracted chain, found by following the chain's
    /// actions down from the root.
    fn chosen_nodes(tree: &SearchTree<'_>, path: Option<ExtractedPath<'_>>) -> HashSet<NodeId> {
        let mut chosen = HashSet::new();
        let Some(path) = path else {
            return chosen;
        };

        // extracted actions run deepest-first, the tree is walked root-first
        let mut current = SearchTree::ROOT;
        for action in path.actions.iter().rev() {
            let next = tree.get(current).and_then(|node| {
                node.leaves().iter().copied().find(|leaf| {
                    tree.get(*leaf)
                        .and_then(|n| n.action())
                        .is_some_and(|a| std::ptr::eq(a, *action))
                })
            });
            match next {
                Some(next) => {
                    chosen.insert(next);
                    current = next;
                }
                None => break,
            }
        }
        chosen
    }

    fn escape(text: &str) -> String {
        text.replace('\\', "\\\\").replace('"', "\\\"")
    }
}
