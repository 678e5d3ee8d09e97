//! GraphIR: the dependency graph as a petgraph DiGraph, ready for layout.
//!
//! Building the IR is where defensive filtering happens: edges whose
//! endpoints are not among the nodes, and self-loops, are left out. Nothing
//! is reported to the caller beyond a log line and `dropped_edges()`.

use std::collections::{HashMap, HashSet};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::warn;

use crate::model::{DependencyGraph, Node, NodeId};

/// Why an edge did not make it into the IR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    MissingEndpoint,
    SelfLoop,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    pub id: NodeId,
    pub title: String,
    pub score: f64,
    /// Union of the node's own flag and title membership in the cycle report.
    pub in_cycle: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeData {
    pub is_circular: bool,
}

/// A resolved edge, borrowed from the IR.
#[derive(Debug, Clone, Copy)]
pub struct EdgeView<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub is_circular: bool,
}

pub struct GraphIR {
    pub digraph: DiGraph<NodeData, EdgeData>,
    pub node_index: HashMap<NodeId, NodeIndex>,
    dropped: Vec<(NodeId, NodeId, DropReason)>,
}

/// A node is cycle-involved when its own flag is set or its title appears in
/// the separately supplied cycle report. Both sources are trusted as-is.
pub fn is_cycle_involved(node: &Node, circular_titles: &HashSet<&str>) -> bool {
    node.is_circular || circular_titles.contains(node.title.as_str())
}

impl GraphIR {
    /// Build the IR from the response graph and the list of cycle titles.
    ///
    /// Node order is preserved. A repeated node id keeps its first occurrence.
    pub fn build(graph: &DependencyGraph, circular_dependencies: &[String]) -> Self {
        let circular_titles: HashSet<&str> =
            circular_dependencies.iter().map(String::as_str).collect();

        let mut digraph = DiGraph::new();
        let mut node_index = HashMap::new();
        for node in &graph.nodes {
            if node_index.contains_key(&node.id) {
                continue;
            }
            let idx = digraph.add_node(NodeData {
                id: node.id.clone(),
                title: node.title.clone(),
                score: node.score,
                in_cycle: is_cycle_involved(node, &circular_titles),
            });
            node_index.insert(node.id.clone(), idx);
        }

        let mut dropped = Vec::new();
        for edge in &graph.edges {
            let reason = match (node_index.get(&edge.from), node_index.get(&edge.to)) {
                (Some(_), Some(_)) if edge.from == edge.to => DropReason::SelfLoop,
                (Some(&from), Some(&to)) => {
                    digraph.add_edge(
                        from,
                        to,
                        EdgeData {
                            is_circular: edge.is_circular,
                        },
                    );
                    continue;
                }
                _ => DropReason::MissingEndpoint,
            };
            warn!(from = %edge.from, to = %edge.to, ?reason, "dropping edge");
            dropped.push((edge.from.clone(), edge.to.clone(), reason));
        }

        Self {
            digraph,
            node_index,
            dropped,
        }
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    /// Nodes in input order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &NodeData> {
        self.digraph.node_indices().map(move |idx| &self.digraph[idx])
    }

    /// Resolved edges in input order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeView<'_>> {
        self.digraph.edge_references().map(move |e| EdgeView {
            from: self.digraph[e.source()].id.as_str(),
            to: self.digraph[e.target()].id.as_str(),
            is_circular: e.weight().is_circular,
        })
    }

    pub fn node(&self, id: &str) -> Option<&NodeData> {
        self.node_index.get(id).map(|&idx| &self.digraph[idx])
    }

    /// Edges left out while building, with the reason.
    pub fn dropped_edges(&self) -> &[(NodeId, NodeId, DropReason)] {
        &self.dropped
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_graph.rs"]
mod tests;
