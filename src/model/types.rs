//! Inbound data contract: the analysis response and its parts.
//!
//! Optional parts of the response are explicit `Option`/defaulted fields so
//! the rest of the crate never deals with "maybe missing" properties.

use serde::{Deserialize, Deserializer, Serialize};

/// Task identifier. The analysis service emits integers; strings are accepted too.
pub type NodeId = String;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<RawId> for NodeId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Int(n) => n.to_string(),
            RawId::Float(f) => f.to_string(),
            RawId::Text(s) => s,
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<NodeId, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(NodeId::from)
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<NodeId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.map(NodeId::from))
}

// ─── Graph ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: NodeId,
    pub title: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub is_circular: bool,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, title: impl Into<String>, score: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            score,
            is_circular: false,
        }
    }

    pub fn circular(mut self, is_circular: bool) -> Self {
        self.is_circular = is_circular;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    #[serde(deserialize_with = "deserialize_id")]
    pub from: NodeId,
    #[serde(deserialize_with = "deserialize_id")]
    pub to: NodeId,
    #[serde(default)]
    pub is_circular: bool,
}

impl Edge {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            is_circular: false,
        }
    }

    pub fn circular(mut self, is_circular: bool) -> Self {
        self.is_circular = is_circular;
        self
    }
}

/// Nodes and directed edges as reported by the analysis service.
/// Either list may be missing in the payload; both default to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DependencyGraph {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl DependencyGraph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// ─── Tasks ───────────────────────────────────────────────────────────────────

/// One entry of the ranked task list. Rank is its position in the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTask {
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub id: Option<NodeId>,
    pub title: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub estimated_hours: f64,
    #[serde(default)]
    pub importance: u8,
    #[serde(default)]
    pub priority_score: f64,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl RankedTask {
    pub fn new(title: impl Into<String>, priority_score: f64) -> Self {
        Self {
            id: None,
            title: title.into(),
            due_date: None,
            estimated_hours: 0.0,
            importance: 0,
            priority_score,
            explanation: None,
        }
    }

    pub fn due(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }
}

// ─── Response ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub strategy_used: String,
    #[serde(default)]
    pub total_tasks: Option<usize>,
    /// Titles of tasks the service found inside a dependency cycle.
    #[serde(default)]
    pub circular_dependencies: Vec<String>,
    #[serde(default)]
    pub tasks: Vec<RankedTask>,
    #[serde(default)]
    pub dependency_graph: Option<DependencyGraph>,
}

impl AnalysisResponse {
    pub fn new(strategy_used: impl Into<String>, tasks: Vec<RankedTask>) -> Self {
        Self {
            strategy_used: strategy_used.into(),
            total_tasks: None,
            circular_dependencies: Vec::new(),
            tasks,
            dependency_graph: None,
        }
    }

    /// Reported total, falling back to the number of ranked tasks.
    pub fn total_tasks(&self) -> usize {
        self.total_tasks.unwrap_or(self.tasks.len())
    }
}
