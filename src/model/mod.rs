//! Analysis response contract and boundary validation.

pub mod types;

use std::collections::HashSet;

use tracing::debug;

pub use types::{AnalysisResponse, DependencyGraph, Edge, Node, NodeId, RankedTask};

use crate::errors::{Result, ViewError};

/// Decode an analysis response from JSON and check it before it enters the core.
pub fn parse_response(src: &str) -> Result<AnalysisResponse> {
    let response: AnalysisResponse = serde_json::from_str(src)?;
    validate(&response)?;
    debug!(
        tasks = response.tasks.len(),
        has_graph = response.dependency_graph.is_some(),
        "parsed analysis response"
    );
    Ok(response)
}

/// Node ids must be unique within the graph.
pub fn validate(response: &AnalysisResponse) -> Result<()> {
    let Some(graph) = &response.dependency_graph else {
        return Ok(());
    };
    let mut seen = HashSet::new();
    for node in &graph.nodes {
        if !seen.insert(node.id.as_str()) {
            return Err(ViewError::InvalidResponse(format!(
                "duplicate node id '{}' in dependency_graph",
                node.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/rust/test_model.rs"]
mod tests;
