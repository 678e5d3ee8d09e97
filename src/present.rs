//! Result presenter: one analysis response → summary lines, cards and diagram.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::cards::{self, DueAnnotation, Urgency};
use crate::config::RenderConfig;
use crate::model::{AnalysisResponse, RankedTask};
use crate::scene::{Diagram, EmptyState, SceneBuilder};

/// Display fields for one ranked task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskCard {
    /// 1-based position in the ranked list.
    pub rank: usize,
    pub title: String,
    pub score: f64,
    pub urgency: Urgency,
    pub due_date: Option<String>,
    pub due_annotation: Option<DueAnnotation>,
    pub estimated_hours: f64,
    pub importance: u8,
    pub explanation: Option<String>,
}

impl TaskCard {
    pub fn from_task(task: &RankedTask, rank: usize, now: DateTime<Utc>) -> Self {
        let class = cards::classify(task, now);
        Self {
            rank,
            title: task.title.clone(),
            score: task.priority_score,
            urgency: class.urgency,
            due_date: task.due_date.clone(),
            due_annotation: class.due_annotation,
            estimated_hours: task.estimated_hours,
            importance: task.importance,
            explanation: task.explanation.clone().filter(|e| !e.is_empty()),
        }
    }

    /// Due date followed by its annotation, e.g. `2025-11-27 (Due today)`.
    pub fn due_text(&self) -> Option<String> {
        let date = self.due_date.as_deref()?;
        Some(match &self.due_annotation {
            Some(annotation) => format!("{date} {annotation}"),
            None => date.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Presentation {
    /// Present only when the response reports circular dependencies.
    pub circular_warning: Option<String>,
    pub summary: String,
    pub cards: Vec<TaskCard>,
    pub diagram: Diagram,
}

/// `Circular dependencies detected: a, b` for a non-empty title list.
pub fn circular_warning(titles: &[String]) -> Option<String> {
    if titles.is_empty() {
        None
    } else {
        Some(format!(
            "Circular dependencies detected: {}",
            titles.join(", ")
        ))
    }
}

/// `Strategy: {strategy} | Total tasks: {n}`
pub fn summary_line(response: &AnalysisResponse) -> String {
    format!(
        "Strategy: {} | Total tasks: {}",
        response.strategy_used,
        response.total_tasks()
    )
}

/// Build everything shown for `response`. Pure: no I/O, `now` is supplied.
pub fn present(response: &AnalysisResponse, config: &RenderConfig, now: DateTime<Utc>) -> Presentation {
    let cards: Vec<TaskCard> = response
        .tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| TaskCard::from_task(task, idx + 1, now))
        .collect();

    let diagram = match &response.dependency_graph {
        Some(graph) => SceneBuilder::new(config).build(graph, &response.circular_dependencies),
        None => Diagram::empty(EmptyState::NoGraphData),
    };

    let circular_warning = circular_warning(&response.circular_dependencies);
    if circular_warning.is_some() {
        info!(
            count = response.circular_dependencies.len(),
            "response reports circular dependencies"
        );
    }
    debug!(cards = cards.len(), empty = ?diagram.empty_state(), "presentation ready");

    Presentation {
        circular_warning,
        summary: summary_line(response),
        cards,
        diagram,
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_present.rs"]
mod tests;
