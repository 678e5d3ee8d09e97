use super::*;
use crate::model::{DependencyGraph, Edge, Node};
use chrono::TimeZone;

fn today() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 27, 0, 0, 0).unwrap()
}

fn response() -> AnalysisResponse {
    let mut first = RankedTask::new("Fix critical login bug", 92.5).due("2025-11-25");
    first.estimated_hours = 2.0;
    first.importance = 9;
    first.explanation = Some("Overdue and important".to_string());
    let second = RankedTask::new("Update API documentation", 41.0).due("2025-12-05");

    let mut r = AnalysisResponse::new("Smart Balance", vec![first, second]);
    r.total_tasks = Some(2);
    r
}

#[test]
fn test_cards_ranked_from_one() {
    let p = present(&response(), &RenderConfig::default(), today());
    let ranks: Vec<usize> = p.cards.iter().map(|c| c.rank).collect();
    assert_eq!(ranks, vec![1, 2]);
    assert_eq!(p.cards[0].title, "Fix critical login bug");
    assert_eq!(p.cards[0].urgency, Urgency::High);
    assert_eq!(p.cards[1].urgency, Urgency::Low);
}

#[test]
fn test_card_fields_and_due_text() {
    let p = present(&response(), &RenderConfig::default(), today());
    let card = &p.cards[0];
    assert_eq!(card.score, 92.5);
    assert_eq!(card.estimated_hours, 2.0);
    assert_eq!(card.importance, 9);
    assert_eq!(card.explanation.as_deref(), Some("Overdue and important"));
    assert_eq!(card.due_annotation, Some(DueAnnotation::Overdue(2)));
    assert_eq!(
        card.due_text().as_deref(),
        Some("2025-11-25 (Overdue by 2 days)")
    );
    assert_eq!(p.cards[1].due_text().as_deref(), Some("2025-12-05"));
}

#[test]
fn test_empty_explanation_dropped() {
    let mut r = response();
    r.tasks[1].explanation = Some(String::new());
    let p = present(&r, &RenderConfig::default(), today());
    assert_eq!(p.cards[1].explanation, None);
}

#[test]
fn test_summary_line() {
    let p = present(&response(), &RenderConfig::default(), today());
    assert_eq!(p.summary, "Strategy: Smart Balance | Total tasks: 2");
}

#[test]
fn test_total_tasks_falls_back_to_list_length() {
    let mut r = response();
    r.total_tasks = None;
    assert_eq!(summary_line(&r), "Strategy: Smart Balance | Total tasks: 2");
}

#[test]
fn test_no_warning_without_cycles() {
    let p = present(&response(), &RenderConfig::default(), today());
    assert_eq!(p.circular_warning, None);
}

#[test]
fn test_warning_lists_cycle_titles() {
    let mut r = response();
    r.circular_dependencies = vec!["Task A".to_string(), "Task B".to_string()];
    let p = present(&r, &RenderConfig::default(), today());
    assert_eq!(
        p.circular_warning.as_deref(),
        Some("Circular dependencies detected: Task A, Task B")
    );
}

#[test]
fn test_missing_graph_yields_no_graph_data() {
    let p = present(&response(), &RenderConfig::default(), today());
    assert_eq!(p.diagram, Diagram::empty(EmptyState::NoGraphData));
}

#[test]
fn test_empty_graph_yields_no_tasks() {
    let mut r = response();
    r.dependency_graph = Some(DependencyGraph::default());
    let p = present(&r, &RenderConfig::default(), today());
    assert_eq!(p.diagram.empty_state(), Some(EmptyState::NoTasks));
}

#[test]
fn test_graph_is_drawn() {
    let mut r = response();
    r.circular_dependencies = vec!["B".to_string()];
    r.dependency_graph = Some(DependencyGraph::new(
        vec![Node::new("1", "A", 92.5), Node::new("2", "B", 41.0)],
        vec![Edge::new("1", "2"), Edge::new("2", "nowhere")],
    ));
    let p = present(&r, &RenderConfig::default(), today());
    let scene = p.diagram.scene().expect("graph should produce a scene");
    assert_eq!(scene.circle_count(), 2);
    assert_eq!(scene.line_count(), 1);
}

#[test]
fn test_no_tasks_no_cards() {
    let r = AnalysisResponse::new("Fastest Wins", vec![]);
    let p = present(&r, &RenderConfig::default(), today());
    assert!(p.cards.is_empty());
    assert_eq!(p.summary, "Strategy: Fastest Wins | Total tasks: 0");
}
