//! Scene builder: dependency graph → positioned shapes and labels.

use tracing::debug;

use super::{ArrowMarker, CycleClass, Diagram, Element, EmptyState, Scene, TextRole};
use crate::config::RenderConfig;
use crate::layout::{GraphIR, LayoutNode, Point, Positions, clip_edge, layout_graph};
use crate::model::DependencyGraph;

pub const ARROW_MARKER_ID: &str = "arrowhead";

const NORMAL_STROKE: f64 = 2.0;
const CIRCULAR_STROKE: f64 = 3.0;
const TITLE_OFFSET_Y: f64 = 5.0;
const SCORE_GAP_Y: f64 = 15.0;

/// Cut `title` to `max_chars` characters, appending `...` when anything was cut.
///
/// Characters are Unicode scalar values, so an emoji counts as one and is
/// never split.
pub fn truncate_label(title: &str, max_chars: usize) -> String {
    match title.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &title[..byte_idx]),
        None => title.to_string(),
    }
}

/// Score annotation drawn under a node, one decimal place.
///
/// Ties round away from zero (61.25 → 61.3), not to even.
pub fn score_label(score: f64) -> String {
    format!("Score: {:.1}", (score * 10.0).round() / 10.0)
}

fn arrow_marker(fill: &str) -> ArrowMarker {
    ArrowMarker {
        id: ARROW_MARKER_ID.to_string(),
        width: 10.0,
        height: 10.0,
        ref_x: 9.0,
        ref_y: 3.0,
        points: vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 3.0),
            Point::new(0.0, 6.0),
        ],
        fill: fill.to_string(),
    }
}

/// Builds one scene per call; holds nothing between calls but its config.
pub struct SceneBuilder<'a> {
    config: &'a RenderConfig,
}

impl<'a> SceneBuilder<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }

    /// Compose background, marker, edges and nodes for `graph`.
    ///
    /// A graph with no nodes yields [`EmptyState::NoTasks`] instead of a canvas.
    pub fn build(&self, graph: &DependencyGraph, circular_dependencies: &[String]) -> Diagram {
        if graph.is_empty() {
            return Diagram::empty(EmptyState::NoTasks);
        }

        let gir = GraphIR::build(graph, circular_dependencies);
        let width = self.config.canvas_width();
        let height = self.config.canvas_height();
        let positions = layout_graph(&gir, width, height);

        let mut scene = Scene::new(width, height);
        scene.push(Element::Background {
            width,
            height,
            fill: self.config.background.clone(),
        });
        scene.push(Element::Marker(arrow_marker(&self.config.arrow_fill)));

        self.push_edges(&mut scene, &gir, &positions);
        for node in layout_nodes(&gir, &positions) {
            self.push_node(&mut scene, node);
        }

        debug!(
            nodes = gir.node_count(),
            edges = gir.edge_count(),
            dropped = gir.dropped_edges().len(),
            width,
            height,
            "built dependency scene"
        );
        Diagram::Scene(scene)
    }

    fn push_edges(&self, scene: &mut Scene, gir: &GraphIR, positions: &Positions) {
        for edge in gir.edges() {
            let (Some(from), Some(to)) = (positions.get(edge.from), positions.get(edge.to)) else {
                continue;
            };
            let clipped = clip_edge(from, to, self.config.node_radius);
            let class = CycleClass::from_flag(edge.is_circular);
            scene.push(Element::Line {
                from: edge.from.to_string(),
                to: edge.to.to_string(),
                start: clipped.start,
                end: clipped.end,
                class,
                stroke_width: if class.is_circular() {
                    CIRCULAR_STROKE
                } else {
                    NORMAL_STROKE
                },
                marker_id: ARROW_MARKER_ID.to_string(),
            });
        }
    }

    fn push_node(&self, scene: &mut Scene, node: LayoutNode) {
        let radius = self.config.node_radius;
        let LayoutNode {
            id,
            title,
            score,
            center,
            in_cycle,
        } = node;

        scene.push(Element::Circle {
            node: id.clone(),
            center,
            radius,
            class: CycleClass::from_flag(in_cycle),
        });
        scene.push(Element::Text {
            node: id.clone(),
            position: Point::new(center.x, center.y + TITLE_OFFSET_Y),
            content: truncate_label(&title, self.config.label_max_chars),
            role: TextRole::Title,
            font_size: self.config.title_font_size,
        });
        scene.push(Element::Text {
            node: id,
            position: Point::new(center.x, center.y + radius + SCORE_GAP_Y),
            content: score_label(score),
            role: TextRole::Score,
            font_size: self.config.score_font_size,
        });
    }
}

/// Pair every IR node with its computed center, in input order.
fn layout_nodes(gir: &GraphIR, positions: &Positions) -> Vec<LayoutNode> {
    gir.nodes()
        .filter_map(|n| {
            positions.get(&n.id).map(|center| LayoutNode {
                id: n.id.clone(),
                title: n.title.clone(),
                score: n.score,
                center,
                in_cycle: n.in_cycle,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/rust/test_scene_builder.rs"]
mod tests;
