//! Renderer-agnostic scene description.
//!
//! A scene is an ordered list of primitives. Renderers draw them in order, so
//! the builder controls stacking (edges below nodes, labels on top).

pub mod builder;

pub use builder::SceneBuilder;

use serde::Serialize;

use crate::layout::Point;
use crate::model::NodeId;

/// Whether a node or edge takes part in a dependency cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleClass {
    Normal,
    Circular,
}

impl CycleClass {
    pub fn from_flag(in_cycle: bool) -> Self {
        if in_cycle {
            CycleClass::Circular
        } else {
            CycleClass::Normal
        }
    }

    pub fn is_circular(self) -> bool {
        self == CycleClass::Circular
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextRole {
    Title,
    Score,
}

/// Arrowhead referenced by edges through `marker_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrowMarker {
    pub id: String,
    pub width: f64,
    pub height: f64,
    pub ref_x: f64,
    pub ref_y: f64,
    pub points: Vec<Point>,
    pub fill: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    Background {
        width: f64,
        height: f64,
        fill: String,
    },
    Marker(ArrowMarker),
    Line {
        from: NodeId,
        to: NodeId,
        start: Point,
        end: Point,
        class: CycleClass,
        stroke_width: f64,
        marker_id: String,
    },
    Circle {
        node: NodeId,
        center: Point,
        radius: f64,
        class: CycleClass,
    },
    Text {
        node: NodeId,
        position: Point,
        content: String,
        role: TextRole,
        font_size: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub elements: Vec<Element>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Number of edge lines in the scene.
    pub fn line_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, Element::Line { .. }))
            .count()
    }

    /// Number of node circles in the scene.
    pub fn circle_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, Element::Circle { .. }))
            .count()
    }
}

/// Why no canvas was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyState {
    /// The graph exists but has no nodes.
    NoTasks,
    /// The response carried no graph at all.
    NoGraphData,
}

impl EmptyState {
    pub fn message(self) -> &'static str {
        match self {
            EmptyState::NoTasks => "No tasks to display in graph",
            EmptyState::NoGraphData => "No dependency graph data available",
        }
    }
}

/// Output of the diagram side of a presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Diagram {
    Scene(Scene),
    Empty { state: EmptyState },
}

impl Diagram {
    pub fn empty(state: EmptyState) -> Self {
        Diagram::Empty { state }
    }

    pub fn scene(&self) -> Option<&Scene> {
        match self {
            Diagram::Scene(scene) => Some(scene),
            Diagram::Empty { .. } => None,
        }
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        match self {
            Diagram::Scene(_) => None,
            Diagram::Empty { state } => Some(*state),
        }
    }
}
