//! Layout types: Positions, LayoutNode, ClippedEdge.

use std::collections::HashMap;

use super::geometry::Point;
use crate::model::NodeId;

/// Node id → center, produced by one layout run and dropped with it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Positions {
    centers: HashMap<NodeId, Point>,
    /// Circle the nodes were placed on.
    pub center: Point,
    pub radius: f64,
}

impl Positions {
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            centers: HashMap::new(),
            center,
            radius,
        }
    }

    pub fn insert(&mut self, id: impl Into<NodeId>, at: Point) {
        self.centers.insert(id.into(), at);
    }

    pub fn get(&self, id: &str) -> Option<Point> {
        self.centers.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }
}

/// A node with its computed center.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    pub id: NodeId,
    pub title: String,
    pub score: f64,
    pub center: Point,
    pub in_cycle: bool,
}

/// An edge trimmed so it starts and ends on the node boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClippedEdge {
    pub start: Point,
    /// Where the arrowhead is anchored.
    pub end: Point,
}
