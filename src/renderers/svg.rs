//! SVG renderer: serializes a [`Diagram`] to a standalone SVG document.
//!
//! Elements are written in scene order. Cycle classification becomes a CSS
//! class pair (`graph-node circular`, `graph-edge normal`, ...) styled by an
//! embedded stylesheet.

use super::Renderer;
use crate::layout::Point;
use crate::scene::{ArrowMarker, CycleClass, Diagram, Element, EmptyState, Scene, TextRole};

const STYLE: &str = r##"<style>
  .graph-edge.normal { stroke: #34495e; }
  .graph-edge.circular { stroke: #e74c3c; stroke-dasharray: 6 3; }
  .graph-node.normal { fill: #3498db; stroke: #2980b9; stroke-width: 2; }
  .graph-node.circular { fill: #e74c3c; stroke: #c0392b; stroke-width: 3; }
  .graph-text { fill: #ffffff; font-family: sans-serif; font-weight: bold; }
  .graph-score { fill: #2c3e50; font-family: sans-serif; }
</style>"##;

// ── Helpers ──────────────────────────────────────────────────────────────────

pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Format a coordinate with at most two decimals and no trailing zeros.
pub fn num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn class_name(class: CycleClass) -> &'static str {
    match class {
        CycleClass::Normal => "normal",
        CycleClass::Circular => "circular",
    }
}

fn points(pts: &[Point]) -> String {
    pts.iter()
        .map(|p| format!("{} {}", num(p.x), num(p.y)))
        .collect::<Vec<_>>()
        .join(", ")
}

// ── Element rendering ────────────────────────────────────────────────────────

fn render_marker(m: &ArrowMarker) -> String {
    [
        "<defs>".to_string(),
        format!(
            r#"  <marker id="{}" markerWidth="{}" markerHeight="{}" refX="{}" refY="{}" orient="auto">"#,
            m.id,
            num(m.width),
            num(m.height),
            num(m.ref_x),
            num(m.ref_y)
        ),
        format!(
            r#"    <polygon points="{}" fill="{}"/>"#,
            points(&m.points),
            escape(&m.fill)
        ),
        "  </marker>".to_string(),
        "</defs>".to_string(),
    ]
    .join("\n")
}

fn render_element(element: &Element) -> String {
    match element {
        Element::Background { fill, .. } => {
            format!(r#"<rect width="100%" height="100%" fill="{}"/>"#, escape(fill))
        }
        Element::Marker(marker) => render_marker(marker),
        Element::Line {
            start,
            end,
            class,
            stroke_width,
            marker_id,
            ..
        } => format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" class="graph-edge {}" stroke-width="{}" marker-end="url(#{marker_id})"/>"#,
            num(start.x),
            num(start.y),
            num(end.x),
            num(end.y),
            class_name(*class),
            num(*stroke_width)
        ),
        Element::Circle {
            center,
            radius,
            class,
            ..
        } => format!(
            r#"<circle cx="{}" cy="{}" r="{}" class="graph-node {}"/>"#,
            num(center.x),
            num(center.y),
            num(*radius),
            class_name(*class)
        ),
        Element::Text {
            position,
            content,
            role,
            font_size,
            ..
        } => {
            let css = match role {
                TextRole::Title => "graph-text",
                TextRole::Score => "graph-score",
            };
            format!(
                r#"<text x="{}" y="{}" text-anchor="middle" class="{css}" font-size="{font_size}px">{}</text>"#,
                num(position.x),
                num(position.y),
                escape(content)
            )
        }
    }
}

fn render_scene(scene: &Scene) -> String {
    let w = num(scene.width);
    let h = num(scene.height);
    let mut parts = vec![
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="graph-svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        ),
        STYLE.to_string(),
    ];
    parts.extend(scene.elements.iter().map(render_element));
    parts.push("</svg>".to_string());
    let mut out = parts.join("\n");
    out.push('\n');
    out
}

fn render_empty(state: EmptyState) -> String {
    format!("<p class=\"empty\">{}</p>\n", escape(state.message()))
}

// ── Public API ───────────────────────────────────────────────────────────────

/// Renders a diagram to SVG, or to an HTML notice for the empty states.
#[derive(Debug, Default, Clone, Copy)]
pub struct SvgRenderer;

impl SvgRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer<Diagram> for SvgRenderer {
    fn render(&self, diagram: &Diagram) -> String {
        match diagram {
            Diagram::Scene(scene) => render_scene(scene),
            Diagram::Empty { state } => render_empty(*state),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_svg.rs"]
mod tests;
