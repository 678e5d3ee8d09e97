use super::*;
use crate::config::RenderConfig;
use crate::model::{DependencyGraph, Edge, Node};
use crate::scene::SceneBuilder;

fn diagram(circular: &[String]) -> Diagram {
    let graph = DependencyGraph::new(
        vec![
            Node::new("1", "Fix <login> & auth", 92.5),
            Node::new("2", "Deploy", 61.0).circular(true),
        ],
        vec![Edge::new("1", "2").circular(true)],
    );
    SceneBuilder::new(&RenderConfig::default()).build(&graph, circular)
}

#[test]
fn test_num_formatting() {
    assert_eq!(num(800.0), "800");
    assert_eq!(num(83.33333), "83.33");
    assert_eq!(num(2.5), "2.5");
    assert_eq!(num(-0.001), "0");
    assert_eq!(num(-12.5), "-12.5");
}

#[test]
fn test_escape() {
    assert_eq!(escape(r#"a<b>&"c""#), "a&lt;b&gt;&amp;&quot;c&quot;");
}

#[test]
fn test_svg_document_frame() {
    let svg = SvgRenderer::new().render(&diagram(&[]));
    assert!(svg.starts_with(
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="graph-svg" width="800" height="500" viewBox="0 0 800 500">"#
    ));
    assert!(svg.ends_with("</svg>\n"));
    assert!(svg.contains(r##"<rect width="100%" height="100%" fill="#f5f7fa"/>"##));
}

#[test]
fn test_svg_marker() {
    let svg = SvgRenderer::new().render(&diagram(&[]));
    assert!(svg.contains(
        r#"<marker id="arrowhead" markerWidth="10" markerHeight="10" refX="9" refY="3" orient="auto">"#
    ));
    assert!(svg.contains(r##"<polygon points="0 0, 10 3, 0 6" fill="#34495e"/>"##));
}

#[test]
fn test_svg_classes_and_order() {
    let svg = SvgRenderer::new().render(&diagram(&["Fix <login> & auth".to_string()]));
    let line = svg.find("<line").unwrap();
    let circle = svg.find("<circle").unwrap();
    assert!(line < circle);
    assert!(svg.contains(r#"class="graph-edge circular" stroke-width="3" marker-end="url(#arrowhead)""#));
    assert_eq!(svg.matches(r#"class="graph-node circular""#).count(), 2);
    assert!(svg.contains(r#"r="35""#));
}

#[test]
fn test_svg_text_escaped_and_truncated() {
    let svg = SvgRenderer::new().render(&diagram(&[]));
    assert!(svg.contains(">Fix &lt;login&gt; &amp; a...</text>"));
    assert!(svg.contains(r#"class="graph-score" font-size="9px">Score: 61.0</text>"#));
    assert!(svg.contains(r#"class="graph-text" font-size="11px">Deploy</text>"#));
}

#[test]
fn test_first_node_coordinates() {
    let svg = SvgRenderer::new().render(&diagram(&[]));
    // center (400, 250), layout radius 500/3
    assert!(svg.contains(r#"<circle cx="400" cy="83.33" r="35""#));
}

#[test]
fn test_empty_states() {
    let r = SvgRenderer::new();
    assert_eq!(
        r.render(&Diagram::empty(EmptyState::NoTasks)),
        "<p class=\"empty\">No tasks to display in graph</p>\n"
    );
    assert_eq!(
        r.render(&Diagram::empty(EmptyState::NoGraphData)),
        "<p class=\"empty\">No dependency graph data available</p>\n"
    );
}
