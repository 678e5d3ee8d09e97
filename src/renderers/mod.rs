//! Renderers: turn scenes and presentations into output text.

pub mod svg;
pub mod text;

pub use svg::SvgRenderer;
pub use text::TextRenderer;

/// A renderer for one kind of input.
pub trait Renderer<T: ?Sized> {
    fn render(&self, input: &T) -> String;
}
