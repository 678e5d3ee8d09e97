//! Plain-text renderer for a presentation: summary lines, then one block per card.

use super::Renderer;
use crate::present::{Presentation, TaskCard};

/// Renders a presentation for a terminal.
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    /// Append the diagram's empty-state notice when there is no canvas.
    pub show_diagram_notice: bool,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self {
            show_diagram_notice: true,
        }
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn render_card(card: &TaskCard) -> Vec<String> {
    let mut lines = vec![
        format!(
            "#{} [{}] {}",
            card.rank,
            card.urgency.as_str().to_uppercase(),
            card.title
        ),
        format!("  Score: {}", card.score),
    ];
    if let Some(due) = card.due_text() {
        lines.push(format!("  Due: {due}"));
    }
    lines.push(format!("  Hours: {}", card.estimated_hours));
    lines.push(format!("  Importance: {}/10", card.importance));
    if let Some(explanation) = &card.explanation {
        lines.push(format!("  {explanation}"));
    }
    lines
}

impl Renderer<Presentation> for TextRenderer {
    fn render(&self, p: &Presentation) -> String {
        let mut lines = Vec::new();
        if let Some(warning) = &p.circular_warning {
            lines.push(format!("Warning: {warning}"));
        }
        lines.push(p.summary.clone());

        for card in &p.cards {
            lines.push(String::new());
            lines.extend(render_card(card));
        }

        if self.show_diagram_notice {
            if let Some(state) = p.diagram.empty_state() {
                lines.push(String::new());
                lines.push(state.message().to_string());
            }
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_text.rs"]
mod tests;
