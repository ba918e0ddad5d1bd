use ratatui::{style::Style, text::Span};

use crate::ui::theme::Theme;

/// A keyboard hint consisting of a key and its action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Converts a list of key hints into styled spans for rendering.
pub fn hints_to_spans(hints: &[KeyHint], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(theme.accent)));
        spans.push(Span::raw(format!(" {}", hint.action)));
    }

    spans
}

pub fn hint_separator(theme: &Theme) -> Span<'static> {
    Span::styled("  │  ", Style::default().fg(theme.border))
}

pub mod common {
    use super::KeyHint;

    pub fn table_navigation() -> Vec<KeyHint> {
        vec![KeyHint::new("↑↓", "row"), KeyHint::new("Tab", "field")]
    }

    pub fn row_editing() -> Vec<KeyHint> {
        vec![
            KeyHint::new("Enter", "edit"),
            KeyHint::new("+/-", "day"),
            KeyHint::new("x", "clear"),
            KeyHint::new("a", "add"),
            KeyHint::new("d", "delete"),
            KeyHint::new("s", "save"),
        ]
    }

    pub fn text_input() -> Vec<KeyHint> {
        vec![KeyHint::new("Enter", "apply"), KeyHint::new("Esc", "cancel")]
    }

    pub fn summary() -> Vec<KeyHint> {
        vec![KeyHint::new("c", "complete"), KeyHint::new("b", "back and edit")]
    }

    pub fn global_shortcuts() -> Vec<KeyHint> {
        vec![KeyHint::new("q", "quit")]
    }
}
