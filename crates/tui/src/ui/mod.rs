pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use engine::ViewMode;

use crate::app::AppState;

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    let theme = Theme::default();

    // Title bar, content, bottom bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_title_bar(frame, layout[0], state, &theme);
    match state.session.mode() {
        ViewMode::Editing => screens::editing::render(frame, layout[1], state, &theme),
        ViewMode::Summary => screens::summary::render(frame, layout[1], state, &theme),
    }
    render_bottom_bar(frame, layout[2], state, &theme);
    components::toast::render(frame, area, state.toast.as_ref());
}

fn render_title_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mode = match state.session.mode() {
        ViewMode::Editing => "Editing",
        ViewMode::Summary => "Summary",
    };
    let line = Line::from(vec![
        Span::styled(
            "Periodo",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("Mode", Style::default().fg(theme.dim)),
        Span::raw(format!(": {mode}  ")),
        Span::styled("Lines", Style::default().fg(theme.dim)),
        Span::raw(format!(": {}", state.session.entries().len())),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    use components::hints::{common, hint_separator, hints_to_spans};

    let mut groups = match (state.session.mode(), state.input.is_some()) {
        (ViewMode::Editing, true) => vec![common::text_input()],
        (ViewMode::Editing, false) => vec![common::table_navigation(), common::row_editing()],
        (ViewMode::Summary, _) => vec![common::summary()],
    };
    groups.push(common::global_shortcuts());

    let mut parts = Vec::new();
    for group in &groups {
        if !parts.is_empty() {
            parts.push(hint_separator(theme));
        }
        parts.extend(hints_to_spans(group, theme));
    }

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn screen_text(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn editing_screen_shows_errors() {
        let mut state = AppState::new(engine::DEFAULT_DATE_FORMAT.to_string());
        state.session.submit().unwrap();

        let text = screen_text(&state);
        assert!(text.contains("Start date"));
        assert!(text.contains("start date of line 1 is empty."));
        assert!(text.contains("end date of line 1 is empty."));
    }

    #[test]
    fn summary_screen_lists_formatted_rows() {
        let day = chrono::NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let mut state = AppState::new(engine::DEFAULT_DATE_FORMAT.to_string());
        for field in [engine::EntryField::StartDate, engine::EntryField::EndDate] {
            state
                .session
                .update_field(0, field, engine::FieldValue::Date(Some(day)))
                .unwrap();
        }
        state.session.submit().unwrap();

        let text = screen_text(&state);
        assert!(text.contains("Summary"));
        assert!(text.contains("31/01/2024"));
        assert!(text.contains("complete"));
    }
}
