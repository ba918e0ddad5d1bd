use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
};

use crate::{
    app::AppState,
    ui::{screens::editing, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    // Stripe even rows.
    let rows = state
        .session
        .summary(&state.date_format)
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let style = if i % 2 == 0 {
                Style::default().bg(theme.stripe)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(row.line.to_string()),
                Cell::from(row.start_date),
                Cell::from(row.end_date),
                Cell::from(row.value_type),
                Cell::from(row.amount),
            ])
            .style(style)
        })
        .collect::<Vec<_>>();

    let table = Table::new(rows, editing::COLUMN_WIDTHS)
        .header(editing::header_row(theme))
        .block(
            Block::default()
                .title(" Summary ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.accent)),
        );
    frame.render_widget(table, layout[0]);

    let note = Paragraph::new(Line::styled(
        "Review the entries, then complete the submission or go back to edit.",
        Style::default().fg(theme.dim),
    ));
    frame.render_widget(note, layout[1]);
}
