use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState},
};

use chrono::NaiveDate;
use engine::{EntryField, format_amount, format_date};

use crate::{app::AppState, ui::theme::Theme};

pub const COLUMN_WIDTHS: [Constraint; 5] = [
    Constraint::Length(4),      // Line
    Constraint::Percentage(25), // Start date
    Constraint::Percentage(25), // End date
    Constraint::Percentage(20), // Value type
    Constraint::Percentage(25), // Amount
];

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let errors = state.session.errors();
    let input_height = u16::from(state.input.is_some()) * 3;
    let errors_height = if errors.is_empty() {
        0
    } else {
        (errors.len() as u16).saturating_add(2)
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(input_height),
            Constraint::Length(errors_height),
        ])
        .split(area);

    render_table(frame, layout[0], state, theme);
    if state.input.is_some() {
        render_input(frame, layout[1], state, theme);
    }
    if !errors.is_empty() {
        render_errors(frame, layout[2], state, theme);
    }
}

pub fn header_row(theme: &Theme) -> Row<'static> {
    let mut cells = vec![Cell::from("#")];
    cells.extend(EntryField::ALL.iter().map(|field| Cell::from(field.label())));
    Row::new(cells).style(Style::default().fg(theme.dim).add_modifier(Modifier::BOLD))
}

fn render_table(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let placeholder = Style::default().fg(theme.dim);
    let rows = state
        .session
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let date_cell = |date: Option<NaiveDate>| match date {
                Some(_) => Cell::from(format_date(date, &state.date_format)),
                None => Cell::from(Span::styled("select a date", placeholder)),
            };
            Row::new(vec![
                Cell::from(format!("{}", index + 1)),
                date_cell(entry.start_date),
                date_cell(entry.end_date),
                Cell::from(entry.value_type.label()),
                Cell::from(format_amount(entry.value_type, entry.amount)),
            ])
        })
        .collect::<Vec<_>>();

    let column = EntryField::ALL
        .iter()
        .position(|field| *field == state.selected_field)
        .map(|position| position + 1);
    let mut table_state = TableState::default()
        .with_selected(Some(state.selected_row))
        .with_selected_column(column);

    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(header_row(theme))
        .block(
            Block::default()
                .title(" Entries ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.border)),
        )
        .row_highlight_style(Style::default().fg(theme.text))
        .cell_highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(table, area, &mut table_state);
}

fn render_input(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let Some(input) = &state.input else {
        return;
    };

    let mut line = vec![
        Span::raw(input.buffer.as_str()),
        Span::styled("_", Style::default().fg(theme.accent)),
        Span::raw("   "),
    ];
    match &input.error {
        Some(err) => line.push(Span::styled(err.as_str(), Style::default().fg(theme.error))),
        None if input.field.is_date() => line.push(Span::styled(
            format!("format {} (empty clears)", state.date_format),
            Style::default().fg(theme.dim),
        )),
        None => line.push(Span::styled(
            "e.g. 120.50",
            Style::default().fg(theme.dim),
        )),
    }

    let block = Block::default()
        .title(format!(" {} (line {}) ", input.field, state.selected_row + 1))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent));
    frame.render_widget(Paragraph::new(Line::from(line)).block(block), area);
}

fn render_errors(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let style = Style::default().fg(theme.error);
    let lines = state
        .session
        .errors()
        .iter()
        .map(|err| Line::from(Span::styled(err.to_string(), style)))
        .collect::<Vec<_>>();

    let block = Block::default()
        .title(" Errors ")
        .borders(Borders::ALL)
        .border_style(style);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
