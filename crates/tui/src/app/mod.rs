use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use engine::{Amount, Command, EntryField, FieldValue, Outcome, Session, ViewMode, format_date};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    transport::SubmissionTransport,
    ui::{
        self,
        components::{
            date_input,
            toast::{ToastLevel, ToastState},
        },
        keymap::{AppAction, map_key},
    },
};

/// Inline editor for the selected date or amount cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputState {
    pub field: EntryField,
    pub buffer: String,
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct AppState {
    pub session: Session,
    pub selected_row: usize,
    pub selected_field: EntryField,
    pub input: Option<InputState>,
    pub toast: Option<ToastState>,
    pub date_format: String,
}

impl AppState {
    pub fn new(date_format: String) -> Self {
        Self {
            session: Session::new(),
            selected_row: 0,
            selected_field: EntryField::StartDate,
            input: None,
            toast: None,
            date_format,
        }
    }

    fn notify(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(ToastState::new(level, message));
    }

    fn expire_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|toast| toast.expired(now)) {
            self.toast = None;
        }
    }
}

pub struct App {
    transport: Box<dyn SubmissionTransport>,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig, transport: Box<dyn SubmissionTransport>) -> Self {
        Self {
            transport,
            state: AppState::new(config.date_format),
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.handle_key(key);
            }
            self.state.expire_toast(Instant::now());
        }

        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let typing = self.state.input.is_some();
        let action = map_key(key, typing);
        if action == AppAction::Quit {
            self.should_quit = true;
            return;
        }

        match self.state.session.mode() {
            ViewMode::Editing if typing => self.handle_input_key(action),
            ViewMode::Editing => self.handle_editing_key(action),
            ViewMode::Summary => self.handle_summary_key(action),
        }
    }

    fn handle_editing_key(&mut self, action: AppAction) {
        match action {
            AppAction::Up | AppAction::Input('k') => {
                self.state.selected_row = self.state.selected_row.saturating_sub(1);
            }
            AppAction::Down | AppAction::Input('j') => {
                let last = self.state.session.entries().len().saturating_sub(1);
                self.state.selected_row = (self.state.selected_row + 1).min(last);
            }
            AppAction::NextField => self.move_field(1),
            AppAction::PrevField => self.move_field(EntryField::ALL.len() - 1),
            AppAction::Submit => self.activate_field(),
            AppAction::Input('a') => {
                if let Some(Outcome::Len(len)) = self.dispatch(Command::AddEntry) {
                    self.state.selected_row = len - 1;
                }
            }
            AppAction::Input('d') => {
                let index = self.state.selected_row;
                if let Some(Outcome::Len(len)) = self.dispatch(Command::RemoveEntry(index)) {
                    self.state.selected_row = index.min(len - 1);
                }
            }
            AppAction::Input('s') => self.submit(),
            AppAction::Input('+') => self.step_date(1),
            AppAction::Input('-') => self.step_date(-1),
            AppAction::Input('x') if self.state.selected_field.is_date() => {
                self.set_selected(FieldValue::Date(None));
            }
            AppAction::Input(' ') if self.state.selected_field == EntryField::ValueType => {
                self.toggle_value_type();
            }
            _ => {}
        }
    }

    fn handle_input_key(&mut self, action: AppAction) {
        let Some(input) = self.state.input.as_mut() else {
            return;
        };
        match action {
            AppAction::Input(ch) => {
                input.buffer.push(ch);
                input.error = None;
            }
            AppAction::Backspace => {
                input.buffer.pop();
                input.error = None;
            }
            AppAction::Cancel => self.state.input = None,
            AppAction::Submit => self.commit_input(),
            _ => {}
        }
    }

    fn handle_summary_key(&mut self, action: AppAction) {
        match action {
            AppAction::Cancel | AppAction::Input('b') => {
                if self.dispatch(Command::Back).is_some() {
                    self.state.notify(ToastLevel::Info, "Back to editing, entries kept");
                }
            }
            AppAction::Submit | AppAction::Input('c') => self.complete(),
            _ => {}
        }
    }

    fn move_field(&mut self, offset: usize) {
        let fields = EntryField::ALL;
        let current = fields
            .iter()
            .position(|field| *field == self.state.selected_field)
            .unwrap_or(0);
        self.state.selected_field = fields[(current + offset) % fields.len()];
    }

    /// Enter on a cell: value types toggle in place, other fields open an
    /// input prefilled with the current value.
    fn activate_field(&mut self) {
        let field = self.state.selected_field;
        let Some(entry) = self.state.session.entries().get(self.state.selected_row) else {
            return;
        };
        let buffer = match entry.field(field) {
            FieldValue::ValueType(_) => {
                self.toggle_value_type();
                return;
            }
            FieldValue::Date(date) => format_date(date, &self.state.date_format),
            FieldValue::Amount(amount) => amount.to_string(),
        };
        self.state.input = Some(InputState {
            field,
            buffer,
            error: None,
        });
    }

    fn commit_input(&mut self) {
        let Some(input) = self.state.input.as_mut() else {
            return;
        };
        let parsed = if input.field.is_date() {
            date_input::parse_date(&input.buffer, &self.state.date_format).map(FieldValue::Date)
        } else {
            input
                .buffer
                .parse::<Amount>()
                .map(FieldValue::Amount)
                .map_err(|err| err.to_string())
        };

        match parsed {
            Ok(value) => {
                let field = input.field;
                self.state.input = None;
                self.set_field(field, value);
            }
            Err(message) => input.error = Some(message),
        }
    }

    fn step_date(&mut self, days: i64) {
        let field = self.state.selected_field;
        let Some(entry) = self.state.session.entries().get(self.state.selected_row) else {
            return;
        };
        if let FieldValue::Date(current) = entry.field(field) {
            let stepped = date_input::step(current, days, today());
            self.set_field(field, FieldValue::Date(stepped));
        }
    }

    fn toggle_value_type(&mut self) {
        let Some(entry) = self.state.session.entries().get(self.state.selected_row) else {
            return;
        };
        let toggled = entry.value_type.toggled();
        self.set_field(EntryField::ValueType, FieldValue::ValueType(toggled));
    }

    fn set_selected(&mut self, value: FieldValue) {
        self.set_field(self.state.selected_field, value);
    }

    fn set_field(&mut self, field: EntryField, value: FieldValue) {
        let index = self.state.selected_row;
        self.dispatch(Command::UpdateField {
            index,
            field,
            value,
        });
    }

    fn submit(&mut self) {
        if self.dispatch(Command::Submit) == Some(Outcome::Submitted(ViewMode::Summary)) {
            self.state.input = None;
        }
    }

    fn complete(&mut self) {
        let Some(Outcome::Complete(submission)) = self.dispatch(Command::Complete) else {
            return;
        };
        match self.transport.send(&submission) {
            Ok(()) => self.state.notify(
                ToastLevel::Success,
                format!("Sent {} entries", submission.entries.len()),
            ),
            Err(err) => {
                tracing::error!("submission failed: {err}");
                self.state
                    .notify(ToastLevel::Error, format!("Submission failed: {err}"));
            }
        }
    }

    /// Applies one command; a refused command becomes a toast.
    fn dispatch(&mut self, command: Command) -> Option<Outcome> {
        match self.state.session.apply(command) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!("operation refused: {err}");
                self.state.notify(ToastLevel::Error, err.to_string());
                None
            }
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
