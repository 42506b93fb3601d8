//! Main Application
//!
//! The App struct manages the TUI lifecycle as a thin client over the ledger:
//! - Event loop (keyboard, resize)
//! - Key presses become `UserEvent`s for the embedded `Ledger`
//! - Rendering reads only the ledger's projection
//!
//! The only state kept here is presentation state the ledger does not care
//! about: the list cursor and which form field has focus.

use std::io;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::{Frame, Terminal};

use ledger_core::{EventOutcome, Ledger, Panel, UserEvent};

use crate::theme::{self, ACCENT_ORANGE, DIM_GRAY};
use crate::widgets::Field;

/// A form field that can take keyboard focus
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    /// Add-friend name
    Name,
    /// Add-friend image URL
    Image,
    /// Split-bill total
    Bill,
    /// Split-bill user's share
    PaidByUser,
    /// Split-bill payer choice
    Payer,
}

impl FormField {
    /// Focusable fields of a panel, in tab order
    pub fn fields_for(panel: &Panel) -> &'static [FormField] {
        match panel {
            Panel::Idle => &[],
            Panel::AddingFriend(_) => &[Self::Name, Self::Image],
            Panel::Splitting(_) => &[Self::Bill, Self::PaidByUser, Self::Payer],
        }
    }
}

/// Main application state
pub struct App {
    /// Is the app still running?
    running: bool,
    /// The embedded ledger
    ledger: Ledger,
    /// Highlighted row in the friends list
    cursor: usize,
    /// Focused field of the open form
    focus: Option<FormField>,
}

impl App {
    /// Create a new App around a ledger
    pub fn new(ledger: Ledger) -> Self {
        Self {
            running: true,
            ledger,
            cursor: 0,
            focus: None,
        }
    }

    /// The embedded ledger
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Highlighted row in the friends list
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Focused form field
    pub fn focus(&self) -> Option<FormField> {
        self.focus
    }

    /// Is the app still running?
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Main event loop
    ///
    /// Renders once, then once after every terminal event. One key press is
    /// fully applied before the next one is read.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut event_stream = EventStream::new();

        terminal.draw(|frame| self.draw(frame))?;

        while self.running {
            let Some(event) = event_stream.next().await else {
                break;
            };

            match event? {
                // Only handle Press events (not Release or Repeat)
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Resize(width, height) => {
                    tracing::debug!(width, height, "Terminal resized");
                }
                _ => continue,
            }

            terminal.draw(|frame| self.draw(frame))?;
        }

        Ok(())
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        match key.code {
            KeyCode::Up => self.move_cursor_up(),
            KeyCode::Down => self.move_cursor_down(),
            KeyCode::F(1) => self.toggle_cursor_friend(),
            KeyCode::F(2) => {
                self.dispatch(UserEvent::ToggleAddFriend);
            }
            KeyCode::Esc => {
                if matches!(self.ledger.panel(), Panel::Idle) {
                    self.running = false;
                } else {
                    self.dispatch(UserEvent::Dismiss);
                }
            }
            _ => {
                if matches!(self.ledger.panel(), Panel::Idle) {
                    self.handle_list_key(key);
                } else {
                    self.handle_form_key(key);
                }
            }
        }
    }

    /// Keys while no form is open
    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_cursor_friend(),
            KeyCode::Char('a') => {
                self.dispatch(UserEvent::ToggleAddFriend);
            }
            KeyCode::Char('q') => self.running = false,
            _ => {}
        }
    }

    /// Keys while a form is open
    fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(field) = self.focus else {
            return;
        };

        match key.code {
            KeyCode::Tab => self.cycle_focus(true),
            KeyCode::BackTab => self.cycle_focus(false),
            KeyCode::Enter => {
                let submit = match self.ledger.panel() {
                    Panel::AddingFriend(_) => UserEvent::SubmitAddFriend,
                    Panel::Splitting(_) => UserEvent::SubmitSplitBill,
                    Panel::Idle => return,
                };
                self.dispatch(submit);
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') if field == FormField::Payer => {
                if let Panel::Splitting(form) = self.ledger.panel() {
                    let payer = form.payer().other();
                    self.dispatch(UserEvent::PayerChanged { payer });
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(mut value) = self.field_value(field) {
                    value.push(c);
                    self.edit_field(field, value);
                }
            }
            KeyCode::Backspace => {
                if let Some(mut value) = self.field_value(field) {
                    value.pop();
                    self.edit_field(field, value);
                }
            }
            _ => {}
        }
    }

    /// Send an event to the ledger and keep cursor/focus consistent
    fn dispatch(&mut self, event: UserEvent) -> EventOutcome {
        let outcome = self.ledger.handle_event(event);

        if let EventOutcome::FriendAdded(_) = outcome {
            // Newest friend is last
            self.cursor = self.ledger.friends().len().saturating_sub(1);
        }
        self.sync_focus();

        outcome
    }

    /// Reset focus when the open form changed
    fn sync_focus(&mut self) {
        let fields = FormField::fields_for(self.ledger.panel());
        let still_valid = self.focus.is_some_and(|f| fields.contains(&f));
        if !still_valid {
            self.focus = fields.first().copied();
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        let fields = FormField::fields_for(self.ledger.panel());
        if fields.is_empty() {
            return;
        }
        let current = self
            .focus
            .and_then(|f| fields.iter().position(|x| *x == f))
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % fields.len()
        } else {
            (current + fields.len() - 1) % fields.len()
        };
        self.focus = Some(fields[next]);
    }

    /// Current text of an editable field
    fn field_value(&self, field: FormField) -> Option<String> {
        match (self.ledger.panel(), field) {
            (Panel::AddingFriend(form), FormField::Name) => Some(form.name().to_string()),
            (Panel::AddingFriend(form), FormField::Image) => Some(form.image().to_string()),
            (Panel::Splitting(form), FormField::Bill) => Some(form.bill().raw().to_string()),
            (Panel::Splitting(form), FormField::PaidByUser) => {
                Some(form.paid_by_user().raw().to_string())
            }
            _ => None,
        }
    }

    /// Replace a field's whole value
    fn edit_field(&mut self, field: FormField, value: String) {
        let event = match field {
            FormField::Name => UserEvent::AddFriendNameChanged { value },
            FormField::Image => UserEvent::AddFriendImageChanged { value },
            FormField::Bill => UserEvent::BillChanged { input: value },
            FormField::PaidByUser => UserEvent::PaidByUserChanged { input: value },
            FormField::Payer => return,
        };
        self.dispatch(event);
    }

    fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_cursor_down(&mut self) {
        let last = self.ledger.friends().len().saturating_sub(1);
        self.cursor = (self.cursor + 1).min(last);
    }

    /// Select/Close the friend under the cursor
    fn toggle_cursor_friend(&mut self) {
        let Some(friend_id) = self.ledger.friends().at(self.cursor).map(|f| f.id.clone()) else {
            return;
        };
        self.dispatch(UserEvent::SelectFriend { friend_id });
    }

    /// Balance summary printed after the TUI closes
    pub fn summary(&self) -> Vec<String> {
        let currency = &self.ledger.config().currency_symbol;
        self.ledger
            .friends_list()
            .iter()
            .map(|row| row.status_text(currency))
            .collect()
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render the whole screen
    pub fn draw(&self, frame: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(frame.area());

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Bill calculator",
                theme::title_style(),
            ))),
            rows[0],
        );

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        self.draw_sidebar(frame, columns[0]);
        self.draw_split_bill(frame, columns[1]);
        self.draw_status(frame, rows[2]);
    }

    fn draw_sidebar(&self, frame: &mut Frame, area: Rect) {
        let form_height = if self.ledger.selection().is_adding_friend() {
            4
        } else {
            0
        };
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(form_height),
                Constraint::Length(1),
            ])
            .split(area);

        self.draw_friends(frame, parts[0]);
        self.draw_add_friend(frame, parts[1]);

        let button = Line::from(vec![
            Span::styled(
                format!(" {} ", self.ledger.add_friend_button_label()),
                theme::button_style(),
            ),
            Span::styled(" F2", Style::default().fg(DIM_GRAY)),
        ]);
        frame.render_widget(Paragraph::new(button), parts[2]);
    }

    fn draw_friends(&self, frame: &mut Frame, area: Rect) {
        let currency = &self.ledger.config().currency_symbol;
        let items: Vec<ListItem> = self
            .ledger
            .friends_list()
            .into_iter()
            .map(|row| {
                let name_style = if row.selected {
                    Style::default()
                        .fg(ACCENT_ORANGE)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };
                let status = row.status_text(currency);
                let status_style = theme::status_style(&row.status);
                let header = Line::from(vec![
                    Span::styled(row.name.clone(), name_style),
                    Span::raw("  "),
                    Span::styled(format!(" {} ", row.action_label()), theme::button_style()),
                ]);
                ListItem::new(Text::from(vec![
                    header,
                    Line::from(Span::styled(status, status_style)),
                    Line::from(Span::styled(row.image, Style::default().fg(DIM_GRAY))),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" Friends "))
            .highlight_symbol("> ");
        let mut state = ListState::default().with_selected(Some(self.cursor));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_add_friend(&self, frame: &mut Frame, area: Rect) {
        let Panel::AddingFriend(form) = self.ledger.panel() else {
            return;
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Add friend ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        frame.render_widget(
            Field::new("Friend name", form.name()).focused(self.focus == Some(FormField::Name)),
            lines[0],
        );
        frame.render_widget(
            Field::new("Image URL", form.image()).focused(self.focus == Some(FormField::Image)),
            lines[1],
        );
    }

    fn draw_split_bill(&self, frame: &mut Frame, area: Rect) {
        let Some(view) = self.ledger.split_bill_view() else {
            let hint = Paragraph::new(Line::from(Span::styled(
                "Select a friend to split a bill",
                Style::default().fg(DIM_GRAY),
            )))
            .block(Block::default().borders(Borders::ALL));
            frame.render_widget(hint, area);
            return;
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(format!(" {} ", view.title), theme::title_style()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        frame.render_widget(
            Field::new("Bill value", &view.bill).focused(self.focus == Some(FormField::Bill)),
            lines[0],
        );
        frame.render_widget(
            Field::new("Your expense", &view.paid_by_user)
                .focused(self.focus == Some(FormField::PaidByUser)),
            lines[1],
        );
        frame.render_widget(
            Field::new(&view.friend_share_label, &view.paid_by_friend).disabled(true),
            lines[2],
        );
        let payer = format!("< {} >", view.payer_label);
        frame.render_widget(
            Field::new("Who is paying", &payer).focused(self.focus == Some(FormField::Payer)),
            lines[3],
        );

        let button = Line::from(vec![
            Span::styled(" Split bill ", theme::button_style()),
            Span::styled(" Enter", Style::default().fg(DIM_GRAY)),
        ]);
        frame.render_widget(Paragraph::new(button), lines[5]);
    }

    fn draw_status(&self, frame: &mut Frame, area: Rect) {
        let hints = match self.ledger.panel() {
            Panel::Idle => " Up/Down move | Enter select | a add friend | Esc quit",
            Panel::AddingFriend(_) => " Tab next field | Enter add | F2/Esc close",
            Panel::Splitting(_) => {
                " Tab next field | Left/Right payer | Enter split | F1/Esc close"
            }
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(hints, Style::default().fg(DIM_GRAY)))),
            area,
        );
    }
}
