// Terminal browser: layout, input handling, and widget rendering.
//
// The loop owns the `BrowseSession` outright. Key presses become `UiCommand`s
// that are applied to the session, while purely visual state (which panel has
// focus, whether an option list is open) lives in `ViewState`. The frame is
// redrawn from both at ~30 fps.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tracing::{debug, info, warn};

use slatewise_core::browse::BrowseSession;

use layout::{build_layout, AppLayout};

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Operator,
    GameType,
    SlateName,
    Table,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Operator, Focus::GameType, Focus::SlateName, Focus::Table];

    pub fn next(self) -> Focus {
        let i = self.index();
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Focus {
        let i = self.index();
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Whether this focus target is one of the three filter selectors.
    pub fn is_selector(self) -> bool {
        self != Focus::Table
    }

    pub fn label(self) -> &'static str {
        match self {
            Focus::Operator => "Operator",
            Focus::GameType => "Game Type",
            Focus::SlateName => "Slate",
            Focus::Table => "Players",
        }
    }

    fn index(self) -> usize {
        match self {
            Focus::Operator => 0,
            Focus::GameType => 1,
            Focus::SlateName => 2,
            Focus::Table => 3,
        }
    }
}

/// Options the given selector offers right now. Empty for the table.
pub fn selector_options(session: &BrowseSession, focus: Focus) -> &[String] {
    match focus {
        Focus::Operator => session.filter_options().operators(),
        Focus::GameType => session.available_game_types(),
        Focus::SlateName => session.available_slate_names(),
        Focus::Table => &[],
    }
}

/// The value currently chosen in the given selector.
pub fn selector_value(session: &BrowseSession, focus: Focus) -> Option<&str> {
    let selection = session.selection();
    match focus {
        Focus::Operator => selection.operator(),
        Focus::GameType => selection.game_type(),
        Focus::SlateName => selection.slate_name(),
        Focus::Table => None,
    }
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// UI-local state that never reaches the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub focus: Focus,
    /// Cursor into the focused selector's option list while it is open.
    pub picker: Option<usize>,
}

// ---------------------------------------------------------------------------
// UiCommand
// ---------------------------------------------------------------------------

/// A user intent that changes the browse session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    SetOperator(String),
    SetGameType(String),
    SetSlateName(String),
    ClearFilters,
    /// Select the player at this row of the current page.
    SelectRow(usize),
    NextPage,
    PreviousPage,
    SetRowsPerPage(usize),
    Quit,
}

/// Apply a command to the session. `Quit` is handled by the loop and is a
/// no-op here.
pub fn apply_command(session: &mut BrowseSession, command: UiCommand) {
    debug!(?command, "applying ui command");
    match command {
        UiCommand::SetOperator(value) => session.set_operator(&value),
        UiCommand::SetGameType(value) => session.set_game_type(&value),
        UiCommand::SetSlateName(value) => session.set_slate_name(&value),
        UiCommand::ClearFilters => session.clear_filters(),
        UiCommand::SelectRow(row) => {
            if !session.select_row(row) {
                warn!(row, "row is not on the current page");
            }
        }
        UiCommand::NextPage => session.next_page(),
        UiCommand::PreviousPage => session.previous_page(),
        UiCommand::SetRowsPerPage(rows) => session.set_rows_per_page(rows),
        UiCommand::Quit => {}
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete browser frame.
pub fn render_frame(frame: &mut Frame, session: &BrowseSession, view: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, session);
    for (focus, area) in layout.selector_areas() {
        widgets::filter_panel::render(frame, area, session, focus, view.focus == focus);
    }
    widgets::players::render(frame, layout.player_table, session, view.focus == Focus::Table);
    widgets::player_card::render(frame, layout.player_card, session);
    widgets::pagination::render(frame, layout.pagination, session);
    render_help_bar(frame, &layout, view);

    if let Some(cursor) = view.picker {
        if let Some(anchor) = layout.selector_area(view.focus) {
            let options = selector_options(session, view.focus);
            widgets::picker::render(frame, anchor, options, cursor);
        }
    }
}

fn render_help_bar(frame: &mut Frame, layout: &AppLayout, view: &ViewState) {
    let text = help_text(view);
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        text,
        Style::default().fg(Color::White).add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, layout.help_bar);
}

/// Key hints for the current focus.
pub fn help_text(view: &ViewState) -> &'static str {
    if view.picker.is_some() {
        " Up/Down:Move | Enter:Apply | Esc:Close"
    } else if view.focus == Focus::Table {
        " q:Quit | Tab:Focus | Up/Down:Select | Left/Right:Page | +/-:Rows | c:Clear"
    } else {
        " q:Quit | Tab:Focus | Enter:Choose | c:Clear"
    }
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the terminal browser until the user quits.
///
/// Initializes the terminal, installs a panic hook that restores it, then
/// multiplexes keyboard input and render ticks until `Quit`.
pub async fn run(mut session: BrowseSession) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::default();
    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    info!(slates = session.dataset().len(), "browser started");

    loop {
        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        match input::handle_key(key_event, &mut view_state, &session) {
                            Some(UiCommand::Quit) => break,
                            Some(command) => apply_command(&mut session, command),
                            None => {}
                        }
                    }
                    Some(Ok(_)) => {
                        // Mouse and resize events are picked up by the next draw.
                    }
                    Some(Err(e)) => {
                        warn!("input stream error: {e}");
                        break;
                    }
                    None => break,
                }
            }

            _ = render_tick.tick() => {
                terminal.draw(|frame| render_frame(frame, &session, &view_state))?;
            }
        }
    }

    ratatui::restore();
    info!("browser closed");

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
