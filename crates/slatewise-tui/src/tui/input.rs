// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into `UiCommand`s for the session, or into
// local `ViewState` mutations (focus movement, opening and closing the
// option list).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use slatewise_core::browse::BrowseSession;

use super::{selector_options, selector_value, Focus, UiCommand, ViewState};

/// Handle a keyboard event.
///
/// Returns `Some(UiCommand)` when the key press changes the session (or
/// quits). Returns `None` when it was handled locally or ignored.
pub fn handle_key(
    key_event: KeyEvent,
    view_state: &mut ViewState,
    session: &BrowseSession,
) -> Option<UiCommand> {
    // Only process key press events. On Windows, crossterm emits both
    // Press and Release events for each physical keypress.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits regardless of mode
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(UiCommand::Quit);
    }

    if view_state.picker.is_some() {
        return handle_picker(key_event, view_state, session);
    }

    match key_event.code {
        KeyCode::Char('q') => Some(UiCommand::Quit),
        KeyCode::Char('c') => Some(UiCommand::ClearFilters),

        KeyCode::Tab => {
            view_state.focus = view_state.focus.next();
            None
        }
        KeyCode::BackTab => {
            view_state.focus = view_state.focus.previous();
            None
        }

        KeyCode::Enter => {
            open_picker(view_state, session);
            None
        }

        _ if view_state.focus == Focus::Table => handle_table(key_event, session),

        _ => None,
    }
}

/// Keys while an option list is open: move, apply, or close.
fn handle_picker(
    key_event: KeyEvent,
    view_state: &mut ViewState,
    session: &BrowseSession,
) -> Option<UiCommand> {
    let options = selector_options(session, view_state.focus);
    let cursor = view_state.picker?;

    match key_event.code {
        KeyCode::Esc => {
            view_state.picker = None;
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            view_state.picker = Some(cursor.saturating_sub(1));
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let last = options.len().saturating_sub(1);
            view_state.picker = Some((cursor + 1).min(last));
            None
        }
        KeyCode::Enter => {
            view_state.picker = None;
            let value = options.get(cursor)?.clone();
            match view_state.focus {
                Focus::Operator => Some(UiCommand::SetOperator(value)),
                Focus::GameType => Some(UiCommand::SetGameType(value)),
                Focus::SlateName => Some(UiCommand::SetSlateName(value)),
                Focus::Table => None,
            }
        }
        _ => None,
    }
}

/// Open the focused selector's option list with the cursor on the current
/// value. Selectors without options stay closed.
fn open_picker(view_state: &mut ViewState, session: &BrowseSession) {
    if !view_state.focus.is_selector() {
        return;
    }
    let options = selector_options(session, view_state.focus);
    if options.is_empty() {
        return;
    }
    let current = selector_value(session, view_state.focus)
        .and_then(|value| options.iter().position(|o| o == value))
        .unwrap_or(0);
    view_state.picker = Some(current);
}

fn handle_table(key_event: KeyEvent, session: &BrowseSession) -> Option<UiCommand> {
    match key_event.code {
        KeyCode::Up | KeyCode::Char('k') => select_previous_row(session),
        KeyCode::Down | KeyCode::Char('j') => select_next_row(session),
        KeyCode::Left | KeyCode::Char('h') => Some(UiCommand::PreviousPage),
        KeyCode::Right | KeyCode::Char('l') => Some(UiCommand::NextPage),
        KeyCode::Char('+') | KeyCode::Char('=') => {
            Some(UiCommand::SetRowsPerPage(session.pager().next_rows_option()))
        }
        KeyCode::Char('-') => Some(UiCommand::SetRowsPerPage(
            session.pager().previous_rows_option(),
        )),
        _ => None,
    }
}

fn select_previous_row(session: &BrowseSession) -> Option<UiCommand> {
    let rows = session.page().items.len();
    if rows == 0 {
        return None;
    }
    match session.selected_row() {
        Some(row) => row.checked_sub(1).map(UiCommand::SelectRow),
        // Selected player is on another page: start from the bottom here.
        None => Some(UiCommand::SelectRow(rows - 1)),
    }
}

fn select_next_row(session: &BrowseSession) -> Option<UiCommand> {
    let rows = session.page().items.len();
    if rows == 0 {
        return None;
    }
    match session.selected_row() {
        Some(row) if row + 1 < rows => Some(UiCommand::SelectRow(row + 1)),
        Some(_) => None,
        None => Some(UiCommand::SelectRow(0)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
