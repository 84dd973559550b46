// Player table widget: the current page of the deduplicated player list.
//
// Columns: Name, Team, Pos, Salary, FPts, Own%
// Selected player row highlighted; placeholder text while no list applies.

use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use slatewise_core::browse::{BrowseSession, ListStatus};
use slatewise_core::display::{format_points, PlayerRow};

pub const AWAITING_GAME_TYPE_TEXT: &str = "Select Game Type to View Players";
pub const NO_PLAYERS_TEXT: &str = "No Players Found";

/// Render the player table into the given area.
pub fn render(frame: &mut Frame, area: Rect, session: &BrowseSession, focused: bool) {
    let status = session.list_status();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        })
        .title(title(status));

    let placeholder = match status {
        ListStatus::AwaitingGameType => Some(AWAITING_GAME_TYPE_TEXT),
        ListStatus::NoPlayers => Some(NO_PLAYERS_TEXT),
        ListStatus::Ready(_) => None,
    };
    if let Some(text) = placeholder {
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("Team"),
        Cell::from("Pos"),
        Cell::from("Salary"),
        Cell::from("FPts"),
        Cell::from("Own%"),
    ])
    .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = session
        .page()
        .items
        .iter()
        .map(PlayerRow::from)
        .map(|row| {
            Row::new(vec![
                Cell::from(row.name),
                Cell::from(row.team),
                Cell::from(row.position),
                Cell::from(row.salary),
                Cell::from(format_points(row.points)),
                Cell::from(format_ownership(row.projected_ownership)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(16),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(9),
        Constraint::Length(6),
        Constraint::Length(6),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    let mut state = TableState::default().with_selected(session.selected_row());
    frame.render_stateful_widget(table, area, &mut state);
}

fn title(status: ListStatus) -> String {
    match status {
        ListStatus::Ready(count) => format!("Players ({count})"),
        _ => "Players".to_string(),
    }
}

/// Ownership percentage to one decimal, "--" when unknown.
pub fn format_ownership(ownership: Option<f64>) -> String {
    match ownership {
        Some(pct) => format!("{pct:.1}"),
        None => "--".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::session;
    use crate::tui::widgets::buffer_text;

    fn draw(session: &BrowseSession) -> String {
        let backend = ratatui::backend::TestBackend::new(80, 14);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), session, true))
            .unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn ownership_formatting() {
        assert_eq!(format_ownership(Some(9.5)), "9.5");
        assert_eq!(format_ownership(None), "--");
    }

    #[test]
    fn placeholder_before_game_type() {
        let s = session();
        assert!(draw(&s).contains(AWAITING_GAME_TYPE_TEXT));
    }

    #[test]
    fn placeholder_when_no_players() {
        let mut s = session();
        s.set_operator("FanDuel");
        s.set_game_type("Classic");
        s.set_slate_name("Late Swap");
        assert!(draw(&s).contains(NO_PLAYERS_TEXT));
    }

    #[test]
    fn renders_current_page() {
        let mut s = session();
        s.set_operator("FanDuel");
        s.set_game_type("Classic");
        let text = draw(&s);
        assert!(text.contains("Players (12)"));
        assert!(text.contains(">>"));
        assert!(text.contains("Player 01"));
        assert!(text.contains("Player 08"));
        assert!(!text.contains("Player 09"));
        assert!(text.contains("$5,000"));
    }
}
