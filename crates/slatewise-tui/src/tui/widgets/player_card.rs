// Player card widget: details of the selected player.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use slatewise_core::browse::BrowseSession;
use slatewise_core::display::{format_points, PlayerCard, NO_SELECTION_TEXT};

use super::players::format_ownership;

/// Render the card for the session's selected player.
pub fn render(frame: &mut Frame, area: Rect, session: &BrowseSession) {
    let card = PlayerCard::for_selection(session.selected_player());
    let paragraph = Paragraph::new(card_lines(&card))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Player"));
    frame.render_widget(paragraph, area);
}

pub fn card_lines(card: &PlayerCard) -> Vec<Line<'static>> {
    match card {
        PlayerCard::Empty => vec![Line::from(Span::styled(
            NO_SELECTION_TEXT,
            Style::default().fg(Color::Gray),
        ))],
        PlayerCard::Player {
            name,
            team,
            position,
            salary,
            points,
            projected_ownership,
        } => vec![
            Line::from(Span::styled(
                name.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("{team} | {position}")),
            Line::from(""),
            field("Salary", salary.clone()),
            field("Projected", format!("{} pts", format_points(*points))),
            field("Ownership", format!("{}%", format_ownership(*projected_ownership))),
        ],
    }
}

fn field(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<10}"), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::session;
    use crate::tui::widgets::buffer_text;

    #[test]
    fn empty_card_shows_hint() {
        let lines = card_lines(&PlayerCard::Empty);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[0].content, NO_SELECTION_TEXT);
    }

    #[test]
    fn render_selected_player() {
        let backend = ratatui::backend::TestBackend::new(40, 10);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut s = session();
        s.set_operator("FanDuel");
        s.set_game_type("Classic");
        terminal
            .draw(|frame| render(frame, frame.area(), &s))
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Player 01"));
        assert!(text.contains("FD | RB"));
        assert!(text.contains("$5,000"));
        assert!(text.contains("12.5 pts"));
    }
}
