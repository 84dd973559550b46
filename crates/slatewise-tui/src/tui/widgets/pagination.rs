// Pagination bar widget: rows per page, visible range, page numbers.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use slatewise_core::browse::{BrowseSession, Pager};

/// Render the pagination bar into the given area.
///
/// Layout: Rows: [n] | [range] | [< 1 2 3 >]
pub fn render(frame: &mut Frame, area: Rect, session: &BrowseSession) {
    let pager = session.pager();
    let total_rows = session.total_rows();

    let mut spans = vec![
        Span::styled(
            format!(" Rows: {} ", pager.rows_per_page()),
            Style::default().fg(Color::White),
        ),
        Span::styled("| ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{} ", pager.range_label(total_rows)),
            Style::default().fg(Color::White),
        ),
    ];

    if total_rows > 0 {
        spans.push(Span::styled("| ", Style::default().fg(Color::Gray)));
        spans.extend(page_spans(pager, total_rows));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// Page navigation spans, current page highlighted; arrows dimmed when
/// there is nowhere to go.
pub fn page_spans(pager: &Pager, total_rows: usize) -> Vec<Span<'static>> {
    let enabled = Style::default().fg(Color::White);
    let disabled = Style::default().fg(Color::DarkGray);

    let mut spans = vec![Span::styled(
        "< ",
        if pager.has_previous() { enabled } else { disabled },
    )];
    for page in pager.page_numbers(total_rows) {
        let style = if page == pager.current_page() {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            enabled
        };
        spans.push(Span::styled(page.to_string(), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        ">",
        if pager.has_next(total_rows) { enabled } else { disabled },
    ));
    spans
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
    fn page_spans_highlight_current() {
        let mut pager = Pager::new(8);
        pager.set_page(2, 20);
        let spans = page_spans(&pager, 20);
        // "< " "1" " " "2" " " "3" " " ">"
        assert_eq!(spans.len(), 8);
        assert_eq!(spans[3].content, "2");
        assert!(spans[3].style.add_modifier.contains(Modifier::BOLD));
        assert!(!spans[1].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn arrows_dim_at_edges() {
        let pager = Pager::new(8);
        let spans = page_spans(&pager, 5);
        assert_eq!(spans[0].style.fg, Some(Color::DarkGray));
        assert_eq!(spans.last().unwrap().style.fg, Some(Color::DarkGray));
    }

    #[test]
    fn render_shows_range() {
        let backend = ratatui::backend::TestBackend::new(80, 1);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut s = session();
        s.set_operator("FanDuel");
        s.set_game_type("Classic");
        s.next_page();
        terminal
            .draw(|frame| render(frame, frame.area(), &s))
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Rows: 8"));
        assert!(text.contains("9 - 12 of 12"));
    }

    #[test]
    fn render_without_rows_shows_no_data() {
        let backend = ratatui::backend::TestBackend::new(80, 1);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let s = session();
        terminal
            .draw(|frame| render(frame, frame.area(), &s))
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("No data"));
        assert!(!text.contains('<'));
    }
}
