// Option list overlay for the focused selector.
//
// Drawn below its selector box, on top of the table, with the cursor row
// highlighted.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState};
use ratatui::Frame;

/// Render the option list anchored under `anchor`, clamped to the frame.
pub fn render(frame: &mut Frame, anchor: Rect, options: &[String], cursor: usize) {
    let area = popup_area(anchor, frame.area(), options.len());
    if area.height == 0 || area.width == 0 {
        return;
    }

    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = options.iter().map(|o| ListItem::new(o.as_str())).collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().bg(Color::Black))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Area directly below `anchor`, tall enough for every option plus borders
/// when space allows.
fn popup_area(anchor: Rect, bounds: Rect, option_count: usize) -> Rect {
    let top = anchor.y.saturating_add(anchor.height);
    let bottom = bounds.y.saturating_add(bounds.height);
    let available = bottom.saturating_sub(top);
    let wanted = u16::try_from(option_count.saturating_add(2)).unwrap_or(u16::MAX);

    Rect {
        x: anchor.x,
        y: top.min(bottom),
        width: anchor.width,
        height: wanted.min(available),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_text;

    #[test]
    fn popup_sits_below_anchor() {
        let anchor = Rect::new(10, 1, 30, 3);
        let area = popup_area(anchor, Rect::new(0, 0, 100, 40), 4);
        assert_eq!(area, Rect::new(10, 4, 30, 6));
    }

    #[test]
    fn popup_clamped_to_bounds() {
        let anchor = Rect::new(0, 1, 30, 3);
        let area = popup_area(anchor, Rect::new(0, 0, 100, 10), 50);
        assert_eq!(area.y, 4);
        assert_eq!(area.height, 6);
    }

    #[test]
    fn popup_without_room_is_empty() {
        let anchor = Rect::new(0, 7, 30, 3);
        let area = popup_area(anchor, Rect::new(0, 0, 100, 10), 3);
        assert_eq!(area.height, 0);
    }

    #[test]
    fn render_lists_options() {
        let backend = ratatui::backend::TestBackend::new(40, 12);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let options = vec!["DraftKings".to_string(), "FanDuel".to_string()];
        terminal
            .draw(|frame| render(frame, Rect::new(0, 0, 30, 3), &options, 1))
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("DraftKings"));
        assert!(text.contains("> FanDuel"));
    }
}
