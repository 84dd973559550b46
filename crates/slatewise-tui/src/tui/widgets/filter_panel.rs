// Filter selector widget: one bordered box per cascade level showing the
// chosen value, a prompt, or a disabled marker when nothing can be chosen.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use slatewise_core::browse::BrowseSession;

use crate::tui::{selector_options, selector_value, Focus};

/// How a selector should be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorView {
    Chosen(String),
    /// Options exist but none is chosen.
    Prompt,
    /// No options available at this level yet.
    Disabled,
}

pub fn selector_view(session: &BrowseSession, focus: Focus) -> SelectorView {
    if let Some(value) = selector_value(session, focus) {
        SelectorView::Chosen(value.to_string())
    } else if selector_options(session, focus).is_empty() {
        SelectorView::Disabled
    } else {
        SelectorView::Prompt
    }
}

/// Render one selector into the given area.
pub fn render(frame: &mut Frame, area: Rect, session: &BrowseSession, focus: Focus, focused: bool) {
    let (text, text_style) = match selector_view(session, focus) {
        SelectorView::Chosen(value) => (value, Style::default().fg(Color::White)),
        SelectorView::Prompt => (
            format!("Select {}...", focus.label()),
            Style::default().fg(Color::Gray),
        ),
        SelectorView::Disabled => (
            "n/a".to_string(),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        ),
    };

    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };

    let paragraph = Paragraph::new(text).style(text_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(focus.label()),
    );
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
