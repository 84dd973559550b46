// Status bar widget: title, dataset summary, active filters.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use slatewise_core::browse::{BrowseSession, FilterSelection};
use slatewise_core::data::stats::DatasetStats;

/// Render the status bar into the given area.
///
/// Layout: [title] [slate/player counts] | [active filters]
pub fn render(frame: &mut Frame, area: Rect, session: &BrowseSession) {
    let spans = vec![
        Span::styled(
            " Slatewise ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", summary(session.stats())),
            Style::default().fg(Color::White),
        ),
        Span::styled("| ", Style::default().fg(Color::Gray)),
        Span::styled(filters_label(session.selection()), Style::default().fg(Color::Yellow)),
    ];

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// E.g. "4 slates, 37 players (avg 9/slate), 2 operators".
pub fn summary(stats: &DatasetStats) -> String {
    format!(
        "{} slates, {} players (avg {}/slate), {} operators",
        stats.total_slates, stats.total_players, stats.average_players_per_slate, stats.operators
    )
}

/// Active filters joined with " / ", or "No filters".
pub fn filters_label(selection: &FilterSelection) -> String {
    let parts: Vec<&str> = [
        selection.operator(),
        selection.game_type(),
        selection.slate_name(),
    ]
    .into_iter()
    .flatten()
    .collect();

    if parts.is_empty() {
        "No filters".to_string()
    } else {
        parts.join(" / ")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
