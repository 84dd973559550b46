// Screen layout: panel arrangement and sizing.
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +----------------+----------------+----------------+
// | Operator       | Game Type      | Slate          |  (3 rows)
// +----------------+----------------+----------------+
// | Player Table (65%)          | Player Card (35%)   |
// |                             |                     |
// +-----------------------------+---------------------+
// | Pagination Bar (1 row)                            |
// +--------------------------------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::Focus;

/// Resolved screen areas for each browser zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: title and dataset summary.
    pub status_bar: Rect,
    pub operator: Rect,
    pub game_type: Rect,
    pub slate_name: Rect,
    /// Left side of the middle section: the current page of players.
    pub player_table: Rect,
    /// Right side of the middle section: details of the selected player.
    pub player_card: Rect,
    pub pagination: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

impl AppLayout {
    /// The three filter selectors paired with their focus targets.
    pub fn selector_areas(&self) -> [(Focus, Rect); 3] {
        [
            (Focus::Operator, self.operator),
            (Focus::GameType, self.game_type),
            (Focus::SlateName, self.slate_name),
        ]
    }

    pub fn selector_area(&self, focus: Focus) -> Option<Rect> {
        self.selector_areas()
            .into_iter()
            .find(|(f, _)| *f == focus)
            .map(|(_, area)| area)
    }
}

/// Build the browser layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    // Vertical: status(1) | filters(3) | middle(fill) | pagination(1) | help(1)
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Length(3), // filter selectors
            Constraint::Min(6),    // table + card
            Constraint::Length(1), // pagination
            Constraint::Length(1), // help bar
        ])
        .split(area);

    let status_bar = vertical[0];
    let filters = vertical[1];
    let middle = vertical[2];
    let pagination = vertical[3];
    let help_bar = vertical[4];

    let selectors = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(filters);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(middle);

    AppLayout {
        status_bar,
        operator: selectors[0],
        game_type: selectors[1],
        slate_name: selectors[2],
        player_table: horizontal[0],
        player_card: horizontal[1],
        pagination,
        help_bar,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
