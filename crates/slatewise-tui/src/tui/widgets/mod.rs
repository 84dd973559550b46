// TUI widget modules for each browser panel.

pub mod filter_panel;
pub mod pagination;
pub mod picker;
pub mod player_card;
pub mod players;
pub mod status_bar;

#[cfg(test)]
pub(crate) fn buffer_text(terminal: &ratatui::Terminal<ratatui::backend::TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
