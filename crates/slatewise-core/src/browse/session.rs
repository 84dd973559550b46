// Browse session: the single state container a front end drives.
//
// Every mutating call completes in a fixed order before returning:
//   1. update the filter selection (cascading to lower levels)
//   2. recompute every derived view
//   3. drop the selected player where the cascade requires it
//   4. reset pagination to page 1 when the player list was rederived
//   5. repair the selected player against the new list

use tracing::debug;

use super::engine::FilterEngine;
use super::options::FilterOptions;
use super::pagination::{Page, Pager};
use super::players::next_selection;
use super::selection::{FilterSelection, PlayerGate};
use crate::data::stats::{dataset_stats, DatasetStats};
use crate::data::{Dataset, Slate, SlatePlayer, SlatePlayerId};

/// What the player list area should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    /// The filter selection does not yet allow players to be listed.
    AwaitingGameType,
    /// Players are allowed but none match the filters.
    NoPlayers,
    /// This many players are listed.
    Ready(usize),
}

#[derive(Debug, Clone)]
pub struct BrowseSession {
    engine: FilterEngine,
    selected: Option<SlatePlayerId>,
    pager: Pager,
    stats: DatasetStats,
}

impl BrowseSession {
    pub fn new(dataset: Dataset, gate: PlayerGate, rows_per_page: usize) -> Self {
        let engine = FilterEngine::new(dataset, gate);
        let stats = dataset_stats(engine.dataset().slates(), engine.filter_options());
        let mut session = BrowseSession {
            engine,
            selected: None,
            pager: Pager::new(rows_per_page),
            stats,
        };
        session.repair_selection();
        session
    }

    // -- Filter operations --

    /// Choose an operator. Game type, slate name and the selected player are
    /// cleared.
    pub fn set_operator(&mut self, operator: &str) {
        self.engine.set_operator(operator);
        self.after_filter_change(true);
    }

    /// Choose a game type. Slate name and the selected player are cleared.
    pub fn set_game_type(&mut self, game_type: &str) {
        self.engine.set_game_type(game_type);
        self.after_filter_change(true);
    }

    /// Choose a slate name. The selected player is kept if still listed.
    pub fn set_slate_name(&mut self, slate_name: &str) {
        self.engine.set_slate_name(slate_name);
        self.after_filter_change(false);
    }

    pub fn clear_filters(&mut self) {
        self.engine.clear_filters();
        self.after_filter_change(true);
    }

    // -- Player selection --

    /// Select a listed player by id. Ids not in the current list are ignored
    /// and `false` is returned.
    pub fn select_player(&mut self, id: SlatePlayerId) -> bool {
        let listed = self
            .available_players()
            .iter()
            .any(|p| p.slate_player_id == id);
        if listed {
            self.selected = Some(id);
        }
        listed
    }

    /// Select the player at `row` (0-based) of the current page.
    pub fn select_row(&mut self, row: usize) -> bool {
        let id = self.page().items.get(row).map(|p| p.slate_player_id);
        match id {
            Some(id) => self.select_player(id),
            None => false,
        }
    }

    // -- Pagination --

    pub fn set_page(&mut self, page: usize) {
        let total = self.total_rows();
        self.pager.set_page(page, total);
    }

    pub fn next_page(&mut self) {
        let total = self.total_rows();
        self.pager.next(total);
    }

    pub fn previous_page(&mut self) {
        self.pager.previous();
    }

    /// Change the page size; always restarts at page 1.
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.pager.set_rows_per_page(rows_per_page);
    }

    // -- Read accessors --

    pub fn dataset(&self) -> &Dataset {
        self.engine.dataset()
    }

    pub fn stats(&self) -> &DatasetStats {
        &self.stats
    }

    pub fn filter_options(&self) -> &FilterOptions {
        self.engine.filter_options()
    }

    pub fn selection(&self) -> &FilterSelection {
        self.engine.selection()
    }

    pub fn available_game_types(&self) -> &[String] {
        self.engine.available_game_types()
    }

    pub fn available_slate_names(&self) -> &[String] {
        self.engine.available_slate_names()
    }

    pub fn filtered_slates(&self) -> Vec<&Slate> {
        self.engine.filtered_slates()
    }

    pub fn available_players(&self) -> &[SlatePlayer] {
        self.engine.available_players()
    }

    pub fn selected_player(&self) -> Option<&SlatePlayer> {
        let id = self.selected?;
        self.available_players()
            .iter()
            .find(|p| p.slate_player_id == id)
    }

    pub fn selected_player_id(&self) -> Option<SlatePlayerId> {
        self.selected
    }

    /// Row of the current page holding the selected player, if it is on it.
    pub fn selected_row(&self) -> Option<usize> {
        let id = self.selected?;
        self.page().items.iter().position(|p| p.slate_player_id == id)
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// The current page of the player list.
    pub fn page(&self) -> Page<'_, SlatePlayer> {
        self.pager.page(self.available_players())
    }

    pub fn total_rows(&self) -> usize {
        self.available_players().len()
    }

    pub fn list_status(&self) -> ListStatus {
        if !self.engine.players_visible() {
            ListStatus::AwaitingGameType
        } else if self.available_players().is_empty() {
            ListStatus::NoPlayers
        } else {
            ListStatus::Ready(self.available_players().len())
        }
    }

    // -- Internals --

    fn after_filter_change(&mut self, clear_selected: bool) {
        if clear_selected {
            self.selected = None;
        }
        self.pager.reset();
        self.repair_selection();
        debug!(
            selected = ?self.selected,
            rows = self.total_rows(),
            "selection repaired after filter change"
        );
    }

    fn repair_selection(&mut self) {
        self.selected = next_selection(self.engine.available_players(), self.selected);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{player, slate};

    fn session() -> BrowseSession {
        let many: Vec<SlatePlayer> = (0..20)
            .map(|i| player(500 + i, &format!("Player {i:02}"), "RB", 5000))
            .collect();
        let dataset = Dataset::new(vec![
            slate(1, "FanDuel", "Classic", "Main", vec![player(100, "Joe Burrow", "QB", 8200)]),
            slate(
                2,
                "FanDuel",
                "Classic",
                "Turbo",
                vec![
                    player(200, "Joe Burrow", "QB", 8600),
                    player(201, "Ja'Marr Chase", "WR", 8100),
                ],
            ),
            slate(3, "DraftKings", "Classic", "Main", many),
            slate(4, "DraftKings", "Showdown", "Empty", vec![]),
        ]);
        BrowseSession::new(dataset, PlayerGate::GameType, 8)
    }

    #[test]
    fn starts_awaiting_game_type() {
        let s = session();
        assert_eq!(s.list_status(), ListStatus::AwaitingGameType);
        assert!(s.selected_player().is_none());
        assert_eq!(s.pager().current_page(), 1);
        assert_eq!(s.stats().total_slates, 4);
    }

    #[test]
    fn game_type_auto_selects_first_player() {
        let mut s = session();
        s.set_operator("FanDuel");
        assert!(s.selected_player().is_none());
        s.set_game_type("Classic");
        let selected = s.selected_player().unwrap();
        assert_eq!(selected.operator_player_name, "Ja'Marr Chase");
        assert_eq!(s.list_status(), ListStatus::Ready(2));
    }

    #[test]
    fn slate_name_keeps_valid_selection() {
        let mut s = session();
        s.set_operator("FanDuel");
        s.set_game_type("Classic");
        assert!(s.select_player(100));
        s.set_slate_name("Main");
        assert_eq!(s.selected_player_id(), Some(100));
    }

    #[test]
    fn slate_name_repairs_invalid_selection() {
        let mut s = session();
        s.set_operator("FanDuel");
        s.set_game_type("Classic");
        assert_eq!(s.selected_player_id(), Some(201));
        // Chase is not on the Main slate.
        s.set_slate_name("Main");
        assert_eq!(s.selected_player_id(), Some(100));
    }

    #[test]
    fn game_type_change_reselects_first() {
        let mut s = session();
        s.set_operator("FanDuel");
        s.set_game_type("Classic");
        s.select_player(100);
        s.set_game_type("Classic");
        // Selection is cleared by the cascade, then repaired to the first row.
        assert_eq!(s.selected_player_id(), Some(201));
    }

    #[test]
    fn emptying_the_list_clears_selection() {
        let mut s = session();
        s.set_operator("DraftKings");
        s.set_game_type("Classic");
        assert!(s.selected_player().is_some());
        s.set_game_type("Showdown");
        assert_eq!(s.list_status(), ListStatus::NoPlayers);
        assert!(s.selected_player().is_none());
        assert!(s.selected_player_id().is_none());
    }

    #[test]
    fn clear_filters_resets_views_and_selection() {
        let mut s = session();
        s.set_operator("FanDuel");
        s.set_game_type("Classic");
        s.set_slate_name("Turbo");
        s.clear_filters();
        assert!(s.available_game_types().is_empty());
        assert!(s.available_slate_names().is_empty());
        assert!(s.available_players().is_empty());
        assert!(s.selected_player().is_none());
        assert_eq!(s.list_status(), ListStatus::AwaitingGameType);
    }

    #[test]
    fn filter_change_resets_page() {
        let mut s = session();
        s.set_operator("DraftKings");
        s.set_game_type("Classic");
        s.set_page(3);
        assert_eq!(s.pager().current_page(), 3);
        s.set_slate_name("Main");
        assert_eq!(s.pager().current_page(), 1);
    }

    #[test]
    fn rows_per_page_resets_page_and_slices() {
        let mut s = session();
        s.set_operator("DraftKings");
        s.set_game_type("Classic");
        s.set_rows_per_page(10);
        s.next_page();
        assert_eq!(s.pager().current_page(), 2);
        s.set_rows_per_page(8);
        assert_eq!(s.pager().current_page(), 1);
        assert_eq!(s.pager().total_pages(s.total_rows()), 3);

        s.set_page(3);
        let page = s.page();
        assert_eq!(page.items.len(), 4);
        assert_eq!(page.items[0].operator_player_name, "Player 16");
        assert_eq!(page.items[3].operator_player_name, "Player 19");
    }

    #[test]
    fn select_row_uses_current_page() {
        let mut s = session();
        s.set_operator("DraftKings");
        s.set_game_type("Classic");
        s.next_page();
        assert!(s.select_row(1));
        assert_eq!(s.selected_player().unwrap().operator_player_name, "Player 09");
        assert_eq!(s.selected_row(), Some(1));
        assert!(!s.select_row(42));
    }

    #[test]
    fn select_unknown_player_is_ignored() {
        let mut s = session();
        s.set_operator("FanDuel");
        s.set_game_type("Classic");
        // 200 exists in the data but was discarded as a duplicate.
        assert!(!s.select_player(200));
        assert_eq!(s.selected_player_id(), Some(201));
    }

    #[test]
    fn page_requests_out_of_range_clamp() {
        let mut s = session();
        s.set_page(5);
        assert_eq!(s.pager().current_page(), 1);
        s.set_operator("DraftKings");
        s.set_game_type("Classic");
        s.set_page(40);
        assert_eq!(s.pager().current_page(), 3);
    }

    #[test]
    fn repeated_operator_matches_single_call() {
        // Start both sessions deep in a list with a hand-picked player.
        let browsed = || {
            let mut s = session();
            s.set_operator("DraftKings");
            s.set_game_type("Classic");
            s.set_page(2);
            assert!(s.select_row(3));
            s
        };

        let mut once = browsed();
        let mut twice = browsed();
        for operator in ["FanDuel", "DraftKings", ""] {
            once.set_operator(operator);
            twice.set_operator(operator);
            twice.set_operator(operator);

            assert_eq!(once.selection(), twice.selection(), "{operator:?}");
            assert_eq!(once.selected_player_id(), twice.selected_player_id());
            assert_eq!(once.pager().current_page(), twice.pager().current_page());
            assert_eq!(once.available_game_types(), twice.available_game_types());
            assert_eq!(once.list_status(), twice.list_status());
        }

        // The same holds once a game type makes players visible again.
        once.set_operator("DraftKings");
        twice.set_operator("DraftKings");
        once.set_game_type("Classic");
        twice.set_game_type("Classic");
        twice.set_operator("DraftKings");
        twice.set_game_type("Classic");
        assert_eq!(once.selection(), twice.selection());
        assert_eq!(once.selected_player_id(), twice.selected_player_id());
        assert_eq!(once.selected_player_id(), Some(500));
        assert_eq!(once.pager().current_page(), twice.pager().current_page());
    }
}
