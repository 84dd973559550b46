// Player list derivation and selected-player repair.

use std::collections::HashSet;

use crate::data::{PlayerKey, Slate, SlatePlayer, SlatePlayerId};

/// Flatten the players of `slates`, keep the first entry per [`PlayerKey`],
/// and sort the result by display name.
///
/// Slates are visited in the order given, so when two slates list the same
/// name and position the earlier slate's entry wins. Later duplicates are
/// dropped entirely; their salary or projection is never merged in. The sort
/// is stable and ordinal, so entries sharing a name keep their first-seen
/// order.
pub fn dedup_players<'a, I>(slates: I) -> Vec<SlatePlayer>
where
    I: IntoIterator<Item = &'a Slate>,
{
    let mut seen: HashSet<PlayerKey> = HashSet::new();
    let mut players: Vec<SlatePlayer> = slates
        .into_iter()
        .flat_map(|slate| slate.dfs_slate_players.iter())
        .filter(|player| seen.insert(player.key()))
        .cloned()
        .collect();

    players.sort_by(|a, b| a.operator_player_name.cmp(&b.operator_player_name));
    players
}

/// Compute the selected player after the visible list changed.
///
/// - Empty list: nothing is selected.
/// - No previous selection, or the previous one is no longer listed: the
///   first player is selected.
/// - Otherwise the previous selection stands.
///
/// Applying the result again to the same list returns it unchanged.
pub fn next_selection(
    available: &[SlatePlayer],
    previous: Option<SlatePlayerId>,
) -> Option<SlatePlayerId> {
    let first = available.first()?;
    match previous {
        Some(id) if available.iter().any(|p| p.slate_player_id == id) => Some(id),
        _ => Some(first.slate_player_id),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{player, slate};

    fn scenario_slates() -> Vec<Slate> {
        vec![
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
        ]
    }

    #[test]
    fn first_occurrence_wins_and_list_is_name_sorted() {
        let slates = scenario_slates();
        let players = dedup_players(&slates);
        let names: Vec<&str> = players.iter().map(|p| p.operator_player_name.as_str()).collect();
        assert_eq!(names, vec!["Ja'Marr Chase", "Joe Burrow"]);
        assert_eq!(players[1].slate_player_id, 100);
        assert_eq!(players[1].operator_salary, 8200);
    }

    #[test]
    fn same_name_different_position_both_kept() {
        let slates = vec![slate(
            1,
            "DraftKings",
            "Showdown",
            "Captain",
            vec![player(1, "Taysom Hill", "TE", 5000), player(2, "Taysom Hill", "QB", 5200)],
        )];
        let players = dedup_players(&slates);
        assert_eq!(players.len(), 2);
        // Stable sort keeps first-seen order for equal names.
        assert_eq!(players[0].operator_position, "TE");
        assert_eq!(players[1].operator_position, "QB");
    }

    #[test]
    fn slates_without_players_contribute_nothing() {
        let slates = vec![slate(1, "FanDuel", "Classic", "Main", vec![])];
        assert!(dedup_players(&slates).is_empty());
    }

    #[test]
    fn no_duplicate_keys_in_output() {
        let slates = vec![
            slate(1, "A", "G", "S", vec![player(1, "X", "QB", 1), player(2, "Y", "RB", 1)]),
            slate(2, "A", "G", "S", vec![player(3, "Y", "RB", 1), player(4, "X", "QB", 1)]),
            slate(3, "A", "G", "S", vec![player(5, "X", "QB", 1)]),
        ];
        let players = dedup_players(&slates);
        let keys: HashSet<PlayerKey> = players.iter().map(SlatePlayer::key).collect();
        assert_eq!(keys.len(), players.len());
        assert_eq!(players.len(), 2);
    }

    #[test]
    fn selection_empty_list_clears() {
        assert_eq!(next_selection(&[], Some(5)), None);
        assert_eq!(next_selection(&[], None), None);
    }

    #[test]
    fn selection_defaults_to_first() {
        let players = dedup_players(&scenario_slates());
        assert_eq!(next_selection(&players, None), Some(201));
    }

    #[test]
    fn selection_replaced_when_no_longer_listed() {
        let players = dedup_players(&scenario_slates());
        // 200 was discarded as a duplicate of 100, so it is not selectable.
        assert_eq!(next_selection(&players, Some(200)), Some(201));
    }

    #[test]
    fn valid_selection_is_kept() {
        let players = dedup_players(&scenario_slates());
        assert_eq!(next_selection(&players, Some(100)), Some(100));
    }

    #[test]
    fn selection_converges_in_one_step() {
        let players = dedup_players(&scenario_slates());
        for previous in [None, Some(100), Some(999)] {
            let once = next_selection(&players, previous);
            assert_eq!(next_selection(&players, once), once);
        }
    }
}
