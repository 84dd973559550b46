// Whole-dataset summaries: the cross-slate player index and headline counts.

use std::collections::HashMap;

use serde::Serialize;

use super::model::{PlayerKey, Slate, SlatePlayer};
use crate::browse::options::FilterOptions;

/// A unique player across the whole dataset and every slate it appears in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexedPlayer {
    /// The first entry encountered for this player, in dataset order.
    pub player: SlatePlayer,
    /// Keys of all slates listing this player, in dataset order.
    pub slate_keys: Vec<String>,
}

/// Headline counts describing a loaded dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DatasetStats {
    pub total_slates: usize,
    /// Unique players by name and position.
    pub total_players: usize,
    /// `total_players / total_slates`, rounded; 0 for an empty dataset.
    pub average_players_per_slate: usize,
    pub operators: usize,
    pub game_types: usize,
    pub slate_names: usize,
}

/// Merge every player entry of every slate into one entry per [`PlayerKey`].
///
/// The first occurrence supplies the player data; later occurrences only
/// contribute their slate key.
pub fn player_index(slates: &[Slate]) -> Vec<IndexedPlayer> {
    let mut positions: HashMap<PlayerKey, usize> = HashMap::new();
    let mut index: Vec<IndexedPlayer> = Vec::new();

    for slate in slates {
        let slate_key = slate.key();
        for player in &slate.dfs_slate_players {
            match positions.get(&player.key()) {
                Some(&i) => index[i].slate_keys.push(slate_key.clone()),
                None => {
                    positions.insert(player.key(), index.len());
                    index.push(IndexedPlayer {
                        player: player.clone(),
                        slate_keys: vec![slate_key.clone()],
                    });
                }
            }
        }
    }

    index
}

/// Compute the dataset summary. `options` must come from the same slates.
pub fn dataset_stats(slates: &[Slate], options: &FilterOptions) -> DatasetStats {
    let total_slates = slates.len();
    let total_players = player_index(slates).len();
    let average_players_per_slate = if total_slates == 0 {
        0
    } else {
        (total_players as f64 / total_slates as f64).round() as usize
    };

    DatasetStats {
        total_slates,
        total_players,
        average_players_per_slate,
        operators: options.operators().len(),
        game_types: options.game_types().len(),
        slate_names: options.slate_names().len(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::options::extract_options;
    use crate::test_support::{player, slate};

    #[test]
    fn index_merges_players_across_slates() {
        let slates = vec![
            slate(1, "FanDuel", "Classic", "Main", vec![player(10, "Joe Burrow", "QB", 8200)]),
            slate(
                2,
                "FanDuel",
                "Classic",
                "Turbo",
                vec![
                    player(20, "Joe Burrow", "QB", 8400),
                    player(21, "Ja'Marr Chase", "WR", 8000),
                ],
            ),
        ];

        let index = player_index(&slates);
        assert_eq!(index.len(), 2);
        assert_eq!(index[0].player.slate_player_id, 10);
        assert_eq!(index[0].slate_keys, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(index[1].player.operator_player_name, "Ja'Marr Chase");
        assert_eq!(index[1].slate_keys, vec!["2".to_string()]);
    }

    #[test]
    fn same_name_different_position_stays_separate() {
        let slates = vec![slate(
            1,
            "DraftKings",
            "Showdown",
            "Captain",
            vec![player(1, "Taysom Hill", "QB", 5000), player(2, "Taysom Hill", "TE", 5000)],
        )];
        assert_eq!(player_index(&slates).len(), 2);
    }

    #[test]
    fn stats_count_unique_players_and_options() {
        let slates = vec![
            slate(1, "FanDuel", "Classic", "Main", vec![player(10, "A", "QB", 1)]),
            slate(2, "FanDuel", "Classic", "Turbo", vec![player(20, "A", "QB", 1), player(21, "B", "WR", 1)]),
            slate(3, "DraftKings", "Classic", "Main", vec![player(30, "C", "RB", 1)]),
        ];
        let options = extract_options(&slates);
        let stats = dataset_stats(&slates, &options);
        assert_eq!(stats.total_slates, 3);
        assert_eq!(stats.total_players, 3);
        assert_eq!(stats.average_players_per_slate, 1);
        assert_eq!(stats.operators, 2);
        assert_eq!(stats.game_types, 1);
        assert_eq!(stats.slate_names, 2);
    }

    #[test]
    fn stats_of_empty_dataset_are_zero() {
        let options = extract_options(&[]);
        assert_eq!(dataset_stats(&[], &options), DatasetStats::default());
    }
}
