// Slate document model: contest slates, their players and their games.
//
// Field names follow the camelCase keys of the source JSON document. Scalar,
// sequence and string fields tolerate `null` or absence so a partially filled
// record never breaks iteration downstream. Player and game entries are
// checked one at a time: a malformed entry is dropped, its siblings stay.

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use tracing::warn;

/// Identity of a single player entry within one slate.
pub type SlatePlayerId = u64;

/// Identity of a slate.
pub type SlateId = u64;

// ---------------------------------------------------------------------------
// Slate
// ---------------------------------------------------------------------------

/// A contest container offered by one operator: the games it covers and the
/// players eligible for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slate {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub document_id: String,
    pub slate_id: SlateId,
    pub season: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub season_type: u32,
    pub week: u32,
    #[serde(rename = "_lastUpdatedDate", default, deserialize_with = "null_as_default")]
    pub last_updated: String,
    /// Always a sequence; `null` or a missing key becomes empty, and
    /// malformed entries are skipped.
    #[serde(default, deserialize_with = "skip_malformed")]
    pub dfs_slate_games: Vec<SlateGame>,
    /// Always a sequence; `null` or a missing key becomes empty, and
    /// malformed entries are skipped.
    #[serde(default, deserialize_with = "skip_malformed")]
    pub dfs_slate_players: Vec<SlatePlayer>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_multi_day_slate: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub number_of_games: u32,
    /// Contest-hosting platform, e.g. "FanDuel" or "DraftKings".
    #[serde(default, deserialize_with = "null_as_default")]
    pub operator: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub operator_day: String,
    /// Contest format, e.g. "Classic" or "Showdown".
    #[serde(default, deserialize_with = "null_as_default")]
    pub operator_game_type: String,
    /// The slate name shown to users, e.g. "Main" or "Turbo".
    #[serde(default, deserialize_with = "null_as_default")]
    pub operator_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub operator_slate_id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub operator_start_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub removed_by_operator: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub salary_cap: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slate_roster_slots: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
}

impl Slate {
    /// Label used when a slate has to be referred to in logs or the UI.
    pub fn label(&self) -> String {
        format!(
            "{} {} {} (week {})",
            self.operator, self.operator_game_type, self.operator_name, self.week
        )
    }

    /// Stable string identity of the slate: the document `id` when present,
    /// otherwise the numeric slate id.
    pub fn key(&self) -> String {
        if self.id.is_empty() {
            self.slate_id.to_string()
        } else {
            self.id.clone()
        }
    }
}

// ---------------------------------------------------------------------------
// SlatePlayer
// ---------------------------------------------------------------------------

/// A player's participation in one slate, with the operator's salary and the
/// projection attached to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlatePlayer {
    pub slate_player_id: SlatePlayerId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slate_id: SlateId,
    #[serde(default)]
    pub slate_game_id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub player_id: u64,
    #[serde(default)]
    pub player_game_projection_stat_id: Option<u64>,
    #[serde(default)]
    pub fantasy_defense_projection_stat_id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub operator_player_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub operator_slate_player_id: String,
    /// Display name.
    pub operator_player_name: String,
    pub operator_position: String,
    /// Whole dollars. Any JSON number is accepted and rounded.
    #[serde(deserialize_with = "salary")]
    pub operator_salary: u32,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub team_id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub removed_by_operator: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub operator_roster_slots: Vec<String>,
    #[serde(default)]
    pub fantasy_points: Option<f64>,
    #[serde(default)]
    pub fantasy_points_per_dollar: Option<f64>,
    #[serde(default)]
    pub projected_ownership: Option<f64>,
}

impl SlatePlayer {
    /// The dedup key of this entry: display name plus position.
    pub fn key(&self) -> PlayerKey {
        PlayerKey::new(&self.operator_player_name, &self.operator_position)
    }
}

/// Composite identity used to treat entries from different slates as the
/// same real-world player.
///
/// Kept as two fields so that names containing any delimiter character can
/// never collide with a different name/position pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerKey {
    pub name: String,
    pub position: String,
}

impl PlayerKey {
    pub fn new(name: &str, position: &str) -> Self {
        PlayerKey {
            name: name.to_string(),
            position: position.to_string(),
        }
    }
}

impl fmt::Display for PlayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.position)
    }
}

// ---------------------------------------------------------------------------
// Games
// ---------------------------------------------------------------------------

/// A game included in a slate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlateGame {
    #[serde(default, deserialize_with = "null_as_default")]
    pub slate_game_id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slate_id: SlateId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub game_id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub operator_game_id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub removed_by_operator: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub score_id: u64,
    #[serde(default)]
    pub game: Option<Game>,
}

/// Scheduling and betting details of a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    #[serde(default, deserialize_with = "null_as_default")]
    pub game_key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub season_type: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub season: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub week: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub away_team: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub home_team: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub channel: String,
    #[serde(default)]
    pub point_spread: Option<f64>,
    #[serde(default)]
    pub over_under: Option<f64>,
    #[serde(default)]
    pub stadium_id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub canceled: bool,
    #[serde(default)]
    pub forecast_temp_low: Option<f64>,
    #[serde(default)]
    pub forecast_temp_high: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub forecast_description: String,
    #[serde(default)]
    pub away_team_money_line: Option<i32>,
    #[serde(default)]
    pub home_team_money_line: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub day: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date_time: String,
    #[serde(default)]
    pub status: Option<GameStatus>,
    #[serde(default)]
    pub stadium_details: Option<Stadium>,
}

impl Game {
    /// "AWAY @ HOME" matchup label.
    pub fn matchup(&self) -> String {
        format!("{} @ {}", self.away_team, self.home_team)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Scheduled,
    InProgress,
    Final,
    Canceled,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stadium {
    #[serde(default, deserialize_with = "null_as_default")]
    pub stadium_id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub playing_surface: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
}

// ---------------------------------------------------------------------------
// Serde helpers
// ---------------------------------------------------------------------------

/// Deserialize `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize a nullable sequence entry by entry, dropping the entries that
/// do not parse as `T`.
fn skip_malformed<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let entries = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    let kind = std::any::type_name::<T>().rsplit("::").next().unwrap_or("entry");

    let mut parsed = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<T>(entry) {
            Ok(value) => parsed.push(value),
            Err(e) => {
                warn!("skipping malformed {} at index {}: {}", kind, idx, e);
            }
        }
    }
    Ok(parsed)
}

/// Salaries arrive as JSON numbers, sometimes written with a fraction
/// (`8100.0`). Negative, non-finite or oversized values are rejected.
fn salary<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(de::Error::custom(format!("salary out of range: {}", value)));
    }
    Ok(value.round() as u32)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
