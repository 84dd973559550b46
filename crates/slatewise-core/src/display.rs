// Presentation-ready views of players: table rows and the detail card.

use serde::Serialize;

use crate::data::{SlatePlayer, SlatePlayerId};

/// Placeholder shown in the detail card when no player is selected.
pub const NO_SELECTION_TEXT: &str = "Select a player from the table to view details";

/// One row of the player table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRow {
    pub id: SlatePlayerId,
    pub name: String,
    /// Team abbreviation, "N/A" when unknown.
    pub team: String,
    pub position: String,
    /// Salary formatted as dollars with thousands separators, e.g. "$8,200".
    pub salary: String,
    /// Projected fantasy points, 0 when no projection exists.
    pub points: f64,
    pub projected_ownership: Option<f64>,
    pub points_per_dollar: Option<f64>,
}

impl From<&SlatePlayer> for PlayerRow {
    fn from(player: &SlatePlayer) -> Self {
        PlayerRow {
            id: player.slate_player_id,
            name: player.operator_player_name.clone(),
            team: player.team.clone().unwrap_or_else(|| "N/A".to_string()),
            position: player.operator_position.clone(),
            salary: format_salary(player.operator_salary),
            points: player.fantasy_points.unwrap_or(0.0),
            projected_ownership: player.projected_ownership,
            points_per_dollar: player.fantasy_points_per_dollar,
        }
    }
}

/// Contents of the selected-player card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PlayerCard {
    Empty,
    Player {
        name: String,
        team: String,
        position: String,
        salary: String,
        points: f64,
        projected_ownership: Option<f64>,
    },
}

impl PlayerCard {
    pub fn for_selection(player: Option<&SlatePlayer>) -> Self {
        let Some(player) = player else {
            return PlayerCard::Empty;
        };
        let row = PlayerRow::from(player);
        PlayerCard::Player {
            name: row.name,
            team: row.team,
            position: row.position,
            salary: row.salary,
            points: row.points,
            projected_ownership: row.projected_ownership,
        }
    }
}

/// Format a salary as whole dollars with comma thousands separators.
pub fn format_salary(salary: u32) -> String {
    let digits = salary.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format projected points the way the table shows them: whole numbers
/// without decimals, everything else to one decimal place.
pub fn format_points(points: f64) -> String {
    if points.fract() == 0.0 {
        format!("{points:.0}")
    } else {
        format!("{points:.1}")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
