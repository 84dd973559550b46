// Filter selection: the operator -> game type -> slate name hierarchy.

use serde::{Deserialize, Serialize};

/// The user's current filter choices.
///
/// The levels form a strict hierarchy: changing a level clears every level
/// below it. An empty string passed to a setter unsets that level.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FilterSelection {
    operator: Option<String>,
    game_type: Option<String>,
    slate_name: Option<String>,
}

impl FilterSelection {
    pub fn operator(&self) -> Option<&str> {
        self.operator.as_deref()
    }

    pub fn game_type(&self) -> Option<&str> {
        self.game_type.as_deref()
    }

    pub fn slate_name(&self) -> Option<&str> {
        self.slate_name.as_deref()
    }

    /// Set the operator and clear game type and slate name.
    pub fn set_operator(&mut self, operator: &str) {
        self.operator = non_empty(operator);
        self.game_type = None;
        self.slate_name = None;
    }

    /// Set the game type and clear the slate name.
    pub fn set_game_type(&mut self, game_type: &str) {
        self.game_type = non_empty(game_type);
        self.slate_name = None;
    }

    /// Set the slate name; nothing else changes.
    pub fn set_slate_name(&mut self, slate_name: &str) {
        self.slate_name = non_empty(slate_name);
    }

    pub fn clear(&mut self) {
        *self = FilterSelection::default();
    }

    pub fn is_empty(&self) -> bool {
        self.operator.is_none() && self.game_type.is_none() && self.slate_name.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.operator.is_some() && self.game_type.is_some() && self.slate_name.is_some()
    }
}

/// Which filter levels must be set before any players are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerGate {
    /// A game type alone opens the list, even with no operator chosen.
    #[default]
    GameType,
    /// Operator, game type and slate name must all be chosen.
    FullSelection,
}

impl PlayerGate {
    pub fn is_open(self, selection: &FilterSelection) -> bool {
        match self {
            PlayerGate::GameType => selection.game_type().is_some(),
            PlayerGate::FullSelection => selection.is_complete(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
