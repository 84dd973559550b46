// Cascading filter engine: owns the filter selection and every view derived
// from it.
//
// Derived views are recomputed in full after each mutation, before the
// mutating call returns, so readers never observe a selection paired with
// views computed from an older one.

use tracing::debug;

use super::options::{distinct_sorted, extract_options, FilterOptions};
use super::players::dedup_players;
use super::selection::{FilterSelection, PlayerGate};
use crate::data::{Dataset, Slate, SlatePlayer};

// ---------------------------------------------------------------------------
// Pure derivations
// ---------------------------------------------------------------------------

/// Whether `slate` satisfies every level set in `selection`. Unset levels
/// impose no constraint; set levels must match exactly.
pub fn slate_matches(slate: &Slate, selection: &FilterSelection) -> bool {
    selection.operator().map_or(true, |op| slate.operator == op)
        && selection
            .game_type()
            .map_or(true, |gt| slate.operator_game_type == gt)
        && selection
            .slate_name()
            .map_or(true, |sn| slate.operator_name == sn)
}

/// Slates matching `selection`, in dataset order.
pub fn filter_slates<'a>(slates: &'a [Slate], selection: &FilterSelection) -> Vec<&'a Slate> {
    slates
        .iter()
        .filter(|slate| slate_matches(slate, selection))
        .collect()
}

/// Game types offered by the selected operator. Empty without an operator.
pub fn available_game_types(slates: &[Slate], selection: &FilterSelection) -> Vec<String> {
    let Some(operator) = selection.operator() else {
        return Vec::new();
    };
    distinct_sorted(
        slates.iter().filter(|s| s.operator == operator),
        |s| s.operator_game_type.as_str(),
    )
}

/// Slate names under the selected operator and game type. Empty unless both
/// are set.
pub fn available_slate_names(slates: &[Slate], selection: &FilterSelection) -> Vec<String> {
    let (Some(operator), Some(game_type)) = (selection.operator(), selection.game_type()) else {
        return Vec::new();
    };
    distinct_sorted(
        slates
            .iter()
            .filter(|s| s.operator == operator && s.operator_game_type == game_type),
        |s| s.operator_name.as_str(),
    )
}

/// Deduplicated, name-sorted players of the matching slates, or nothing while
/// `gate` is closed.
pub fn available_players(
    slates: &[Slate],
    selection: &FilterSelection,
    gate: PlayerGate,
) -> Vec<SlatePlayer> {
    if !gate.is_open(selection) {
        return Vec::new();
    }
    dedup_players(filter_slates(slates, selection))
}

// ---------------------------------------------------------------------------
// FilterEngine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
struct DerivedViews {
    game_types: Vec<String>,
    slate_names: Vec<String>,
    /// Indices into the dataset's slates.
    filtered: Vec<usize>,
    players: Vec<SlatePlayer>,
}

/// Holds the filter selection over a read-only [`Dataset`] and keeps the
/// derived option lists and player list in step with it.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    dataset: Dataset,
    options: FilterOptions,
    gate: PlayerGate,
    selection: FilterSelection,
    derived: DerivedViews,
}

impl FilterEngine {
    pub fn new(dataset: Dataset, gate: PlayerGate) -> Self {
        let options = extract_options(dataset.slates());
        let mut engine = FilterEngine {
            dataset,
            options,
            gate,
            selection: FilterSelection::default(),
            derived: DerivedViews::default(),
        };
        engine.recompute();
        engine
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn filter_options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn gate(&self) -> PlayerGate {
        self.gate
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn available_game_types(&self) -> &[String] {
        &self.derived.game_types
    }

    pub fn available_slate_names(&self) -> &[String] {
        &self.derived.slate_names
    }

    pub fn filtered_slates(&self) -> Vec<&Slate> {
        let slates = self.dataset.slates();
        self.derived.filtered.iter().map(|&i| &slates[i]).collect()
    }

    pub fn available_players(&self) -> &[SlatePlayer] {
        &self.derived.players
    }

    /// Whether the current selection is enough to list players.
    pub fn players_visible(&self) -> bool {
        self.gate.is_open(&self.selection)
    }

    pub fn set_operator(&mut self, operator: &str) {
        self.selection.set_operator(operator);
        self.recompute();
    }

    pub fn set_game_type(&mut self, game_type: &str) {
        self.selection.set_game_type(game_type);
        self.recompute();
    }

    pub fn set_slate_name(&mut self, slate_name: &str) {
        self.selection.set_slate_name(slate_name);
        self.recompute();
    }

    pub fn clear_filters(&mut self) {
        self.selection.clear();
        self.recompute();
    }

    fn recompute(&mut self) {
        let slates = self.dataset.slates();
        let selection = &self.selection;

        self.derived = DerivedViews {
            game_types: available_game_types(slates, selection),
            slate_names: available_slate_names(slates, selection),
            filtered: slates
                .iter()
                .enumerate()
                .filter(|(_, slate)| slate_matches(slate, selection))
                .map(|(i, _)| i)
                .collect(),
            players: available_players(slates, selection, self.gate),
        };

        debug!(
            operator = ?selection.operator(),
            game_type = ?selection.game_type(),
            slate_name = ?selection.slate_name(),
            slates = self.derived.filtered.len(),
            players = self.derived.players.len(),
            "filters recomputed"
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
