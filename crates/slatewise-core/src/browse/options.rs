// Global filter options: every operator, game type and slate name present in
// the dataset, independent of the current selection.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::data::Slate;

/// Sorted, distinct values for each filter level across the whole dataset.
///
/// Built once from the unfiltered slates and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FilterOptions {
    operators: Vec<String>,
    game_types: Vec<String>,
    slate_names: Vec<String>,
}

impl FilterOptions {
    pub fn operators(&self) -> &[String] {
        &self.operators
    }

    pub fn game_types(&self) -> &[String] {
        &self.game_types
    }

    pub fn slate_names(&self) -> &[String] {
        &self.slate_names
    }
}

/// Collect the distinct operators, game types and slate names of `slates`.
///
/// Empty values are ignored. Each list is sorted ascending by ordinal
/// (byte-wise, case-sensitive) comparison.
pub fn extract_options(slates: &[Slate]) -> FilterOptions {
    let mut operators = BTreeSet::new();
    let mut game_types = BTreeSet::new();
    let mut slate_names = BTreeSet::new();

    for slate in slates {
        if !slate.operator.is_empty() {
            operators.insert(slate.operator.as_str());
        }
        if !slate.operator_game_type.is_empty() {
            game_types.insert(slate.operator_game_type.as_str());
        }
        if !slate.operator_name.is_empty() {
            slate_names.insert(slate.operator_name.as_str());
        }
    }

    FilterOptions {
        operators: to_sorted_vec(operators),
        game_types: to_sorted_vec(game_types),
        slate_names: to_sorted_vec(slate_names),
    }
}

/// Distinct non-empty values of `field` over `slates`, sorted ascending.
pub(crate) fn distinct_sorted<'a, I, F>(slates: I, field: F) -> Vec<String>
where
    I: IntoIterator<Item = &'a Slate>,
    F: Fn(&'a Slate) -> &'a str,
{
    let set: BTreeSet<&str> = slates
        .into_iter()
        .map(field)
        .filter(|v| !v.is_empty())
        .collect();
    to_sorted_vec(set)
}

fn to_sorted_vec(set: BTreeSet<&str>) -> Vec<String> {
    set.into_iter().map(str::to_string).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::slate;

    #[test]
    fn extracts_sorted_distinct_values() {
        let slates = vec![
            slate(1, "FanDuel", "Classic", "Main", vec![]),
            slate(2, "DraftKings", "Showdown", "Captain", vec![]),
            slate(3, "FanDuel", "Classic", "Turbo", vec![]),
            slate(4, "DraftKings", "Classic", "Main", vec![]),
        ];
        let options = extract_options(&slates);
        assert_eq!(options.operators(), ["DraftKings", "FanDuel"]);
        assert_eq!(options.game_types(), ["Classic", "Showdown"]);
        assert_eq!(options.slate_names(), ["Captain", "Main", "Turbo"]);
    }

    #[test]
    fn ignores_empty_values() {
        let slates = vec![
            slate(1, "", "Classic", "", vec![]),
            slate(2, "FanDuel", "", "Main", vec![]),
        ];
        let options = extract_options(&slates);
        assert_eq!(options.operators(), ["FanDuel"]);
        assert_eq!(options.game_types(), ["Classic"]);
        assert_eq!(options.slate_names(), ["Main"]);
    }

    #[test]
    fn ordering_is_case_sensitive_ordinal() {
        let slates = vec![
            slate(1, "superDraft", "Classic", "Main", vec![]),
            slate(2, "SuperDraft", "Classic", "Main", vec![]),
            slate(3, "Underdog", "Classic", "Main", vec![]),
        ];
        let options = extract_options(&slates);
        // Uppercase letters sort before lowercase ones.
        assert_eq!(options.operators(), ["SuperDraft", "Underdog", "superDraft"]);
    }

    #[test]
    fn empty_dataset_gives_empty_options() {
        assert_eq!(extract_options(&[]), FilterOptions::default());
    }
}
