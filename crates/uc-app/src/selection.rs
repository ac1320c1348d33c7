//! Per-category memory of the last used (from, to) unit pair.

use std::collections::HashMap;

use serde::Serialize;
use uc_core::Category;
use uc_units::is_valid_unit;

/// A (from, to) unit pair for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionPair {
    pub from: String,
    pub to: String,
}

impl SelectionPair {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn swapped(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }
}

/// Documented starting pair for each category.
pub fn default_pair(category: Category) -> SelectionPair {
    match category {
        Category::Length => SelectionPair::new("m", "ft"),
        Category::Mass => SelectionPair::new("kg", "lb"),
        Category::Volume => SelectionPair::new("L", "gal_us"),
        Category::Temperature => SelectionPair::new("Celsius", "Fahrenheit"),
    }
}

/// Session-scoped unit selections, one pair per category.
///
/// Categories that were never touched report their default pair.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    pairs: HashMap<Category, SelectionPair>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> SelectionPair {
        self.pairs
            .get(&category)
            .cloned()
            .unwrap_or_else(|| default_pair(category))
    }

    /// Reset any member that is not a unit of `category` to that slot's default.
    ///
    /// Returns true if something was repaired. Must run whenever the active
    /// category changes, before pickers are shown.
    pub fn validate(&mut self, category: Category) -> bool {
        let Some(pair) = self.pairs.get_mut(&category) else {
            return false;
        };

        let default = default_pair(category);
        let mut repaired = false;
        if !is_valid_unit(category, &pair.from) {
            pair.from = default.from;
            repaired = true;
        }
        if !is_valid_unit(category, &pair.to) {
            pair.to = default.to;
            repaired = true;
        }

        if repaired {
            tracing::warn!(
                %category,
                from = %pair.from,
                to = %pair.to,
                "stale unit selection reset to defaults"
            );
        }
        repaired
    }

    pub fn swap(&mut self, category: Category) {
        let swapped = self.get(category).swapped();
        self.pairs.insert(category, swapped);
    }

    /// Persist the picker choices for a category.
    ///
    /// Stores what it is given; [`SelectionState::validate`] is the repair point.
    pub fn set(&mut self, category: Category, from: &str, to: &str) {
        self.pairs.insert(category, SelectionPair::new(from, to));
    }

    pub fn set_from(&mut self, category: Category, from: &str) {
        let mut pair = self.get(category);
        pair.from = from.to_string();
        self.pairs.insert(category, pair);
    }

    pub fn set_to(&mut self, category: Category, to: &str) {
        let mut pair = self.get(category);
        pair.to = to.to_string();
        self.pairs.insert(category, pair);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uc_units::units_for;

    #[test]
    fn defaults_belong_to_their_category() {
        for category in Category::ALL {
            let pair = default_pair(category);
            let units = units_for(category);
            assert!(units.contains(&pair.from.as_str()));
            assert!(units.contains(&pair.to.as_str()));
        }
    }

    #[test]
    fn get_returns_default_until_set() {
        let mut state = SelectionState::new();
        assert_eq!(state.get(Category::Mass), SelectionPair::new("kg", "lb"));

        state.set(Category::Mass, "g", "oz");
        assert_eq!(state.get(Category::Mass), SelectionPair::new("g", "oz"));
        // other categories unaffected
        assert_eq!(state.get(Category::Length), default_pair(Category::Length));
    }

    #[test]
    fn validate_resets_pair_from_another_category() {
        let mut state = SelectionState::new();
        state.set(Category::Temperature, "km", "mi");

        assert!(state.validate(Category::Temperature));
        assert_eq!(
            state.get(Category::Temperature),
            SelectionPair::new("Celsius", "Fahrenheit")
        );
    }

    #[test]
    fn validate_repairs_only_the_bad_slot() {
        let mut state = SelectionState::new();
        state.set(Category::Volume, "cup_us", "kg");

        assert!(state.validate(Category::Volume));
        assert_eq!(
            state.get(Category::Volume),
            SelectionPair::new("cup_us", "gal_us")
        );
    }

    #[test]
    fn validate_leaves_good_pairs_alone() {
        let mut state = SelectionState::new();
        assert!(!state.validate(Category::Length));

        state.set(Category::Length, "mi", "km");
        assert!(!state.validate(Category::Length));
        assert_eq!(state.get(Category::Length), SelectionPair::new("mi", "km"));
    }

    #[test]
    fn swap_exchanges_and_double_swap_restores() {
        let mut state = SelectionState::new();
        state.set(Category::Length, "in", "cm");

        state.swap(Category::Length);
        assert_eq!(state.get(Category::Length), SelectionPair::new("cm", "in"));

        state.swap(Category::Length);
        assert_eq!(state.get(Category::Length), SelectionPair::new("in", "cm"));
    }

    #[test]
    fn swap_works_on_untouched_category() {
        let mut state = SelectionState::new();
        state.swap(Category::Temperature);
        assert_eq!(
            state.get(Category::Temperature),
            SelectionPair::new("Fahrenheit", "Celsius")
        );
    }

    #[test]
    fn single_slot_edits() {
        let mut state = SelectionState::new();
        state.set_from(Category::Mass, "mg");
        assert_eq!(state.get(Category::Mass), SelectionPair::new("mg", "lb"));
        state.set_to(Category::Mass, "t (metric tonne)");
        assert_eq!(
            state.get(Category::Mass),
            SelectionPair::new("mg", "t (metric tonne)")
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use uc_units::units_for;

    fn category() -> impl Strategy<Value = Category> {
        prop::sample::select(Category::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn double_swap_is_identity(cat in category(), i in 0usize..8, j in 0usize..8) {
            let units = units_for(cat);
            let from = units[i % units.len()];
            let to = units[j % units.len()];

            let mut state = SelectionState::new();
            state.set(cat, from, to);
            state.swap(cat);
            prop_assert_eq!(state.get(cat), SelectionPair::new(to, from));
            state.swap(cat);
            prop_assert_eq!(state.get(cat), SelectionPair::new(from, to));
        }

        #[test]
        fn validated_pairs_are_members(cat in category(), other in category(), i in 0usize..8, j in 0usize..8) {
            let foreign = units_for(other);
            let mut state = SelectionState::new();
            state.set(cat, foreign[i % foreign.len()], foreign[j % foreign.len()]);
            state.validate(cat);

            let pair = state.get(cat);
            prop_assert!(is_valid_unit(cat, &pair.from));
            prop_assert!(is_valid_unit(cat, &pair.to));
        }
    }
}
