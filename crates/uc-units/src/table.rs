//! Static factor tables for the linear categories.
//!
//! Each entry reads "1 unit = factor base-units". Entry order is declaration
//! order and is what pickers display; keys are case-sensitive.

use uc_core::{Category, TemperatureUnit};

/// Ordered unit -> factor mapping for one linear category.
#[derive(Debug)]
pub struct UnitTable {
    category: Category,
    base_unit: &'static str,
    entries: &'static [(&'static str, f64)],
}

/// Length, base meter.
pub static LENGTH: UnitTable = UnitTable {
    category: Category::Length,
    base_unit: "m",
    entries: &[
        ("km", 1000.0),
        ("m", 1.0),
        ("cm", 0.01),
        ("mm", 0.001),
        ("in", 0.0254),
        ("ft", 0.3048),
        ("yd", 0.9144),
        ("mi", 1609.344),
    ],
};

/// Mass, base kilogram.
pub static MASS: UnitTable = UnitTable {
    category: Category::Mass,
    base_unit: "kg",
    entries: &[
        ("t (metric tonne)", 1000.0),
        ("kg", 1.0),
        ("g", 0.001),
        ("mg", 1e-6),
        ("lb", 0.453_592_37),
        ("oz", 0.028_349_523_125),
    ],
};

/// Volume, base liter. US customary units.
pub static VOLUME: UnitTable = UnitTable {
    category: Category::Volume,
    base_unit: "L",
    entries: &[
        ("L", 1.0),
        ("mL", 0.001),
        ("gal_us", 3.785_411_784),
        ("qt_us", 0.946_352_946),
        ("pt_us", 0.473_176_473),
        ("cup_us", 0.236_588_236_5),
        ("fl_oz_us", 0.029_573_529_562_5),
    ],
};

impl UnitTable {
    pub fn category(&self) -> Category {
        self.category
    }

    pub fn base_unit(&self) -> &'static str {
        self.base_unit
    }

    /// Factor to the base unit, or `None` for a unit outside this table.
    pub fn factor(&self, unit: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, factor)| *factor)
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.factor(unit).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Factor table for a linear category; temperature has none.
pub fn table_for(category: Category) -> Option<&'static UnitTable> {
    match category {
        Category::Length => Some(&LENGTH),
        Category::Mass => Some(&MASS),
        Category::Volume => Some(&VOLUME),
        Category::Temperature => None,
    }
}

/// Unit names for a category, in picker order.
pub fn units_for(category: Category) -> Vec<&'static str> {
    match table_for(category) {
        Some(table) => table.names().collect(),
        None => TemperatureUnit::NAMES.to_vec(),
    }
}

pub fn is_valid_unit(category: Category, unit: &str) -> bool {
    match table_for(category) {
        Some(table) => table.contains(unit),
        None => TemperatureUnit::from_name(unit).is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn linear_tables() -> [&'static UnitTable; 3] {
        [&LENGTH, &MASS, &VOLUME]
    }

    #[test]
    fn factors_are_positive_and_base_is_one() {
        for table in linear_tables() {
            for (name, factor) in table.iter() {
                assert!(factor > 0.0, "{name} has non-positive factor");
            }
            assert_eq!(table.factor(table.base_unit()), Some(1.0));
        }
    }

    #[test]
    fn keys_are_unique() {
        for table in linear_tables() {
            let unique: HashSet<_> = table.names().collect();
            assert_eq!(unique.len(), table.len());
        }
    }

    #[test]
    fn tables_match_their_category() {
        for category in Category::ALL {
            match table_for(category) {
                Some(table) => assert_eq!(table.category(), category),
                None => assert_eq!(category, Category::Temperature),
            }
        }
    }

    #[test]
    fn units_follow_declaration_order() {
        assert_eq!(
            units_for(Category::Length),
            vec!["km", "m", "cm", "mm", "in", "ft", "yd", "mi"]
        );
        assert_eq!(units_for(Category::Mass)[0], "t (metric tonne)");
        assert_eq!(units_for(Category::Volume).last(), Some(&"fl_oz_us"));
        assert_eq!(
            units_for(Category::Temperature),
            vec!["Celsius", "Fahrenheit", "Kelvin"]
        );
    }

    #[test]
    fn membership_is_case_sensitive() {
        assert!(is_valid_unit(Category::Volume, "mL"));
        assert!(!is_valid_unit(Category::Volume, "ml"));
        assert!(is_valid_unit(Category::Temperature, "Kelvin"));
        assert!(!is_valid_unit(Category::Temperature, "kelvin"));
        assert!(!is_valid_unit(Category::Length, "kg"));
    }
}
