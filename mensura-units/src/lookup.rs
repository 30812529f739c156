//! Two-way abbreviation index for one (culture, quantity kind) pair

use std::collections::{BTreeMap, HashMap};

/// Maps unit values to abbreviations and abbreviations back to unit values.
///
/// Insertion order is kept on both sides: the first abbreviation added for a
/// unit is its default. `add` does not deduplicate, so registering the same
/// pair twice yields two entries.
#[derive(Debug, Clone, Default)]
pub struct UnitValueAbbreviationLookup {
    unit_to_abbreviations: BTreeMap<i32, Vec<String>>,
    abbreviation_to_units: HashMap<String, Vec<i32>>,
}

impl UnitValueAbbreviationLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, unit_value: i32, abbreviation: &str) {
        self.unit_to_abbreviations
            .entry(unit_value)
            .or_default()
            .push(abbreviation.to_string());
        self.abbreviation_to_units
            .entry(abbreviation.to_string())
            .or_default()
            .push(unit_value);
    }

    /// Abbreviations of a unit in registration order; empty if none
    pub fn abbreviations_for_unit(&self, unit_value: i32) -> &[String] {
        self.unit_to_abbreviations
            .get(&unit_value)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Units registered under an exact (case-sensitive) abbreviation
    pub fn units_for_abbreviation(&self, abbreviation: &str) -> &[i32] {
        self.abbreviation_to_units
            .get(abbreviation)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every abbreviation of every unit, units ascending
    pub fn all_abbreviations(&self) -> Vec<String> {
        self.unit_to_abbreviations.values().flatten().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.unit_to_abbreviations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_added_is_default() {
        let mut lookup = UnitValueAbbreviationLookup::new();
        lookup.add(1, "cm");
        lookup.add(1, "centimeter");
        assert_eq!(lookup.abbreviations_for_unit(1), ["cm", "centimeter"]);
        assert_eq!(lookup.units_for_abbreviation("cm"), [1]);
    }

    #[test]
    fn test_add_is_not_idempotent() {
        let mut lookup = UnitValueAbbreviationLookup::new();
        lookup.add(3, "x");
        lookup.add(3, "x");
        assert_eq!(lookup.abbreviations_for_unit(3).len(), 2);
        assert_eq!(lookup.units_for_abbreviation("x"), [3, 3]);
    }

    #[test]
    fn test_shared_abbreviation() {
        let mut lookup = UnitValueAbbreviationLookup::new();
        lookup.add(5, "pt");
        lookup.add(21, "pt");
        assert_eq!(lookup.units_for_abbreviation("pt"), [5, 21]);
        assert!(lookup.units_for_abbreviation("PT").is_empty());
    }

    #[test]
    fn test_missing_entries_are_empty() {
        let lookup = UnitValueAbbreviationLookup::new();
        assert!(lookup.is_empty());
        assert!(lookup.abbreviations_for_unit(7).is_empty());
        assert!(lookup.all_abbreviations().is_empty());
    }
}
