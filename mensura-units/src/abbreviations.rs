//! Culture-partitioned abbreviation registry
//!
//! Maps `(culture, quantity type, unit value)` to an ordered list of
//! abbreviations and each abbreviation back to the unit values that use it.
//! Every query that finds nothing in the requested culture is retried once in
//! [`FALLBACK_CULTURE`]; there is no deeper chain.

use crate::kind::{QuantityType, UnitEnum};
use crate::lookup::UnitValueAbbreviationLookup;
use mensura_core::{Culture, FALLBACK_CULTURE};
use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard};
use tracing::{debug, trace, warn};

type CultureLookups = HashMap<QuantityType, UnitValueAbbreviationLookup>;

/// Process-wide registry, loaded with every built-in kind on first access
static GLOBAL: LazyLock<AbbreviationRegistry> = LazyLock::new(AbbreviationRegistry::with_defaults);

/// Abbreviation store shared by formatting and parsing.
///
/// Reads take a shared lock, registrations an exclusive one. A registration
/// that returns before a lookup starts is visible to that lookup.
#[derive(Debug, Default)]
pub struct AbbreviationRegistry {
    lookups: RwLock<HashMap<String, CultureLookups>>,
}

impl AbbreviationRegistry {
    /// Empty registry, no built-in abbreviations
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in abbreviations of every kind
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        registry.load_built_ins();
        registry
    }

    pub fn global() -> &'static AbbreviationRegistry {
        &GLOBAL
    }

    fn load_built_ins(&self) {
        let mut count = 0usize;
        for quantity_type in QuantityType::ALL {
            for localization in quantity_type.localizations() {
                for &(culture, abbreviations) in localization.entries {
                    self.register(quantity_type, localization.unit_value, &Culture::new(culture), abbreviations);
                    count += abbreviations.len();
                }
            }
        }
        debug!(count, "loaded built-in unit abbreviations");
    }

    /// Append abbreviations for a unit.
    ///
    /// Duplicates are kept: registering `"m"` twice for the same unit lists it
    /// twice in both directions.
    pub fn register(
        &self,
        quantity_type: QuantityType,
        unit_value: i32,
        culture: &Culture,
        abbreviations: &[&str],
    ) {
        let mut lookups = self.lookups.write().unwrap_or_else(PoisonError::into_inner);
        let lookup = lookups
            .entry(culture.name().to_string())
            .or_default()
            .entry(quantity_type)
            .or_default();
        for abbreviation in abbreviations {
            lookup.add(unit_value, abbreviation);
        }
        trace!(%quantity_type, unit_value, culture = culture.name(), ?abbreviations, "registered abbreviations");
    }

    /// Typed form of [`register`](Self::register)
    pub fn map_unit_to_abbreviation<U: UnitEnum>(&self, unit: U, culture: &Culture, abbreviations: &[&str]) {
        self.register(U::QUANTITY_TYPE, unit.value(), culture, abbreviations);
    }

    /// First registered abbreviation of a unit.
    ///
    /// Never fails: when neither the culture nor the fallback culture has an
    /// entry, a placeholder naming the unit type and value is returned.
    pub fn default_abbreviation(&self, quantity_type: QuantityType, unit_value: i32, culture: &Culture) -> String {
        match self.all_abbreviations(quantity_type, unit_value, culture).into_iter().next() {
            Some(abbreviation) => abbreviation,
            None => {
                warn!(%quantity_type, unit_value, culture = culture.name(), "no abbreviation registered");
                format!(
                    "(no abbreviation for {} with numeric value {})",
                    quantity_type.unit_type_name(),
                    unit_value
                )
            }
        }
    }

    /// Typed form of [`default_abbreviation`](Self::default_abbreviation)
    pub fn default_abbreviation_for<U: UnitEnum>(&self, unit: U, culture: &Culture) -> String {
        self.default_abbreviation(U::QUANTITY_TYPE, unit.value(), culture)
    }

    /// Every abbreviation of a unit, default first; empty when none exist
    pub fn all_abbreviations(&self, quantity_type: QuantityType, unit_value: i32, culture: &Culture) -> Vec<String> {
        self.resolve(quantity_type, culture, |lookup| lookup.abbreviations_for_unit(unit_value).to_vec())
    }

    /// Every abbreviation of every unit of a kind
    pub fn all_abbreviations_for_type(&self, quantity_type: QuantityType, culture: &Culture) -> Vec<String> {
        self.resolve(quantity_type, culture, UnitValueAbbreviationLookup::all_abbreviations)
    }

    /// Unit values registered under an exact abbreviation, in registration order
    pub fn units_for_abbreviation(&self, quantity_type: QuantityType, abbreviation: &str, culture: &Culture) -> Vec<i32> {
        self.resolve(quantity_type, culture, |lookup| lookup.units_for_abbreviation(abbreviation).to_vec())
    }

    /// Abbreviations known in the culture or the fallback culture,
    /// deduplicated and ordered longest first for greedy tokenizing
    pub(crate) fn parse_abbreviations(&self, quantity_type: QuantityType, culture: &Culture) -> Vec<String> {
        let lookups = self.read();
        let mut abbreviations: Vec<String> = [culture.name(), FALLBACK_CULTURE]
            .into_iter()
            .filter_map(|name| lookups.get(name).and_then(|kinds| kinds.get(&quantity_type)))
            .flat_map(UnitValueAbbreviationLookup::all_abbreviations)
            .collect();
        abbreviations.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then_with(|| a.cmp(b)));
        abbreviations.dedup();
        abbreviations
    }

    /// Run `query` in the culture, then once in the fallback culture if the
    /// first answer is empty
    fn resolve<T>(
        &self,
        quantity_type: QuantityType,
        culture: &Culture,
        query: impl Fn(&UnitValueAbbreviationLookup) -> Vec<T>,
    ) -> Vec<T> {
        let lookups = self.read();
        let in_culture = |name: &str| {
            lookups
                .get(name)
                .and_then(|kinds| kinds.get(&quantity_type))
                .map(&query)
                .unwrap_or_default()
        };

        let found = in_culture(culture.name());
        if !found.is_empty() || culture.is_fallback() {
            return found;
        }
        trace!(%quantity_type, culture = culture.name(), "falling back to {}", FALLBACK_CULTURE);
        in_culture(FALLBACK_CULTURE)
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, CultureLookups>> {
        self.lookups.read().unwrap_or_else(PoisonError::into_inner)
    }
}
