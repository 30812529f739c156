//! Parsing of unit abbreviations and quantity strings
//!
//! A quantity string is one or more `<number>[whitespace]<abbreviation>`
//! segments, e.g. `"5.5 m"` or `"1 ft 2 in"`. Numbers follow the culture's
//! [`NumberFormat`]. Abbreviations resolve through the
//! [`AbbreviationRegistry`] with its fallback culture. Segments are summed
//! into the unit of the first one.

use crate::abbreviations::AbbreviationRegistry;
use crate::kind::{QuantityKind, UnitEnum};
use crate::quantity::Quantity;
use mensura_core::config::resolve_culture;
use mensura_core::{Culture, NumberFormat, Result, UnitsError};
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::{OnceLock, PoisonError, RwLock};
use tracing::debug;

/// Compiled number patterns, keyed by separator pair
static NUMBER_PATTERNS: OnceLock<RwLock<HashMap<(char, char), Regex>>> = OnceLock::new();

fn number_patterns() -> &'static RwLock<HashMap<(char, char), Regex>> {
    NUMBER_PATTERNS.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Leading-number pattern for a culture, compiled once per separator pair
fn number_pattern(number_format: &NumberFormat) -> Result<Regex> {
    let key = (number_format.decimal_separator, number_format.group_separator);
    let cache = number_patterns();

    if let Some(re) = cache.read().unwrap_or_else(PoisonError::into_inner).get(&key) {
        return Ok(re.clone());
    }

    let decimal = regex::escape(&number_format.decimal_separator.to_string());
    let group = regex::escape(&number_format.group_separator.to_string());
    let pattern = format!(
        r"^[+-]?(?:[0-9]+(?:{group}[0-9]{{3}})*(?:{decimal}[0-9]*)?|{decimal}[0-9]+)(?:[eE][+-]?[0-9]+)?"
    );
    let re = Regex::new(&pattern).map_err(|e| UnitsError::format_error(pattern.as_str(), e.to_string()))?;

    cache
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(key, re.clone());
    Ok(re)
}

fn parse_number(raw: &str, number_format: &NumberFormat) -> Option<f64> {
    let normalized: String = raw
        .chars()
        .filter(|&c| c != number_format.group_separator)
        .map(|c| if c == number_format.decimal_separator { '.' } else { c })
        .collect();
    normalized.parse::<f64>().ok()
}

/// Reject empty input as null and blank input as malformed
fn require_text(text: &str) -> Result<&str> {
    if text.is_empty() {
        return Err(UnitsError::argument_null("text"));
    }
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(UnitsError::format_error(text, "input is blank"));
    }
    Ok(trimmed)
}

/// Resolve one abbreviation to exactly one unit of `U`
fn resolve_unit<U: UnitEnum>(registry: &AbbreviationRegistry, abbreviation: &str, culture: &Culture) -> Result<U> {
    let mut seen = HashSet::new();
    let units: Vec<U> = registry
        .units_for_abbreviation(U::QUANTITY_TYPE, abbreviation, culture)
        .into_iter()
        .filter(|value| seen.insert(*value))
        .filter_map(U::from_value)
        .filter(|unit| !unit.is_undefined())
        .collect();

    match units.as_slice() {
        [] => Err(UnitsError::unrecognized_unit(
            U::QUANTITY_TYPE.name(),
            abbreviation,
            culture.name(),
        )),
        [unit] => Ok(*unit),
        many => Err(UnitsError::AmbiguousUnit {
            quantity: U::QUANTITY_TYPE.name().to_string(),
            abbreviation: abbreviation.to_string(),
            candidates: many.iter().map(|u| u.name().to_string()).collect(),
            values: many.iter().map(|u| u.value()).collect(),
        }),
    }
}

/// Parses unit abbreviations such as `"km"` into unit enum values
#[derive(Debug, Clone, Copy)]
pub struct UnitParser<'a> {
    registry: &'a AbbreviationRegistry,
}

impl<'a> UnitParser<'a> {
    pub fn new(registry: &'a AbbreviationRegistry) -> Self {
        UnitParser { registry }
    }

    /// Parse an abbreviation. `None` uses the configured default culture.
    pub fn parse<U: UnitEnum>(&self, text: &str, culture: Option<&Culture>) -> Result<U> {
        let abbreviation = require_text(text)?;
        let culture = resolve_culture(culture);
        resolve_unit(self.registry, abbreviation, &culture)
    }

    /// Like [`parse`](Self::parse); on failure the caller's default is
    /// `U::default()`, the undefined unit
    pub fn try_parse<U: UnitEnum>(&self, text: &str, culture: Option<&Culture>) -> Option<U> {
        self.parse(text, culture).ok()
    }
}

impl UnitParser<'static> {
    /// Parser backed by the global registry
    pub fn global() -> Self {
        UnitParser::new(AbbreviationRegistry::global())
    }
}

/// Parses quantity strings such as `"1 m 20 cm"`
#[derive(Debug, Clone, Copy)]
pub struct QuantityParser<'a> {
    registry: &'a AbbreviationRegistry,
}

impl<'a> QuantityParser<'a> {
    pub fn new(registry: &'a AbbreviationRegistry) -> Self {
        QuantityParser { registry }
    }

    /// Parse a quantity. `None` uses the configured default culture.
    ///
    /// Fails with `ArgumentNull` for empty input, `FormatError` for blank or
    /// malformed input, `UnrecognizedUnit`/`AmbiguousUnit` when an
    /// abbreviation resolves to zero or several units.
    pub fn parse<K: QuantityKind>(&self, text: &str, culture: Option<&Culture>) -> Result<Quantity<K>> {
        let trimmed = require_text(text)?;
        let culture = resolve_culture(culture);

        let result = self.parse_segments::<K>(text, trimmed, &culture);
        if let Err(ref e) = result {
            debug!(quantity = K::NAME, input = text, culture = culture.name(), error = %e, "quantity parse failed");
        }
        result
    }

    /// Like [`parse`](Self::parse); on failure the caller's default is
    /// `Quantity::<K>::default()`, zero in the base unit
    pub fn try_parse<K: QuantityKind>(&self, text: &str, culture: Option<&Culture>) -> Option<Quantity<K>> {
        self.parse(text, culture).ok()
    }

    fn parse_segments<K: QuantityKind>(&self, text: &str, trimmed: &str, culture: &Culture) -> Result<Quantity<K>> {
        let number_format = culture.number_format();
        let number_re = number_pattern(number_format)?;
        let abbreviations = self.registry.parse_abbreviations(K::QUANTITY_TYPE, culture);

        let mut rest = trimmed;
        let mut total: Option<Quantity<K>> = None;

        while !rest.is_empty() {
            let number = number_re
                .find(rest)
                .ok_or_else(|| UnitsError::format_error(text, format!("expected a number at '{}'", rest)))?;
            let value = parse_number(number.as_str(), number_format)
                .ok_or_else(|| UnitsError::format_error(text, format!("invalid number '{}'", number.as_str())))?;
            rest = rest[number.end()..].trim_start();

            if rest.starts_with([number_format.decimal_separator, number_format.group_separator]) {
                return Err(UnitsError::format_error(text, format!("misplaced separator at '{}'", rest)));
            }

            let abbreviation = take_abbreviation(rest, &abbreviations, number_format);
            if abbreviation.is_empty() {
                return Err(UnitsError::format_error(text, format!("missing unit after '{}'", number.as_str())));
            }
            rest = rest[abbreviation.len()..].trim_start();

            let unit = resolve_unit::<K::Unit>(self.registry, abbreviation, culture)?;
            let segment = Quantity::<K>::new(value, unit)?;
            total = Some(match total {
                None => segment,
                Some(sum) => sum.checked_add(segment)?,
            });
        }

        total.ok_or_else(|| UnitsError::format_error(text, "no quantity found"))
    }
}

impl QuantityParser<'static> {
    /// Parser backed by the global registry
    pub fn global() -> Self {
        QuantityParser::new(AbbreviationRegistry::global())
    }
}

/// Longest registered abbreviation at the start of `rest` that ends at a
/// segment boundary; otherwise the run of characters up to the next
/// whitespace or digit
fn take_abbreviation<'t>(rest: &'t str, abbreviations: &[String], number_format: &NumberFormat) -> &'t str {
    let at_boundary = |tail: &str| match tail.chars().next() {
        None => true,
        Some(c) => {
            c.is_whitespace() || c.is_ascii_digit() || c == '+' || c == '-' || c == number_format.decimal_separator
        }
    };

    if let Some(known) = abbreviations
        .iter()
        .find(|abbreviation| rest.starts_with(abbreviation.as_str()) && at_boundary(&rest[abbreviation.len()..]))
    {
        return &rest[..known.len()];
    }

    let end = rest
        .char_indices()
        .find(|&(_, c)| c.is_whitespace() || c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(rest.len());
    &rest[..end]
}
