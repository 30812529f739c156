//! Quantity values
//!
//! [`Quantity<K>`] pairs a finite magnitude with a defined unit of kind `K`.
//! It is immutable: conversion and arithmetic return new values. Binary
//! operations convert the right operand into the left operand's unit, so
//! operand order decides the unit of the result but not its value.

use crate::abbreviations::AbbreviationRegistry;
use crate::comparison::{self, ComparisonType};
use crate::conversion::convert;
use crate::dimension::BaseDimensions;
use crate::format::{format_quantity, format_template};
use crate::kind::{QuantityKind, QuantityType, UnitEnum};
use crate::parse::{QuantityParser, UnitParser};
use mensura_core::config::resolve_culture;
use mensura_core::{Culture, FormatOptions, Result, UnitsError};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

/// A magnitude in a unit of kind `K`.
///
/// Invariants: the value is finite and the unit is not `Undefined`.
pub struct Quantity<K: QuantityKind> {
    value: f64,
    unit: K::Unit,
}

impl<K: QuantityKind> Quantity<K> {
    /// Create a quantity.
    ///
    /// Fails with `InvalidUnit` for the undefined unit and `NonFiniteValue`
    /// for NaN or infinite values.
    pub fn new(value: f64, unit: K::Unit) -> Result<Self> {
        if unit.is_undefined() {
            return Err(UnitsError::invalid_unit(K::NAME));
        }
        if !value.is_finite() {
            return Err(UnitsError::non_finite(value));
        }
        Ok(Quantity { value, unit })
    }

    /// Zero in the base unit
    pub fn zero() -> Self {
        Quantity { value: 0.0, unit: K::BASE_UNIT }
    }

    pub fn max_value() -> Self {
        Quantity { value: f64::MAX, unit: K::BASE_UNIT }
    }

    pub fn min_value() -> Self {
        Quantity { value: f64::MIN, unit: K::BASE_UNIT }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> K::Unit {
        self.unit
    }

    pub fn quantity_type(&self) -> QuantityType {
        K::QUANTITY_TYPE
    }

    pub fn dimensions(&self) -> BaseDimensions {
        K::BASE_DIMENSIONS
    }

    pub fn base_unit() -> K::Unit {
        K::BASE_UNIT
    }

    /// Every valid unit of the kind
    pub fn units() -> &'static [K::Unit] {
        <K::Unit as UnitEnum>::ALL
    }

    /// Value expressed in `unit`
    pub fn as_unit(&self, unit: K::Unit) -> Result<f64> {
        if unit == self.unit {
            return Ok(self.value);
        }
        convert::<K>(self.unit, unit, self.value)
    }

    /// Same quantity expressed in `unit`
    pub fn to_unit(&self, unit: K::Unit) -> Result<Self> {
        Quantity::new(self.as_unit(unit)?, unit)
    }

    /// `other`'s value in this quantity's unit.
    ///
    /// Both units are defined members of `K`, so the conversion has a rule.
    fn aligned(&self, other: &Self) -> f64 {
        match other.as_unit(self.unit) {
            Ok(value) => value,
            Err(e) => unreachable!("{} units always convert: {}", K::NAME, e),
        }
    }

    /// Value in the base unit, without the finiteness check of [`as_unit`](Self::as_unit)
    fn base_value(&self) -> f64 {
        match K::conversion_table().to_base(self.unit.value(), self.value) {
            Ok(value) => value,
            Err(e) => unreachable!("{} units always convert: {}", K::NAME, e),
        }
    }

    /// Order by value after converting `other` into this quantity's unit
    pub fn compare_to(&self, other: &Self) -> Ordering {
        let other_value = self.aligned(other);
        self.value
            .partial_cmp(&other_value)
            .unwrap_or_else(|| self.value.total_cmp(&other_value))
    }

    /// Compare within a tolerance, in this quantity's unit.
    ///
    /// A relative tolerance is a fraction of `self`'s value, so
    /// `a.equals(b, ..)` and `b.equals(a, ..)` can differ.
    pub fn equals(&self, other: &Self, tolerance: f64, comparison_type: ComparisonType) -> Result<bool> {
        comparison::equals(self.value, other.as_unit(self.unit)?, tolerance, comparison_type)
    }

    /// Whether two quantities, possibly of different kinds, share base dimensions
    pub fn has_same_dimensions<K2: QuantityKind>(&self, _other: &Quantity<K2>) -> bool {
        K::BASE_DIMENSIONS == K2::BASE_DIMENSIONS
    }

    pub fn checked_add(self, other: Self) -> Result<Self> {
        Quantity::new(self.value + other.as_unit(self.unit)?, self.unit)
    }

    pub fn checked_sub(self, other: Self) -> Result<Self> {
        Quantity::new(self.value - other.as_unit(self.unit)?, self.unit)
    }

    pub fn checked_mul(self, scalar: f64) -> Result<Self> {
        Quantity::new(self.value * scalar, self.unit)
    }

    pub fn checked_div(self, scalar: f64) -> Result<Self> {
        Quantity::new(self.value / scalar, self.unit)
    }

    /// Dimensionless ratio `self / other`, computed in the base unit
    pub fn checked_ratio(self, other: Self) -> Result<f64> {
        let ratio = self.as_unit(K::BASE_UNIT)? / other.as_unit(K::BASE_UNIT)?;
        if ratio.is_finite() {
            Ok(ratio)
        } else {
            Err(UnitsError::non_finite(ratio))
        }
    }

    /// Default abbreviation of `unit`. `None` uses the configured default culture.
    pub fn abbreviation(unit: K::Unit, culture: Option<&Culture>) -> String {
        AbbreviationRegistry::global().default_abbreviation_for(unit, &resolve_culture(culture))
    }

    /// Render in `unit` with `significant_digits` after the radix point
    pub fn to_string_in(&self, unit: K::Unit, culture: Option<&Culture>, significant_digits: usize) -> Result<String> {
        let culture = resolve_culture(culture);
        let value = self.as_unit(unit)?;
        let abbreviation = AbbreviationRegistry::global().default_abbreviation_for(unit, &culture);
        Ok(format_quantity(value, &abbreviation, significant_digits, culture.number_format()))
    }

    /// Render in this quantity's own unit
    pub fn to_string_with_options(&self, options: &FormatOptions) -> String {
        let culture = options.culture();
        let abbreviation = AbbreviationRegistry::global().default_abbreviation_for(self.unit, &culture);
        format_quantity(self.value, &abbreviation, options.significant_digits, culture.number_format())
    }

    /// Render in `unit` through a composite format string: `{0}` is the
    /// value, `{1}` the abbreviation, `{2}` onwards `args`
    pub fn to_string_with_format(
        &self,
        unit: K::Unit,
        culture: Option<&Culture>,
        template: &str,
        args: &[&dyn fmt::Display],
    ) -> Result<String> {
        let culture = resolve_culture(culture);
        let value = self.as_unit(unit)?;
        let abbreviation = AbbreviationRegistry::global().default_abbreviation_for(unit, &culture);
        format_template(template, value, &abbreviation, culture.number_format(), args)
    }

    /// Parse with the global registry. `None` uses the configured default culture.
    pub fn parse(text: &str, culture: Option<&Culture>) -> Result<Self> {
        QuantityParser::global().parse(text, culture)
    }

    pub fn try_parse(text: &str, culture: Option<&Culture>) -> Option<Self> {
        QuantityParser::global().try_parse(text, culture)
    }

    pub fn parse_unit(text: &str, culture: Option<&Culture>) -> Result<K::Unit> {
        UnitParser::global().parse(text, culture)
    }

    pub fn try_parse_unit(text: &str, culture: Option<&Culture>) -> Option<K::Unit> {
        UnitParser::global().try_parse(text, culture)
    }
}

impl<K: QuantityKind> Clone for Quantity<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: QuantityKind> Copy for Quantity<K> {}

impl<K: QuantityKind> fmt::Debug for Quantity<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(K::NAME)
            .field("value", &self.value)
            .field("unit", &self.unit)
            .finish()
    }
}

impl<K: QuantityKind> Default for Quantity<K> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Uses the configured default culture
impl<K: QuantityKind> fmt::Display for Quantity<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with_options(&FormatOptions::new()))
    }
}

impl<K: QuantityKind> FromStr for Quantity<K> {
    type Err = UnitsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, None)
    }
}

/// Both sides are compared in the base unit, so `a == b` iff `b == a`.
/// [`Quantity::compare_to`] compares in the left operand's unit instead.
impl<K: QuantityKind> PartialEq for Quantity<K> {
    fn eq(&self, other: &Self) -> bool {
        self.base_value() == other.base_value()
    }
}

impl<K: QuantityKind> PartialOrd for Quantity<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.base_value().partial_cmp(&other.base_value())
    }
}

/// Operator results must stay finite, like integer overflow
fn or_panic<T>(result: Result<T>, op: &str) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("quantity {} failed: {}", op, e),
    }
}

impl<K: QuantityKind> Add for Quantity<K> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        or_panic(self.checked_add(rhs), "addition")
    }
}

impl<K: QuantityKind> Sub for Quantity<K> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        or_panic(self.checked_sub(rhs), "subtraction")
    }
}

impl<K: QuantityKind> Neg for Quantity<K> {
    type Output = Self;

    fn neg(self) -> Self {
        Quantity { value: -self.value, unit: self.unit }
    }
}

impl<K: QuantityKind> Mul<f64> for Quantity<K> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        or_panic(self.checked_mul(rhs), "multiplication")
    }
}

impl<K: QuantityKind> Mul<Quantity<K>> for f64 {
    type Output = Quantity<K>;

    fn mul(self, rhs: Quantity<K>) -> Quantity<K> {
        rhs * self
    }
}

impl<K: QuantityKind> Div<f64> for Quantity<K> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        or_panic(self.checked_div(rhs), "division")
    }
}

impl<K: QuantityKind> Div for Quantity<K> {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        or_panic(self.checked_ratio(rhs), "division")
    }
}

impl<K: QuantityKind> Serialize for Quantity<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("unit", &self.unit)?;
        state.end()
    }
}

impl<'de, K: QuantityKind> Deserialize<'de> for Quantity<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw<U> {
            value: f64,
            unit: U,
        }

        let raw = Raw::<K::Unit>::deserialize(deserializer)?;
        Quantity::new(raw.value, raw.unit).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::{Length, LengthUnit, Mass, MassUnit, SpecificEntropy, SpecificEntropyUnit, Speed, Volume};

    fn m(value: f64) -> Quantity<Length> {
        Quantity::new(value, LengthUnit::Meter).unwrap()
    }

    fn cm(value: f64) -> Quantity<Length> {
        Quantity::new(value, LengthUnit::Centimeter).unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_construction_guards() {
        let err = Quantity::<Length>::new(1.0, LengthUnit::Undefined).unwrap_err();
        assert_eq!(err, UnitsError::invalid_unit("Length"));

        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = Quantity::<Length>::new(bad, LengthUnit::Meter).unwrap_err();
            assert!(matches!(err, UnitsError::NonFiniteValue { .. }));
        }
    }

    #[test]
    fn test_descriptors() {
        let q = m(1.0);
        assert_eq!(q.quantity_type(), QuantityType::Length);
        assert_eq!(q.dimensions(), BaseDimensions::LENGTH);
        assert_eq!(Quantity::<Length>::base_unit(), LengthUnit::Meter);
        assert_eq!(Quantity::<SpecificEntropy>::base_unit(), SpecificEntropyUnit::JoulePerKilogramKelvin);
        assert!(!Quantity::<Length>::units().contains(&LengthUnit::Undefined));
        assert!(!Quantity::<Mass>::units().contains(&MassUnit::Undefined));
        assert_eq!(Quantity::<Length>::default().value(), 0.0);
        assert_eq!(Quantity::<Length>::default().unit(), LengthUnit::Meter);
        assert_eq!(Quantity::<Mass>::max_value().value(), f64::MAX);
        assert_eq!(Quantity::<Mass>::min_value().value(), f64::MIN);
    }

    #[test]
    fn test_as_and_to_unit() {
        let q = m(1.5);
        assert_eq!(q.as_unit(LengthUnit::Meter).unwrap(), 1.5);
        assert!(approx(q.as_unit(LengthUnit::Centimeter).unwrap(), 150.0));

        let in_km = q.to_unit(LengthUnit::Kilometer).unwrap();
        assert_eq!(in_km.unit(), LengthUnit::Kilometer);
        assert!(approx(in_km.value(), 0.0015));

        assert!(matches!(
            q.as_unit(LengthUnit::Undefined),
            Err(UnitsError::UnsupportedUnit { .. })
        ));
        let huge = Quantity::<Length>::new(1e308, LengthUnit::Kilometer).unwrap();
        assert!(matches!(
            huge.to_unit(LengthUnit::Nanometer),
            Err(UnitsError::NonFiniteValue { .. })
        ));
    }

    #[test]
    fn test_compare_across_units() {
        assert_eq!(m(1.0).compare_to(&cm(100.0)), Ordering::Equal);
        assert_eq!(m(1.0).compare_to(&cm(99.0)), Ordering::Greater);
        assert_eq!(cm(99.0).compare_to(&m(1.0)), Ordering::Less);
        assert!(m(1.0) == cm(100.0));
        assert!(cm(50.0) < m(1.0));
        assert!(m(-0.0) == m(0.0));
    }

    #[test]
    fn test_operators_are_symmetric() {
        for i in 0..20_000 {
            let x = 0.37 * i as f64;
            let a = m(x / 100.0);
            let b = cm(x);
            assert_eq!(a == b, b == a, "{:?} vs {:?}", a, b);
            assert_eq!(a.partial_cmp(&b), b.partial_cmp(&a).map(Ordering::reverse), "{:?} vs {:?}", a, b);
        }
        assert!(Quantity::<Length>::max_value() > m(1.0));
        assert!(Quantity::<Length>::min_value() < m(1.0));
    }

    #[test]
    fn test_tolerance_equality() {
        let a = m(1.0);
        for tolerance in [0.0, 1e-12, 0.5, 100.0] {
            assert!(a.equals(&m(1.0), tolerance, ComparisonType::Absolute).unwrap());
            assert!(a.equals(&m(1.0), tolerance, ComparisonType::Relative).unwrap());
        }
        assert!(a.equals(&cm(101.0), 0.02, ComparisonType::Absolute).unwrap());
        assert!(!a.equals(&cm(103.0), 0.02, ComparisonType::Relative).unwrap());

        let err = a.equals(&m(1.0), -1e-3, ComparisonType::Absolute).unwrap_err();
        assert!(matches!(err, UnitsError::InvalidArgument { .. }));
    }

    #[test]
    fn test_arithmetic_keeps_left_unit() {
        let sum = m(1.0) + cm(50.0);
        assert_eq!(sum.unit(), LengthUnit::Meter);
        assert!(approx(sum.value(), 1.5));

        let sum = cm(50.0) + m(1.0);
        assert_eq!(sum.unit(), LengthUnit::Centimeter);
        assert!(approx(sum.value(), 150.0));

        let diff = m(1.0) - cm(25.0);
        assert!(approx(diff.value(), 0.75));

        assert_eq!((-m(2.0)).value(), -2.0);
        assert_eq!((m(2.0) * 3.0).value(), 6.0);
        assert_eq!((3.0 * m(2.0)).value(), 6.0);
        assert_eq!((m(3.0) / 2.0).value(), 1.5);
        assert!(approx(m(1.0) / cm(25.0), 4.0));
    }

    #[test]
    fn test_checked_arithmetic() {
        assert!(matches!(m(1.0).checked_div(0.0), Err(UnitsError::NonFiniteValue { .. })));
        assert!(matches!(
            Quantity::<Length>::max_value().checked_mul(10.0),
            Err(UnitsError::NonFiniteValue { .. })
        ));
        assert!(matches!(m(1.0).checked_ratio(m(0.0)), Err(UnitsError::NonFiniteValue { .. })));
        assert!(approx(m(3.0).checked_add(cm(10.0)).unwrap().value(), 3.1));
    }

    #[test]
    #[should_panic(expected = "quantity division failed")]
    fn test_operator_panics_on_non_finite() {
        let _ = m(1.0) / 0.0;
    }

    #[test]
    fn test_same_dimensions() {
        let length = m(1.0);
        let speed = Quantity::<Speed>::zero();
        let volume = Quantity::<Volume>::zero();
        assert!(length.has_same_dimensions(&cm(1.0)));
        assert!(!length.has_same_dimensions(&speed));
        assert!(!speed.has_same_dimensions(&volume));
    }

    #[test]
    fn test_formatting() {
        let en = Culture::new("en-US");
        let ru = Culture::new("ru-RU");
        let q = Quantity::<Length>::new(1234.5678, LengthUnit::Meter).unwrap();

        assert_eq!(q.to_string_in(LengthUnit::Meter, Some(&en), 2).unwrap(), "1,234.57 m");
        assert_eq!(q.to_string_in(LengthUnit::Kilometer, Some(&en), 3).unwrap(), "1.235 km");
        assert_eq!(q.to_string_in(LengthUnit::Meter, Some(&ru), 1).unwrap(), "1\u{a0}234,6 м");

        let options = FormatOptions::new().with_culture(en.clone()).with_significant_digits(0);
        assert_eq!(q.to_string_with_options(&options), "1,235 m");

        let text = q
            .to_string_with_format(LengthUnit::Kilometer, Some(&en), "{0:.1} {1} ({2})", &[&"approx"])
            .unwrap();
        assert_eq!(text, "1.2 km (approx)");

        assert_eq!(Quantity::<Length>::abbreviation(LengthUnit::Foot, Some(&en)), "ft");
        // No ru-RU entry for twip, so the en-US one is used
        assert_eq!(Quantity::<Length>::abbreviation(LengthUnit::Twip, Some(&ru)), "twip");
    }

    #[test]
    fn test_parse_forwards() {
        let en = Culture::new("en-US");
        let q = Quantity::<Length>::parse("2 km", Some(&en)).unwrap();
        assert_eq!(q, Quantity::new(2000.0, LengthUnit::Meter).unwrap());
        assert_eq!(Quantity::<Mass>::parse_unit("lbs", Some(&en)).unwrap(), MassUnit::Pound);
        assert!(Quantity::<Mass>::try_parse("two kg", Some(&en)).is_none());
        assert_eq!(Quantity::<Mass>::try_parse_unit("??", Some(&en)), None);
    }

    #[test]
    fn test_serde() {
        let q = Quantity::<Length>::new(1.5, LengthUnit::Kilometer).unwrap();
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, r#"{"value":1.5,"unit":"Kilometer"}"#);

        let back: Quantity<Length> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.unit(), LengthUnit::Kilometer);
        assert_eq!(back.value(), 1.5);

        let err = serde_json::from_str::<Quantity<Length>>(r#"{"value":1.0,"unit":"Undefined"}"#).unwrap_err();
        assert!(err.to_string().contains("undefined unit"));
    }
}
