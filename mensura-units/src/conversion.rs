//! Linear conversion through a single base unit
//!
//! Every unit of a kind converts to the base unit and back; there is no
//! pairwise conversion graph. `value_in_base = value_in_unit * factor`.

use crate::kind::{QuantityKind, QuantityType, UnitEnum};
use mensura_core::{Result, UnitsError};
use std::collections::BTreeMap;

/// Conversion of one unit relative to its kind's base unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRule {
    /// Multiplier taking a value in this unit to the base unit
    pub factor: f64,
}

impl ConversionRule {
    pub const BASE: ConversionRule = ConversionRule { factor: 1.0 };

    pub const fn linear(factor: f64) -> Self {
        ConversionRule { factor }
    }

    pub fn to_base(&self, value: f64) -> f64 {
        value * self.factor
    }

    pub fn from_base(&self, value: f64) -> f64 {
        value / self.factor
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    name: &'static str,
    rule: ConversionRule,
}

/// Conversion rules of one quantity kind, keyed by numeric unit value
#[derive(Debug)]
pub struct ConversionTable {
    quantity_type: QuantityType,
    base_unit: i32,
    entries: BTreeMap<i32, Entry>,
}

impl ConversionTable {
    /// Build a table from `(unit value, unit name, rule)` triples.
    ///
    /// Value 0 is reserved for the undefined unit and is skipped.
    pub fn new(
        quantity_type: QuantityType,
        base_unit: i32,
        rules: &[(i32, &'static str, ConversionRule)],
    ) -> Self {
        let entries: BTreeMap<i32, Entry> = rules
            .iter()
            .filter(|(value, _, _)| *value != 0)
            .map(|&(value, name, rule)| (value, Entry { name, rule }))
            .collect();

        debug_assert!(
            entries.get(&base_unit).map(|e| e.rule.factor) == Some(1.0),
            "base unit of {} must have factor 1",
            quantity_type
        );
        debug_assert!(
            entries.values().all(|e| e.rule.factor.is_finite() && e.rule.factor != 0.0),
            "conversion factors of {} must be finite and non-zero",
            quantity_type
        );

        ConversionTable {
            quantity_type,
            base_unit,
            entries,
        }
    }

    pub fn quantity_type(&self) -> QuantityType {
        self.quantity_type
    }

    pub fn base_unit(&self) -> i32 {
        self.base_unit
    }

    /// Numeric values of every unit, ascending
    pub fn units(&self) -> impl Iterator<Item = i32> + '_ {
        self.entries.keys().copied()
    }

    pub fn contains(&self, unit: i32) -> bool {
        self.entries.contains_key(&unit)
    }

    pub fn unit_name(&self, unit: i32) -> Option<&'static str> {
        self.entries.get(&unit).map(|e| e.name)
    }

    pub fn rule(&self, unit: i32) -> Result<ConversionRule> {
        self.entries
            .get(&unit)
            .map(|e| e.rule)
            .ok_or_else(|| self.unsupported(unit))
    }

    pub fn to_base(&self, unit: i32, value: f64) -> Result<f64> {
        Ok(self.rule(unit)?.to_base(value))
    }

    pub fn from_base(&self, unit: i32, value: f64) -> Result<f64> {
        Ok(self.rule(unit)?.from_base(value))
    }

    /// Convert `value` from one unit to another.
    ///
    /// Same-unit conversion returns `value` unchanged, without a round trip
    /// through the base unit.
    pub fn convert(&self, from: i32, to: i32, value: f64) -> Result<f64> {
        let from_rule = self.rule(from)?;
        if from == to {
            return Ok(value);
        }
        let to_rule = self.rule(to)?;
        Ok(to_rule.from_base(from_rule.to_base(value)))
    }

    fn unsupported(&self, unit: i32) -> UnitsError {
        let unit_name = match unit {
            0 => "Undefined".to_string(),
            other => format!("{} (numeric value {})", self.quantity_type.unit_type_name(), other),
        };
        UnitsError::unsupported_unit(self.quantity_type.name(), unit_name)
    }
}

/// Convert between two units of a kind
pub fn convert<K: QuantityKind>(from: K::Unit, to: K::Unit, value: f64) -> Result<f64> {
    K::conversion_table().convert(from.value(), to.value(), value)
}

/// Convert between two units identified only by kind tag and numeric value
pub fn convert_by_type(quantity_type: QuantityType, from: i32, to: i32, value: f64) -> Result<f64> {
    quantity_type.conversion_table().convert(from, to, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::{Length, LengthUnit, Mass, MassUnit, SpecificEntropy, SpecificEntropyUnit};

    const DELTA: f64 = 1e-5;

    fn approx(a: f64, b: f64, delta: f64) -> bool {
        (a - b).abs() <= delta
    }

    #[test]
    fn test_identity_is_exact() {
        let awkward = 0.1 + 0.2;
        for &unit in LengthUnit::ALL {
            assert_eq!(convert::<Length>(unit, unit, awkward).unwrap(), awkward);
        }
    }

    #[test]
    fn test_base_anchoring() {
        let table = Length::conversion_table();
        for &unit in LengthUnit::ALL {
            let k = table.rule(unit.value()).unwrap().factor;
            assert_eq!(convert::<Length>(unit, LengthUnit::Meter, 1.0).unwrap(), k);
            assert_eq!(convert::<Length>(LengthUnit::Meter, unit, 1.0).unwrap(), 1.0 / k);
        }
    }

    #[test]
    fn test_round_trip_all_pairs() {
        for &u in MassUnit::ALL {
            for &u2 in MassUnit::ALL {
                let v = 123.456;
                let there = convert::<Mass>(u2, u, v).unwrap();
                let back = convert::<Mass>(u, u2, there).unwrap();
                assert!((back - v).abs() <= 1e-9 * v.abs(), "{:?} <-> {:?}: {}", u, u2, back);
            }
        }
    }

    #[test]
    fn test_meter_conversions() {
        assert!(approx(convert::<Length>(LengthUnit::Meter, LengthUnit::Kilometer, 1.0).unwrap(), 1e-3, 1e-12));
        assert!(approx(convert::<Length>(LengthUnit::Meter, LengthUnit::Centimeter, 1.0).unwrap(), 1e2, 1e-9));
        assert!(approx(convert::<Length>(LengthUnit::Meter, LengthUnit::Mile, 1.0).unwrap(), 0.000621371, DELTA));
        assert!(approx(convert::<Length>(LengthUnit::Meter, LengthUnit::Yard, 1.0).unwrap(), 1.09361, DELTA));
        assert!(approx(convert::<Length>(LengthUnit::Meter, LengthUnit::Foot, 1.0).unwrap(), 3.28084, DELTA));
        assert!(approx(convert::<Length>(LengthUnit::Meter, LengthUnit::Inch, 1.0).unwrap(), 39.3701, 1e-4));
    }

    #[test]
    fn test_units_sharing_a_factor() {
        // Kelvin and degree-Celsius intervals are the same size
        let v = convert::<SpecificEntropy>(
            SpecificEntropyUnit::KilojoulePerKilogramKelvin,
            SpecificEntropyUnit::KilojoulePerKilogramDegreeCelsius,
            2.5,
        )
        .unwrap();
        assert!(approx(v, 2.5, 1e-12));
    }

    #[test]
    fn test_undefined_is_unsupported() {
        let err = convert::<Length>(LengthUnit::Undefined, LengthUnit::Meter, 1.0).unwrap_err();
        assert!(matches!(err, UnitsError::UnsupportedUnit { .. }));

        // Identity short-circuit does not bypass validation
        let err = convert::<Length>(LengthUnit::Undefined, LengthUnit::Undefined, 1.0).unwrap_err();
        assert!(matches!(err, UnitsError::UnsupportedUnit { .. }));

        let err = convert::<Length>(LengthUnit::Meter, LengthUnit::Undefined, 1.0).unwrap_err();
        assert!(matches!(err, UnitsError::UnsupportedUnit { .. }));
    }

    #[test]
    fn test_dynamic_conversion() {
        let m = LengthUnit::Meter.value();
        let km = LengthUnit::Kilometer.value();
        assert!(approx(convert_by_type(QuantityType::Length, m, km, 1.0).unwrap(), 1e-3, 1e-12));
        assert_eq!(convert_by_type(QuantityType::Length, m, m, 1.0).unwrap(), 1.0);

        let err = convert_by_type(QuantityType::Length, 4242, m, 1.0).unwrap_err();
        assert!(err.to_string().contains("4242"));
    }

    #[test]
    fn test_table_skips_reserved_value() {
        let table = ConversionTable::new(
            QuantityType::Length,
            1,
            &[(0, "Undefined", ConversionRule::BASE), (1, "Meter", ConversionRule::BASE)],
        );
        assert!(!table.contains(0));
        assert_eq!(table.units().collect::<Vec<_>>(), vec![1]);
        assert_eq!(table.unit_name(1), Some("Meter"));
    }
}
