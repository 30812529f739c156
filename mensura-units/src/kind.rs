//! Quantity kind descriptors
//!
//! A kind (length, mass, ...) is described by a zero-sized marker type
//! implementing [`QuantityKind`] and a unit enum implementing [`UnitEnum`].
//! Both are emitted by the `quantity_kind!` macro.
//! [`QuantityType`] is the closed tag that keys type-erased lookups
//! (abbreviation registry, dynamic conversion).

use crate::conversion::ConversionTable;
use crate::dimension::BaseDimensions;
use crate::kinds::{AmountOfSubstance, Area, Duration, Length, Mass, SpecificEntropy, Speed, Volume};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Closed set of built-in quantity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QuantityType {
    AmountOfSubstance,
    Area,
    Duration,
    Length,
    Mass,
    SpecificEntropy,
    Speed,
    Volume,
}

impl QuantityType {
    pub const ALL: [QuantityType; 8] = [
        QuantityType::AmountOfSubstance,
        QuantityType::Area,
        QuantityType::Duration,
        QuantityType::Length,
        QuantityType::Mass,
        QuantityType::SpecificEntropy,
        QuantityType::Speed,
        QuantityType::Volume,
    ];

    pub fn name(self) -> &'static str {
        match self {
            QuantityType::AmountOfSubstance => AmountOfSubstance::NAME,
            QuantityType::Area => Area::NAME,
            QuantityType::Duration => Duration::NAME,
            QuantityType::Length => Length::NAME,
            QuantityType::Mass => Mass::NAME,
            QuantityType::SpecificEntropy => SpecificEntropy::NAME,
            QuantityType::Speed => Speed::NAME,
            QuantityType::Volume => Volume::NAME,
        }
    }

    /// Name of the unit enum, e.g. `"LengthUnit"`
    pub fn unit_type_name(self) -> &'static str {
        match self {
            QuantityType::AmountOfSubstance => <<AmountOfSubstance as QuantityKind>::Unit as UnitEnum>::TYPE_NAME,
            QuantityType::Area => <<Area as QuantityKind>::Unit as UnitEnum>::TYPE_NAME,
            QuantityType::Duration => <<Duration as QuantityKind>::Unit as UnitEnum>::TYPE_NAME,
            QuantityType::Length => <<Length as QuantityKind>::Unit as UnitEnum>::TYPE_NAME,
            QuantityType::Mass => <<Mass as QuantityKind>::Unit as UnitEnum>::TYPE_NAME,
            QuantityType::SpecificEntropy => <<SpecificEntropy as QuantityKind>::Unit as UnitEnum>::TYPE_NAME,
            QuantityType::Speed => <<Speed as QuantityKind>::Unit as UnitEnum>::TYPE_NAME,
            QuantityType::Volume => <<Volume as QuantityKind>::Unit as UnitEnum>::TYPE_NAME,
        }
    }

    pub fn base_dimensions(self) -> BaseDimensions {
        match self {
            QuantityType::AmountOfSubstance => AmountOfSubstance::BASE_DIMENSIONS,
            QuantityType::Area => Area::BASE_DIMENSIONS,
            QuantityType::Duration => Duration::BASE_DIMENSIONS,
            QuantityType::Length => Length::BASE_DIMENSIONS,
            QuantityType::Mass => Mass::BASE_DIMENSIONS,
            QuantityType::SpecificEntropy => SpecificEntropy::BASE_DIMENSIONS,
            QuantityType::Speed => Speed::BASE_DIMENSIONS,
            QuantityType::Volume => Volume::BASE_DIMENSIONS,
        }
    }

    pub fn conversion_table(self) -> &'static ConversionTable {
        match self {
            QuantityType::AmountOfSubstance => AmountOfSubstance::conversion_table(),
            QuantityType::Area => Area::conversion_table(),
            QuantityType::Duration => Duration::conversion_table(),
            QuantityType::Length => Length::conversion_table(),
            QuantityType::Mass => Mass::conversion_table(),
            QuantityType::SpecificEntropy => SpecificEntropy::conversion_table(),
            QuantityType::Speed => Speed::conversion_table(),
            QuantityType::Volume => Volume::conversion_table(),
        }
    }

    /// Built-in abbreviations shipped with the kind
    pub fn localizations(self) -> &'static [UnitLocalization] {
        match self {
            QuantityType::AmountOfSubstance => AmountOfSubstance::localizations(),
            QuantityType::Area => Area::localizations(),
            QuantityType::Duration => Duration::localizations(),
            QuantityType::Length => Length::localizations(),
            QuantityType::Mass => Mass::localizations(),
            QuantityType::SpecificEntropy => SpecificEntropy::localizations(),
            QuantityType::Speed => Speed::localizations(),
            QuantityType::Volume => Volume::localizations(),
        }
    }

    /// Name of a unit given its numeric value, `None` if the kind has no such unit
    pub fn unit_name(self, unit_value: i32) -> Option<&'static str> {
        self.conversion_table().unit_name(unit_value)
    }
}

impl fmt::Display for QuantityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Unit identifiers of one kind.
///
/// Every unit enum reserves `UNDEFINED` (numeric value 0). It is a valid
/// value of the type but never a valid unit of a constructed quantity,
/// and it never appears in [`UnitEnum::ALL`].
pub trait UnitEnum:
    Copy + Eq + Hash + fmt::Debug + Default + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Name of the enum type, e.g. `"LengthUnit"`
    const TYPE_NAME: &'static str;
    const QUANTITY_TYPE: QuantityType;
    const UNDEFINED: Self;
    /// All valid units, `UNDEFINED` excluded
    const ALL: &'static [Self];

    fn value(self) -> i32;
    fn from_value(value: i32) -> Option<Self>;
    fn name(self) -> &'static str;

    fn is_undefined(self) -> bool {
        self == Self::UNDEFINED
    }
}

/// Descriptor of a quantity kind
pub trait QuantityKind: Copy + fmt::Debug + Send + Sync + 'static {
    type Unit: UnitEnum;

    const NAME: &'static str;
    const QUANTITY_TYPE: QuantityType;
    const BASE_UNIT: Self::Unit;
    const BASE_DIMENSIONS: BaseDimensions;

    /// Linear conversion rules for every unit, built once on first use
    fn conversion_table() -> &'static ConversionTable;

    fn localizations() -> &'static [UnitLocalization];
}

/// Built-in abbreviations of one unit, per culture
#[derive(Debug, Clone, Copy)]
pub struct UnitLocalization {
    pub unit_value: i32,
    /// `(culture name, abbreviations)`; the first abbreviation is the default
    pub entries: &'static [(&'static str, &'static [&'static str])],
}
