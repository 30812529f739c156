//! Mensura Units - Quantities, conversion and localized parsing
//!
//! Each quantity kind (length, mass, ...) converts every unit through one
//! base unit, carries a constant base-dimension vector, and ships built-in
//! abbreviations per culture.
//!
//! ```ignore
//! use mensura_units::prelude::*;
//!
//! let q: Quantity<Length> = "1 m 20 cm".parse()?;
//! let centimeters = q.as_unit(LengthUnit::Centimeter)?;
//! println!("{}", q.to_unit(LengthUnit::Foot)?);
//! ```

#[macro_use]
mod macros;

pub mod abbreviations;
pub mod comparison;
pub mod conversion;
pub mod dimension;
pub mod format;
pub mod kind;
pub mod kinds;
pub mod lookup;
pub mod parse;
pub mod quantity;

pub use abbreviations::AbbreviationRegistry;
pub use comparison::ComparisonType;
pub use conversion::{convert, convert_by_type, ConversionRule, ConversionTable};
pub use dimension::BaseDimensions;
pub use kind::{QuantityKind, QuantityType, UnitEnum, UnitLocalization};
pub use kinds::*;
pub use lookup::UnitValueAbbreviationLookup;
pub use parse::{QuantityParser, UnitParser};
pub use quantity::Quantity;

pub use mensura_core::{Culture, FormatOptions, NumberFormat, Result, UnitsError};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::kinds::*;
    pub use crate::{
        AbbreviationRegistry, BaseDimensions, ComparisonType, Quantity, QuantityKind, QuantityParser,
        QuantityType, UnitEnum, UnitParser,
    };
    pub use mensura_core::prelude::*;
}
