//! Mensura Core - Fundamental types
//!
//! This crate provides the types shared by the Mensura crates:
//! - `UnitsError`: the error taxonomy for construction, conversion and parsing
//! - `Culture` / `NumberFormat`: locale identity and numeral conventions
//! - `config`: process default culture and formatting options

mod culture;
mod error;
pub mod config;

pub use culture::{Culture, NumberFormat, FALLBACK_CULTURE};
pub use error::{codes, ErrorReport, Result, UnitsError};
pub use config::FormatOptions;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Culture, FormatOptions, NumberFormat, Result, UnitsError};
    pub use crate::error::codes;
}
