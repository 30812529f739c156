//! Cultures (locales) and their numeral conventions
//!
//! A [`Culture`] is an opaque identifier such as `"en-US"` or `"ru-RU"`.
//! It partitions the abbreviation registry and supplies the
//! [`NumberFormat`] used when reading or writing numbers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Name of the culture consulted when a requested culture has no data
pub const FALLBACK_CULTURE: &str = "en-US";

/// Decimal and digit-group separators of a culture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub group_separator: char,
}

impl NumberFormat {
    /// `1,234.5`
    pub const INVARIANT: NumberFormat = NumberFormat {
        decimal_separator: '.',
        group_separator: ',',
    };

    pub const fn new(decimal_separator: char, group_separator: char) -> Self {
        NumberFormat {
            decimal_separator,
            group_separator,
        }
    }

    /// Built-in conventions for a normalized culture name.
    ///
    /// Unknown regions fall back to their language's convention, unknown
    /// languages to [`NumberFormat::INVARIANT`].
    pub fn for_culture(name: &str) -> NumberFormat {
        match name {
            "de-CH" => return NumberFormat::new('.', '\''),
            "en-ZA" => return NumberFormat::new(',', '\u{a0}'),
            _ => {}
        }

        let language = name.split('-').next().unwrap_or("");
        match language {
            "de" | "es" | "it" | "nl" | "pt" | "tr" | "id" | "da" => NumberFormat::new(',', '.'),
            "ru" | "nb" | "nn" | "no" | "sv" | "fi" | "pl" | "cs" | "uk" | "sk" => {
                NumberFormat::new(',', '\u{a0}')
            }
            "fr" => NumberFormat::new(',', '\u{202f}'),
            _ => NumberFormat::INVARIANT,
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::INVARIANT
    }
}

/// A named culture with its numeral conventions.
///
/// Equality and hashing consider only the name, so a culture carrying a
/// caller-customized [`NumberFormat`] still addresses the same registry
/// partition as the built-in one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Culture {
    name: String,
    number_format: NumberFormat,
}

impl Culture {
    /// Create a culture with the built-in numeral conventions for `name`.
    ///
    /// The name is normalized to `language-REGION` casing, so `"EN-us"`
    /// and `"en-US"` are the same culture.
    pub fn new(name: &str) -> Self {
        let name = normalize_name(name);
        let number_format = NumberFormat::for_culture(&name);
        Culture { name, number_format }
    }

    /// Create a culture with caller-supplied numeral conventions
    pub fn with_number_format(name: &str, number_format: NumberFormat) -> Self {
        Culture {
            name: normalize_name(name),
            number_format,
        }
    }

    /// The fallback culture (`en-US`)
    pub fn fallback() -> Self {
        Self::new(FALLBACK_CULTURE)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Language part of the name (`"nb"` for `"nb-NO"`)
    pub fn language(&self) -> &str {
        self.name.split('-').next().unwrap_or("")
    }

    pub fn number_format(&self) -> &NumberFormat {
        &self.number_format
    }

    pub fn is_fallback(&self) -> bool {
        self.name == FALLBACK_CULTURE
    }
}

impl PartialEq for Culture {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Culture {}

impl Hash for Culture {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Default for Culture {
    fn default() -> Self {
        Self::fallback()
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for Culture {
    fn from(name: &str) -> Self {
        Culture::new(name)
    }
}

fn normalize_name(name: &str) -> String {
    let name = name.trim().replace('_', "-");
    let mut parts = name.split('-');
    let mut normalized = parts.next().unwrap_or("").to_lowercase();
    for part in parts {
        normalized.push('-');
        // Two-letter regions are upper case, scripts (e.g. "Latn") title case
        if part.len() == 2 {
            normalized.push_str(&part.to_uppercase());
        } else {
            let mut chars = part.chars();
            if let Some(first) = chars.next() {
                normalized.extend(first.to_uppercase());
                normalized.push_str(&chars.as_str().to_lowercase());
            }
        }
    }
    normalized
}
