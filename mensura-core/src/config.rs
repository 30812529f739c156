//! Process-wide configuration
//!
//! The default culture is read once from `MENSURA_CULTURE` and can be
//! replaced at runtime. Entry points that accept `Option<&Culture>`
//! resolve `None` through [`default_culture`].

use crate::Culture;
use std::env;
use std::sync::{LazyLock, PoisonError, RwLock};
use tracing::debug;

/// Environment variable holding the initial default culture
pub const CULTURE_ENV_VAR: &str = "MENSURA_CULTURE";

/// Default number of significant digits after the radix when formatting
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 2;

static DEFAULT_CULTURE: LazyLock<RwLock<Culture>> =
    LazyLock::new(|| RwLock::new(culture_from_setting(env::var(CULTURE_ENV_VAR).ok().as_deref())));

/// Initial default culture for a value of `MENSURA_CULTURE`; unset or blank
/// means the fallback culture
fn culture_from_setting(setting: Option<&str>) -> Culture {
    match setting.map(str::trim) {
        Some(name) if !name.is_empty() => {
            let culture = Culture::new(name);
            debug!(culture = %culture, "default culture taken from {}", CULTURE_ENV_VAR);
            culture
        }
        _ => Culture::fallback(),
    }
}

/// The culture used when a caller does not supply one
pub fn default_culture() -> Culture {
    DEFAULT_CULTURE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replace the process default culture
pub fn set_default_culture(culture: Culture) {
    debug!(culture = %culture, "default culture changed");
    *DEFAULT_CULTURE.write().unwrap_or_else(PoisonError::into_inner) = culture;
}

/// Resolve an optional culture to a concrete one
pub fn resolve_culture(culture: Option<&Culture>) -> Culture {
    culture.cloned().unwrap_or_else(default_culture)
}

/// Options controlling how quantities are rendered to text
#[derive(Debug, Clone, PartialEq)]
pub struct FormatOptions {
    pub culture: Option<Culture>,
    pub significant_digits: usize,
}

impl FormatOptions {
    pub fn new() -> Self {
        Self {
            culture: None,
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
        }
    }

    pub fn with_culture(mut self, culture: Culture) -> Self {
        self.culture = Some(culture);
        self
    }

    pub fn with_significant_digits(mut self, digits: usize) -> Self {
        self.significant_digits = digits;
        self
    }

    /// The configured culture, or the process default
    pub fn culture(&self) -> Culture {
        resolve_culture(self.culture.as_ref())
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_options_builder() {
        let opts = FormatOptions::new()
            .with_culture(Culture::new("ru-RU"))
            .with_significant_digits(4);
        assert_eq!(opts.significant_digits, 4);
        assert_eq!(opts.culture().name(), "ru-RU");
    }

    #[test]
    fn test_format_options_default() {
        let opts = FormatOptions::default();
        assert_eq!(opts.significant_digits, DEFAULT_SIGNIFICANT_DIGITS);
        assert!(opts.culture.is_none());
    }

    #[test]
    fn test_culture_from_setting() {
        assert_eq!(culture_from_setting(None), Culture::fallback());
        assert_eq!(culture_from_setting(Some("")), Culture::fallback());
        assert_eq!(culture_from_setting(Some("  \t")), Culture::fallback());
        assert_eq!(culture_from_setting(Some("ru-RU")).name(), "ru-RU");
        assert_eq!(culture_from_setting(Some(" nb-no ")).name(), "nb-NO");
    }

    #[test]
    fn test_set_default_culture() {
        let previous = default_culture();

        set_default_culture(Culture::new("ru-RU"));
        assert_eq!(default_culture().name(), "ru-RU");
        assert_eq!(resolve_culture(None).name(), "ru-RU");
        assert_eq!(FormatOptions::new().culture().name(), "ru-RU");

        set_default_culture(previous.clone());
        assert_eq!(default_culture(), previous);
    }

    #[test]
    fn test_resolve_explicit_culture() {
        let nb = Culture::new("nb-NO");
        assert_eq!(resolve_culture(Some(&nb)), nb);
    }
}
