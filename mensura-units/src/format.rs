//! Text rendering of values and quantities
//!
//! The number style follows the magnitude of the value, with `digits`
//! limiting the digits after the radix point:
//!
//! | magnitude        | style                        | e.g. (`digits = 2`) |
//! |------------------|------------------------------|---------------------|
//! | 0                | plain                        | `0`                 |
//! | < 1e-3           | scientific, negative exponent | `1.23e-05`         |
//! | [1e-3, 1)        | `digits` significant digits  | `0.012`             |
//! | [1, 1e6)         | grouped, fixed               | `12,345.68`         |
//! | >= 1e6           | scientific, signed exponent  | `1.23e+06`          |
//!
//! Trailing zeros after the radix point are dropped in every style.

use mensura_core::{NumberFormat, Result, UnitsError};
use std::fmt;

const GENERAL_DEFAULT_DIGITS: usize = 15;

/// Digits beyond this carry no information for an `f64`
const MAX_DIGITS: usize = 17;

/// Render a value in the style its magnitude calls for
pub fn format_value(value: f64, digits: usize, number_format: &NumberFormat) -> String {
    let digits = digits.min(MAX_DIGITS);
    let magnitude = value.abs();
    if value == 0.0 {
        "0".to_string()
    } else if magnitude < 1e-3 {
        scientific(value, digits, false, number_format)
    } else if magnitude < 1.0 {
        significant(value, digits, number_format)
    } else if magnitude < 1e6 {
        grouped(value, digits, number_format)
    } else {
        scientific(value, digits, true, number_format)
    }
}

/// `"<value> <abbreviation>"`
pub fn format_quantity(value: f64, abbreviation: &str, digits: usize, number_format: &NumberFormat) -> String {
    format!("{} {}", format_value(value, digits, number_format), abbreviation)
}

/// Expand a composite format string.
///
/// `{0}` is the value, `{1}` the abbreviation and `{2}` onwards are `args`.
/// An item may carry a spec: `{0:.3}` for fixed decimals, `{0:s3}` for the
/// magnitude-dependent style of [`format_value`]. `{{` and `}}` are literal
/// braces.
pub fn format_template(
    template: &str,
    value: f64,
    abbreviation: &str,
    number_format: &NumberFormat,
    args: &[&dyn fmt::Display],
) -> Result<String> {
    let mut out = String::with_capacity(template.len() + 16);
    let mut chars = template.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        match c {
            '{' if matches!(chars.peek(), Some((_, '{'))) => {
                chars.next();
                out.push('{');
            }
            '{' => {
                let mut item = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, '{')) | None => {
                            return Err(UnitsError::format_error(template, format!("unterminated format item at {}", start)));
                        }
                        Some((_, ch)) => item.push(ch),
                    }
                }
                let rendered = render_item(template, &item, value, abbreviation, number_format, args)?;
                out.push_str(&rendered);
            }
            '}' if matches!(chars.peek(), Some((_, '}'))) => {
                chars.next();
                out.push('}');
            }
            '}' => {
                return Err(UnitsError::format_error(template, format!("unmatched '}}' at {}", start)));
            }
            other => out.push(other),
        }
    }

    Ok(out)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Spec {
    Default,
    Fixed(usize),
    Auto(usize),
}

fn parse_spec(template: &str, spec: Option<&str>) -> Result<Spec> {
    let Some(spec) = spec else {
        return Ok(Spec::Default);
    };
    let digits = |rest: &str| {
        rest.parse::<usize>()
            .map_err(|_| UnitsError::format_error(template, format!("invalid format spec '{}'", spec)))
    };
    if let Some(rest) = spec.strip_prefix('.') {
        Ok(Spec::Fixed(digits(rest)?))
    } else if let Some(rest) = spec.strip_prefix('s') {
        Ok(Spec::Auto(digits(rest)?))
    } else {
        Err(UnitsError::format_error(template, format!("invalid format spec '{}'", spec)))
    }
}

fn render_item(
    template: &str,
    item: &str,
    value: f64,
    abbreviation: &str,
    number_format: &NumberFormat,
    args: &[&dyn fmt::Display],
) -> Result<String> {
    let (index, spec) = match item.split_once(':') {
        Some((index, spec)) => (index, Some(spec)),
        None => (item, None),
    };
    let index: usize = index
        .trim()
        .parse()
        .map_err(|_| UnitsError::format_error(template, format!("invalid format item '{{{}}}'", item)))?;
    let spec = parse_spec(template, spec)?;

    match index {
        0 => Ok(match spec {
            Spec::Default => localize(&value.to_string(), number_format),
            Spec::Fixed(decimals) => localize(&format!("{:.*}", decimals.min(MAX_DIGITS), value), number_format),
            Spec::Auto(digits) => format_value(value, digits, number_format),
        }),
        1 => Ok(abbreviation.to_string()),
        n => {
            let arg = args.get(n - 2).ok_or_else(|| {
                UnitsError::format_error(template, format!("format item {{{}}} has no argument", n))
            })?;
            Ok(match spec {
                Spec::Fixed(decimals) => format!("{:.*}", decimals.min(MAX_DIGITS), arg),
                _ => arg.to_string(),
            })
        }
    }
}

fn scientific(value: f64, digits: usize, signed_exponent: bool, number_format: &NumberFormat) -> String {
    let raw = format!("{:.*e}", digits, value);
    let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = match (exponent < 0, signed_exponent) {
        (true, _) => "-",
        (false, true) => "+",
        (false, false) => "",
    };
    format!(
        "{}e{}{:02}",
        localize(trim_fraction(mantissa), number_format),
        sign,
        exponent.unsigned_abs()
    )
}

fn significant(value: f64, digits: usize, number_format: &NumberFormat) -> String {
    let digits = if digits == 0 { GENERAL_DEFAULT_DIGITS } else { digits };
    let leading = value.abs().log10().floor() as i32;
    let decimals = (digits as i32 - 1 - leading).max(0) as usize;
    let raw = format!("{:.*}", decimals, value);
    localize(trim_fraction(&raw), number_format)
}

fn grouped(value: f64, digits: usize, number_format: &NumberFormat) -> String {
    let raw = format!("{:.*}", digits, value);
    let raw = trim_fraction(&raw);
    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut out = String::from(sign);
    let len = integer.len();
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(number_format.group_separator);
        }
        out.push(digit);
    }
    if let Some(fraction) = fraction {
        out.push(number_format.decimal_separator);
        out.push_str(fraction);
    }
    out
}

/// Drop trailing zeros after the radix point, and the point itself if bare
fn trim_fraction(raw: &str) -> &str {
    if raw.contains('.') {
        raw.trim_end_matches('0').trim_end_matches('.')
    } else {
        raw
    }
}

fn localize(raw: &str, number_format: &NumberFormat) -> String {
    if number_format.decimal_separator == '.' {
        raw.to_string()
    } else {
        raw.replace('.', &number_format.decimal_separator.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EN: NumberFormat = NumberFormat::INVARIANT;

    fn ru() -> NumberFormat {
        NumberFormat::for_culture("ru-RU")
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_value(0.0, 2, &EN), "0");
        assert_eq!(format_quantity(0.0, "m", 2, &EN), "0 m");
    }

    #[test]
    fn test_small_values_are_scientific() {
        assert_eq!(format_value(1.2345e-5, 2, &EN), "1.23e-05");
        assert_eq!(format_value(1e-4, 2, &EN), "1e-04");
        assert_eq!(format_value(-2.5e-7, 3, &EN), "-2.5e-07");
    }

    #[test]
    fn test_fractions_use_significant_digits() {
        assert_eq!(format_value(0.123456, 2, &EN), "0.12");
        assert_eq!(format_value(0.0123456, 2, &EN), "0.012");
        assert_eq!(format_value(0.5, 4, &EN), "0.5");
        assert_eq!(format_value(0.001, 2, &EN), "0.001");
    }

    #[test]
    fn test_mid_range_is_grouped() {
        assert_eq!(format_value(1.0, 2, &EN), "1");
        assert_eq!(format_value(12345.678, 2, &EN), "12,345.68");
        assert_eq!(format_value(-999.7, 0, &EN), "-1,000");
        assert_eq!(format_value(100.10, 2, &EN), "100.1");
    }

    #[test]
    fn test_large_values_have_signed_exponent() {
        assert_eq!(format_value(1_234_567.0, 2, &EN), "1.23e+06");
        assert_eq!(format_value(1e6, 2, &EN), "1e+06");
    }

    #[test]
    fn test_digits_are_capped() {
        for digits in [18, 1000, usize::MAX] {
            assert_eq!(format_value(0.5, digits, &EN), "0.5");
            assert_eq!(format_value(1.5, digits, &EN), "1.5");
            assert_eq!(format_value(2.5e6, digits, &EN), "2.5e+06");
        }
        let text = format_template("{0:.4000000000} {1}", 1.5, "m", &EN, &[]).unwrap();
        assert_eq!(text, format!("1.5{} m", "0".repeat(16)));
    }

    #[test]
    fn test_culture_separators() {
        let ru = ru();
        assert_eq!(format_value(12345.678, 2, &ru), format!("12{}345,68", ru.group_separator));
        assert_eq!(format_value(0.25, 2, &ru), "0,25");
        assert_eq!(format_value(1.5e-5, 2, &ru), "1,5e-05");
    }

    #[test]
    fn test_template() {
        let text = format_template("{0:.1} {1}", 1.26, "m", &EN, &[]).unwrap();
        assert_eq!(text, "1.3 m");

        let text = format_template("{1}: {0}", 3.0, "kg", &EN, &[]).unwrap();
        assert_eq!(text, "kg: 3");

        let extra: &dyn fmt::Display = &"approx";
        let text = format_template("{{{0:s2}}} {1} ({2})", 12345.678, "m", &EN, &[extra]).unwrap();
        assert_eq!(text, "{12,345.68} m (approx)");
    }

    #[test]
    fn test_template_uses_culture_for_value() {
        let text = format_template("{0:.2} {1}", 1.5, "м", &ru(), &[]).unwrap();
        assert_eq!(text, "1,50 м");
    }

    #[test]
    fn test_malformed_template() {
        for template in ["{0", "{x}", "0}", "{3}", "{0:q}", "{0:.}"] {
            let err = format_template(template, 1.0, "m", &EN, &[]).unwrap_err();
            assert!(matches!(err, UnitsError::FormatError { .. }), "{}", template);
        }
    }
}
