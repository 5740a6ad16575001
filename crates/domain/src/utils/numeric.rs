//! Lenient number parsing for values scraped off dashboard widgets
//!
//! Widgets render numbers for humans: grouped digits, locale-specific
//! decimal separators, currency and percent signs, accounting-style
//! parentheses. [`parse_metric_number`] recovers the first number from such
//! text. Ambiguous input resolves as follows:
//!
//! - spaces, no-break spaces and `'` are digit-group separators
//! - with both `.` and `,` present, whichever comes last is the decimal
//!   separator
//! - a lone `,` followed by one or two digits (or preceded by a bare `0`) is
//!   a decimal separator, otherwise a group separator
//! - several `.` with no `,` are group separators
//! - `(1,200)` is negative, `(+12%)` is not

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer};

#[allow(clippy::expect_used)]
static NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<sign>[-\x{2212}(])?[ \x{00A0}]*(?P<digits>\d[\d \x{00A0}\x{202F}.,']*)")
        .expect("number pattern compiles")
});

/// Extract the first number from display text
///
/// Returns `None` when the text holds no digits or the result is not
/// finite.
///
/// # Examples
///
/// ```
/// use dashlens_domain::parse_metric_number;
///
/// assert_eq!(parse_metric_number("1 234,56 ₽"), Some(1234.56));
/// assert_eq!(parse_metric_number("-3,400.10"), Some(-3400.10));
/// assert_eq!(parse_metric_number("(1,200)"), Some(-1200.0));
/// assert_eq!(parse_metric_number("n/a"), None);
/// ```
#[must_use]
pub fn parse_metric_number(text: &str) -> Option<f64> {
    let captures = NUMBER_PATTERN.captures(text)?;
    let digits = captures.name("digits")?;
    let magnitude = normalize_digits(digits.as_str())?;

    let negative = match captures.name("sign").map(|m| m.as_str()) {
        Some("(") => text[digits.end()..].trim_start().starts_with(')'),
        Some(_) => true,
        None => false,
    };

    Some(if negative { -magnitude } else { magnitude })
}

fn normalize_digits(raw: &str) -> Option<f64> {
    let compact: String =
        raw.chars().filter(|c| !matches!(c, ' ' | '\u{00A0}' | '\u{202F}' | '\'')).collect();
    let compact = compact.trim_end_matches(['.', ',']);

    let canonical = match (compact.rfind('.'), compact.rfind(',')) {
        (Some(dot), Some(comma)) if dot > comma => compact.replace(',', ""),
        (Some(_), Some(_)) => compact.replace('.', "").replace(',', "."),
        (None, Some(comma)) => {
            let decimals = compact.len() - comma - 1;
            let single = compact.matches(',').count() == 1;
            let zero_int = &compact[..comma] == "0";
            if single && ((1..=2).contains(&decimals) || zero_int) {
                compact.replace(',', ".")
            } else {
                compact.replace(',', "")
            }
        }
        (Some(_), None) if compact.matches('.').count() > 1 => compact.replace('.', ""),
        _ => compact.to_string(),
    };

    canonical.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
}

/// Serde adapter for `Option<f64>` fields that may arrive as display text
///
/// Numbers pass through (non-finite ones become `None`), strings go through
/// [`parse_metric_number`], `null` is `None`.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawNumber>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawNumber::Number(value)) if value.is_finite() => Some(value),
        Some(RawNumber::Number(_)) | None => None,
        Some(RawNumber::Text(text)) => parse_metric_number(&text),
    })
}
