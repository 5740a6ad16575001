//! Number formatting for report text
//!
//! Every number that lands in a report uses exactly two decimal places.

/// Format with two decimals (`1234.5` → `"1234.50"`)
///
/// # Examples
///
/// ```
/// use dashlens_domain::utils::format::format_value;
///
/// assert_eq!(format_value(45.5), "45.50");
/// assert_eq!(format_value(-3.0), "-3.00");
/// ```
#[must_use]
pub fn format_value(value: f64) -> String {
    format!("{value:.2}")
}

/// Format with two decimals and an explicit sign (`1.2` → `"+1.20"`)
///
/// # Examples
///
/// ```
/// use dashlens_domain::utils::format::format_signed;
///
/// assert_eq!(format_signed(1.2), "+1.20");
/// assert_eq!(format_signed(-50.0), "-50.00");
/// ```
#[must_use]
pub fn format_signed(value: f64) -> String {
    format!("{value:+.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding() {
        assert_eq!(format_value(2.708_803_611), "2.71");
        assert_eq!(format_value(33.333_333), "33.33");
        assert_eq!(format_value(0.0), "0.00");
    }

    #[test]
    fn test_signed_zero_has_plus() {
        assert_eq!(format_signed(0.0), "+0.00");
    }

    #[test]
    fn test_signed_small_delta() {
        // 45.5 - 44.3 is not exactly 1.2 in binary
        assert_eq!(format_signed(45.5 - 44.3), "+1.20");
    }
}
