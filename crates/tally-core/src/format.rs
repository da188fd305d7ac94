//! # Format Module
//!
//! Rendering of computed values back into entry text.
//!
//! ## Two Formatters, Not One
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FORMATTING SPLIT                                                   │
//! │                                                                         │
//! │  `=` results collapse integral values:                                  │
//! │    4 × 2 =        ──► 8.0  ──► format_result ──► "8"                    │
//! │    9 ÷ 2 =        ──► 4.5  ──► format_result ──► "4.5"                  │
//! │                                                                         │
//! │  `%` keeps the native decimal form:                                     │
//! │    200 %          ──► 2.0  ──► format_decimal ──► "2.0"                 │
//! │    50 %           ──► 0.5  ──► format_decimal ──► "0.5"                 │
//! │                                                                         │
//! │  The split is observable on the display and is part of the contract.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Neither formatter truncates; the 12-character cap is applied by
//! [`Calculator::display_text`](crate::Calculator::display_text) on read.

// =============================================================================
// Result Formatting
// =============================================================================

/// Formats an evaluation result for the entry buffer.
///
/// Integral values render without a decimal point; everything else uses the
/// shortest round-trip decimal form.
///
/// ## Example
/// ```rust
/// use tally_core::format::format_result;
///
/// assert_eq!(format_result(8.0), "8");
/// assert_eq!(format_result(-3.0), "-3");
/// assert_eq!(format_result(4.5), "4.5");
/// assert_eq!(format_result(0.1 + 0.2), "0.30000000000000004");
/// ```
pub fn format_result(value: f64) -> String {
    // The i64 cast is exact for every integral f64 below the i64 range;
    // larger integral values already print without a fraction.
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

// =============================================================================
// Decimal Formatting
// =============================================================================

/// Formats a value keeping a decimal point even when integral.
///
/// Used by the percent operation only: `200 %` shows `2.0`, never `2`.
///
/// ## Example
/// ```rust
/// use tally_core::format::format_decimal;
///
/// assert_eq!(format_decimal(2.0), "2.0");
/// assert_eq!(format_decimal(0.5), "0.5");
/// assert_eq!(format_decimal(-0.055), "-0.055");
/// ```
pub fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_integral_values_drop_the_point() {
        assert_eq!(format_result(0.0), "0");
        assert_eq!(format_result(8.0), "8");
        assert_eq!(format_result(-3.0), "-3");
        assert_eq!(format_result(120.0), "120");
    }

    #[test]
    fn test_result_negative_zero_collapses_to_zero() {
        assert_eq!(format_result(-0.0), "0");
    }

    #[test]
    fn test_result_fractional_values_round_trip() {
        assert_eq!(format_result(4.5), "4.5");
        assert_eq!(format_result(-0.25), "-0.25");
        // Float noise is shown, not hidden; the display cap trims it later
        assert_eq!(format_result(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_result_huge_integral_values() {
        // Beyond the i64 cast guard the plain form is still non-scientific
        assert_eq!(format_result(1e20), "100000000000000000000");
    }

    #[test]
    fn test_decimal_keeps_point_on_integral_values() {
        assert_eq!(format_decimal(2.0), "2.0");
        assert_eq!(format_decimal(0.0), "0.0");
        assert_eq!(format_decimal(-7.0), "-7.0");
    }

    #[test]
    fn test_decimal_fractional_values_round_trip() {
        assert_eq!(format_decimal(0.5), "0.5");
        assert_eq!(format_decimal(0.0123), "0.0123");
    }
}
