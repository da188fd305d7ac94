//! # Error Types
//!
//! The arithmetic error taxonomy for tally-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Policy                                    │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  └── ArithmeticError                                                   │
//! │      ├── MalformedNumeral  - entry text does not parse as a number     │
//! │      └── DivisionByZero    - ÷ with a typed entry of exactly zero      │
//! │                                                                         │
//! │  Both are handled INSIDE Calculator::press:                            │
//! │    entry ──► "Error" sentinel, all other state untouched               │
//! │                                                                         │
//! │  They never cross the crate boundary. The app-level ApiError exists    │
//! │  only for protocol faults (unknown button caption), not arithmetic.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Arithmetic Error
// =============================================================================

/// A failed arithmetic step.
///
/// These are internal to the state machine: every variant collapses to the
/// `"Error"` display sentinel, and the only token that recovers from the
/// sentinel is Clear.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// The entry buffer does not parse as a number.
    ///
    /// ## When This Occurs
    /// - An operator or `%` is pressed while the display shows `"Error"`
    /// - Digit tokens were appended to the sentinel (`"Error7"`)
    #[error("entry is not a number: {text:?}")]
    MalformedNumeral { text: String },

    /// Division where the typed divisor is exactly zero.
    ///
    /// The check is on the entry value, not on the quotient: `5 ÷ 0 =` is
    /// caught before the division happens.
    #[error("division by zero")]
    DivisionByZero,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ArithmeticError.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ArithmeticError::MalformedNumeral {
            text: "Error7".to_string(),
        };
        assert_eq!(err.to_string(), "entry is not a number: \"Error7\"");

        assert_eq!(
            ArithmeticError::DivisionByZero.to_string(),
            "division by zero"
        );
    }
}
