//! # Token Types
//!
//! The input alphabet of the calculator.
//!
//! ## Token Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Token Sources                                  │
//! │                                                                         │
//! │  ┌─────────────────┐                 ┌─────────────────┐                │
//! │  │  Button Click   │                 │   Key Press     │                │
//! │  │  caption: "×"   │                 │   key: "*"      │                │
//! │  └────────┬────────┘                 └────────┬────────┘                │
//! │           │                                   │                         │
//! │           ▼                                   ▼                         │
//! │   Token::from_label("×")              Token::from_key("*")              │
//! │           │                                   │                         │
//! │           └────────────────┬──────────────────┘                         │
//! │                            ▼                                            │
//! │                 Token::Op(BinaryOp::Multiply)                           │
//! │                            │                                            │
//! │                            ▼                                            │
//! │                    Calculator::press()                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both mappings are total lookups: anything outside the alphabet yields
//! `None`, and the caller decides whether that is an error (unknown button
//! caption) or a no-op (stray keyboard key).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Binary Operator
// =============================================================================

/// One of the four arithmetic operators.
///
/// Carries its own display symbol so the UI and the state machine agree on
/// the glyphs: the on-screen captions use `−`, `×`, `÷` (not ASCII).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    /// Addition (`+`).
    Add,
    /// Subtraction (`−`, U+2212).
    Subtract,
    /// Multiplication (`×`, U+00D7).
    Multiply,
    /// Division (`÷`, U+00F7).
    Divide,
}

impl BinaryOp {
    /// Returns the display symbol for this operator.
    #[inline]
    pub const fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "−",
            BinaryOp::Multiply => "×",
            BinaryOp::Divide => "÷",
        }
    }

    /// Applies the operator to `(lhs, rhs)`.
    ///
    /// Division by zero is NOT handled here; the state machine checks the
    /// right-hand side before calling this (the check is on the typed entry,
    /// not on the result).
    #[inline]
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Subtract => lhs - rhs,
            BinaryOp::Multiply => lhs * rhs,
            BinaryOp::Divide => lhs / rhs,
        }
    }
}

// =============================================================================
// Token
// =============================================================================

/// A single symbolic user action submitted to the state machine.
///
/// ## The Full Alphabet
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Digits      0 1 2 3 4 5 6 7 8 9                                        │
/// │  Decimal     .                                                          │
/// │  Operators   + − × ÷                                                    │
/// │  Evaluate    =                                                          │
/// │  Commands    C (clear)  ± (sign flip)  % (percent)  MC (memory clear)   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Token {
    /// A digit 0-9. The payload is always in `0..=9`.
    Digit(u8),
    /// The decimal point.
    Decimal,
    /// One of the four arithmetic operators.
    Op(BinaryOp),
    /// Evaluate the pending operation.
    Equals,
    /// Reset entry, total, and pending operator.
    Clear,
    /// Toggle the sign of the current entry.
    SignFlip,
    /// Divide the current entry by 100.
    Percent,
    /// Reset the memory register (and the entry, see `Calculator::press`).
    MemoryClear,
}

impl Token {
    /// Parses an on-screen button caption.
    ///
    /// Captions are matched exactly as they appear on the keypad, including
    /// the typographic operator glyphs.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::{BinaryOp, Token};
    ///
    /// assert_eq!(Token::from_label("7"), Some(Token::Digit(7)));
    /// assert_eq!(Token::from_label("÷"), Some(Token::Op(BinaryOp::Divide)));
    /// assert_eq!(Token::from_label("MC"), Some(Token::MemoryClear));
    /// assert_eq!(Token::from_label("sqrt"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Token> {
        match label {
            "0" => Some(Token::Digit(0)),
            "1" => Some(Token::Digit(1)),
            "2" => Some(Token::Digit(2)),
            "3" => Some(Token::Digit(3)),
            "4" => Some(Token::Digit(4)),
            "5" => Some(Token::Digit(5)),
            "6" => Some(Token::Digit(6)),
            "7" => Some(Token::Digit(7)),
            "8" => Some(Token::Digit(8)),
            "9" => Some(Token::Digit(9)),
            "." => Some(Token::Decimal),
            "+" => Some(Token::Op(BinaryOp::Add)),
            "−" => Some(Token::Op(BinaryOp::Subtract)),
            "×" => Some(Token::Op(BinaryOp::Multiply)),
            "÷" => Some(Token::Op(BinaryOp::Divide)),
            "=" => Some(Token::Equals),
            "C" => Some(Token::Clear),
            "±" => Some(Token::SignFlip),
            "%" => Some(Token::Percent),
            "MC" => Some(Token::MemoryClear),
            _ => None,
        }
    }

    /// Parses a keyboard event into a token.
    ///
    /// ## Mapping
    /// ```text
    /// 0-9, .         ──► same token as the matching button
    /// + - * /        ──► the four operators (ASCII aliases)
    /// =, Enter       ──► Equals
    /// Escape, c, C   ──► Clear
    /// anything else  ──► None (stray keys are a no-op upstream)
    /// ```
    ///
    /// There are no keyboard bindings for `±`, `%`, or `MC`; those exist
    /// only as buttons.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::{BinaryOp, Token};
    ///
    /// assert_eq!(Token::from_key("*"), Some(Token::Op(BinaryOp::Multiply)));
    /// assert_eq!(Token::from_key("Enter"), Some(Token::Equals));
    /// assert_eq!(Token::from_key("Escape"), Some(Token::Clear));
    /// assert_eq!(Token::from_key("q"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Token> {
        match key {
            "+" => Some(Token::Op(BinaryOp::Add)),
            "-" => Some(Token::Op(BinaryOp::Subtract)),
            "*" => Some(Token::Op(BinaryOp::Multiply)),
            "/" => Some(Token::Op(BinaryOp::Divide)),
            "=" | "Enter" | "Return" => Some(Token::Equals),
            "Escape" | "c" | "C" => Some(Token::Clear),
            "." => Some(Token::Decimal),
            d => d
                .parse::<u8>()
                .ok()
                .filter(|n| *n <= 9 && d.len() == 1)
                .map(Token::Digit),
        }
    }

    /// Returns true for digit tokens.
    #[inline]
    pub const fn is_digit(&self) -> bool {
        matches!(self, Token::Digit(_))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_digits() {
        for d in 0..=9u8 {
            let label = d.to_string();
            assert_eq!(Token::from_label(&label), Some(Token::Digit(d)));
        }
    }

    #[test]
    fn test_label_operators_use_typographic_glyphs() {
        assert_eq!(Token::from_label("+"), Some(Token::Op(BinaryOp::Add)));
        assert_eq!(Token::from_label("−"), Some(Token::Op(BinaryOp::Subtract)));
        assert_eq!(Token::from_label("×"), Some(Token::Op(BinaryOp::Multiply)));
        assert_eq!(Token::from_label("÷"), Some(Token::Op(BinaryOp::Divide)));

        // The ASCII forms are keyboard aliases, not captions
        assert_eq!(Token::from_label("*"), None);
        assert_eq!(Token::from_label("/"), None);
    }

    #[test]
    fn test_label_commands() {
        assert_eq!(Token::from_label("="), Some(Token::Equals));
        assert_eq!(Token::from_label("C"), Some(Token::Clear));
        assert_eq!(Token::from_label("±"), Some(Token::SignFlip));
        assert_eq!(Token::from_label("%"), Some(Token::Percent));
        assert_eq!(Token::from_label("MC"), Some(Token::MemoryClear));
        assert_eq!(Token::from_label("M+"), None);
    }

    #[test]
    fn test_key_ascii_operator_aliases() {
        assert_eq!(Token::from_key("+"), Some(Token::Op(BinaryOp::Add)));
        assert_eq!(Token::from_key("-"), Some(Token::Op(BinaryOp::Subtract)));
        assert_eq!(Token::from_key("*"), Some(Token::Op(BinaryOp::Multiply)));
        assert_eq!(Token::from_key("/"), Some(Token::Op(BinaryOp::Divide)));
    }

    #[test]
    fn test_key_equals_and_clear_aliases() {
        assert_eq!(Token::from_key("="), Some(Token::Equals));
        assert_eq!(Token::from_key("Enter"), Some(Token::Equals));
        assert_eq!(Token::from_key("Return"), Some(Token::Equals));
        assert_eq!(Token::from_key("Escape"), Some(Token::Clear));
        assert_eq!(Token::from_key("c"), Some(Token::Clear));
        assert_eq!(Token::from_key("C"), Some(Token::Clear));
    }

    #[test]
    fn test_key_digits_single_char_only() {
        assert_eq!(Token::from_key("5"), Some(Token::Digit(5)));
        assert_eq!(Token::from_key("0"), Some(Token::Digit(0)));
        // "10" parses as u8 but is not a single keystroke
        assert_eq!(Token::from_key("10"), None);
    }

    #[test]
    fn test_key_unmapped_keys_are_none() {
        for key in ["q", "±", "%", "MC", "Tab", "F1", " "] {
            assert_eq!(Token::from_key(key), None, "key {:?}", key);
        }
    }

    #[test]
    fn test_operator_symbols_round_trip_captions() {
        for op in [
            BinaryOp::Add,
            BinaryOp::Subtract,
            BinaryOp::Multiply,
            BinaryOp::Divide,
        ] {
            assert_eq!(Token::from_label(op.symbol()), Some(Token::Op(op)));
        }
    }

    #[test]
    fn test_apply() {
        assert_eq!(BinaryOp::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(BinaryOp::Subtract.apply(2.0, 3.0), -1.0);
        assert_eq!(BinaryOp::Multiply.apply(4.0, 2.5), 10.0);
        assert_eq!(BinaryOp::Divide.apply(9.0, 2.0), 4.5);
    }
}
