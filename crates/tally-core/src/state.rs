//! # Calculator State Machine
//!
//! The entire calculator lives here: one struct, one transition function.
//!
//! ## State Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Calculator State Machine                            │
//! │                                                                         │
//! │  Token              Transition                                          │
//! │  ─────              ──────────                                          │
//! │  Digit(d)    ──►    entry "0" replaced / digit appended                 │
//! │  Decimal     ──►    "." appended once (idempotent)                      │
//! │  Op(op)      ──►    implicit `=` if chaining, then total ◄─ entry,      │
//! │                     operator ◄─ op, entry ◄─ "0"                        │
//! │  Equals      ──►    total ◄─ op(total, entry), entry ◄─ result,         │
//! │                     operator cleared, result flag set                   │
//! │  Clear       ──►    entry/total/operator/flag back to initial           │
//! │  SignFlip    ──►    leading "-" toggled (no-op on "0"/"Error")          │
//! │  Percent     ──►    entry ◄─ entry / 100                                │
//! │  MemoryClear ──►    memory ◄─ 0, entry ◄─ "0"                           │
//! │                                                                         │
//! │  Chaining is left-to-right with NO precedence:                          │
//! │    2 + 3 × 4 =  evaluates as  (2 + 3) × 4  =  20                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `current` always parses as a number or equals the `"Error"` sentinel;
//!   never empty; never holds more than one decimal point
//! - a failed arithmetic step sets the sentinel and touches nothing else
//! - one token is fully processed before the next is accepted (the struct is
//!   `&mut self` all the way down; there are no suspension points)

use serde::{Deserialize, Serialize};

use crate::error::{ArithmeticError, ArithmeticResult};
use crate::format::{format_decimal, format_result};
use crate::token::{BinaryOp, Token};
use crate::{DISPLAY_MAX_CHARS, ERROR_SENTINEL};

// =============================================================================
// Calculator
// =============================================================================

/// The complete calculator state.
///
/// ## Fields as the User Sees Them
/// ```text
/// ┌──────────────────────────────┐
/// │                      123.45  │  ◄── current (via display_text)
/// ├──────────────────────────────┤
/// │  total: running value across chained operations
/// │  operator: lights up the pending operator key
/// │  result_shown: next digit starts a fresh entry
/// │  memory: register reachable only through MC
/// └──────────────────────────────┘
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculator {
    /// The number being typed, or the last computed result, or `"Error"`.
    current: String,

    /// Accumulated total carried across chained operations.
    total: f64,

    /// Operator awaiting a second operand.
    operator: Option<BinaryOp>,

    /// True immediately after a completed `=`, until the next digit.
    result_shown: bool,

    /// Memory register. Only MC touches it; there is no store/recall.
    memory: f64,
}

impl Calculator {
    /// Creates a calculator in its initial state: entry `"0"`, zero total,
    /// no pending operator.
    pub fn new() -> Self {
        Calculator {
            current: "0".to_string(),
            total: 0.0,
            operator: None,
            result_shown: false,
            memory: 0.0,
        }
    }

    // -------------------------------------------------------------------------
    // Read Side
    // -------------------------------------------------------------------------

    /// The display string: the entry truncated to its first
    /// [`DISPLAY_MAX_CHARS`] characters.
    ///
    /// This is a hard cap, not rounding. A long numeral is cut mid-digit and
    /// the full-precision entry keeps feeding subsequent calculations.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::{Calculator, Token, BinaryOp};
    ///
    /// let mut calc = Calculator::new();
    /// calc.press(Token::Decimal);
    /// calc.press(Token::Digit(1));
    /// calc.press(Token::Op(BinaryOp::Add));
    /// calc.press(Token::Decimal);
    /// calc.press(Token::Digit(2));
    /// calc.press(Token::Equals);
    ///
    /// // Full entry is 0.30000000000000004; the display shows 12 chars
    /// assert_eq!(calc.display_text(), "0.3000000000");
    /// ```
    pub fn display_text(&self) -> String {
        self.current.chars().take(DISPLAY_MAX_CHARS).collect()
    }

    /// The untruncated entry buffer.
    #[inline]
    pub fn entry(&self) -> &str {
        &self.current
    }

    /// The operator awaiting a second operand, if any.
    #[inline]
    pub fn pending_operator(&self) -> Option<BinaryOp> {
        self.operator
    }

    /// True immediately after a completed `=` evaluation.
    #[inline]
    pub fn result_shown(&self) -> bool {
        self.result_shown
    }

    /// The memory register value.
    #[inline]
    pub fn memory(&self) -> f64 {
        self.memory
    }

    // -------------------------------------------------------------------------
    // The Transition Function
    // -------------------------------------------------------------------------

    /// Processes one token to completion.
    ///
    /// Never panics and never returns an error: arithmetic failures collapse
    /// to the `"Error"` sentinel with all other state untouched.
    pub fn press(&mut self, token: Token) {
        match token {
            Token::Digit(digit) => self.press_digit(digit),
            Token::Decimal => self.press_decimal(),
            Token::Op(op) => self.press_operator(op),
            Token::Equals => self.press_equals(),
            Token::Clear => self.press_clear(),
            Token::SignFlip => self.press_sign_flip(),
            Token::Percent => self.press_percent(),
            Token::MemoryClear => self.press_memory_clear(),
        }
    }

    fn press_digit(&mut self, digit: u8) {
        debug_assert!(digit <= 9, "digit tokens carry 0-9");

        if self.result_shown {
            self.current = "0".to_string();
            self.result_shown = false;
        }

        if self.current == "0" {
            self.current = digit.to_string();
        } else {
            // Also appends to the "Error" sentinel ("Error7"); the sentinel
            // is cleared by C only, not overwritten by typing.
            self.current.push((b'0' + digit) as char);
        }
    }

    fn press_decimal(&mut self) {
        if self.result_shown {
            self.current = "0".to_string();
            self.result_shown = false;
        }

        if !self.current.contains('.') {
            self.current.push('.');
        }
    }

    fn press_operator(&mut self, op: BinaryOp) {
        // Left-to-right chaining: a second operator evaluates the first,
        // unless the entry is already a freshly shown result.
        if self.operator.is_some() && !self.result_shown {
            self.press_equals();
        }

        let value = match self.entry_value() {
            Ok(value) => value,
            Err(_) => {
                self.set_error();
                return;
            }
        };

        self.total = value;
        self.operator = Some(op);
        self.current = "0".to_string();
        self.result_shown = false;
    }

    fn press_equals(&mut self) {
        // `=` with nothing pending, or pressed twice, is a no-op
        let Some(op) = self.operator else {
            return;
        };
        if self.result_shown {
            return;
        }

        match self.evaluate(op) {
            Ok(total) => {
                self.current = format_result(total);
                self.operator = None;
                self.result_shown = true;
            }
            // Sentinel only; the pending operator and flags survive
            Err(_) => self.set_error(),
        }
    }

    fn press_clear(&mut self) {
        // Everything except the memory register
        self.current = "0".to_string();
        self.total = 0.0;
        self.operator = None;
        self.result_shown = false;
    }

    fn press_sign_flip(&mut self) {
        if self.current == "0" || self.current == ERROR_SENTINEL {
            return;
        }

        if let Some(stripped) = self.current.strip_prefix('-') {
            self.current = stripped.to_string();
        } else {
            self.current.insert(0, '-');
        }
    }

    fn press_percent(&mut self) {
        match self.entry_value() {
            // Percent keeps the native decimal form: 200 % shows "2.0"
            Ok(value) => self.current = format_decimal(value / 100.0),
            Err(_) => self.set_error(),
        }
    }

    fn press_memory_clear(&mut self) {
        // MC resets the memory register AND the entry, but deliberately
        // leaves the pending operator and result flag alone.
        self.memory = 0.0;
        self.current = "0".to_string();
    }

    // -------------------------------------------------------------------------
    // Arithmetic Helpers
    // -------------------------------------------------------------------------

    /// Parses the entry buffer.
    fn entry_value(&self) -> ArithmeticResult<f64> {
        self.current
            .parse::<f64>()
            .map_err(|_| ArithmeticError::MalformedNumeral {
                text: self.current.clone(),
            })
    }

    /// Applies `op` to `(total, entry)` and advances the running total.
    ///
    /// Division by a typed entry of exactly zero is rejected before the
    /// division happens. An overflowed total renders as `inf`, which is not
    /// a numeral; it is reported as malformed after the total has advanced.
    fn evaluate(&mut self, op: BinaryOp) -> ArithmeticResult<f64> {
        let rhs = self.entry_value()?;

        if op == BinaryOp::Divide && rhs == 0.0 {
            return Err(ArithmeticError::DivisionByZero);
        }

        self.total = op.apply(self.total, rhs);

        if !self.total.is_finite() {
            return Err(ArithmeticError::MalformedNumeral {
                text: self.total.to_string(),
            });
        }

        Ok(self.total)
    }

    fn set_error(&mut self) {
        self.current = ERROR_SENTINEL.to_string();
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Presses a sequence of button captions.
    fn press_all(calc: &mut Calculator, labels: &[&str]) {
        for label in labels {
            let token = Token::from_label(label)
                .unwrap_or_else(|| panic!("unknown caption {:?}", label));
            calc.press(token);
        }
    }

    fn displayed(labels: &[&str]) -> String {
        let mut calc = Calculator::new();
        press_all(&mut calc, labels);
        calc.display_text()
    }

    #[test]
    fn test_initial_state() {
        let calc = Calculator::new();
        assert_eq!(calc.display_text(), "0");
        assert_eq!(calc.entry(), "0");
        assert_eq!(calc.pending_operator(), None);
        assert!(!calc.result_shown());
        assert_eq!(calc.memory(), 0.0);
    }

    #[test]
    fn test_digits_concatenate() {
        assert_eq!(displayed(&["1", "2", "3"]), "123");
    }

    #[test]
    fn test_leading_zero_collapses() {
        assert_eq!(displayed(&["0", "5"]), "5");
        assert_eq!(displayed(&["0", "0", "7"]), "7");
    }

    #[test]
    fn test_decimal_point_is_idempotent() {
        assert_eq!(displayed(&["1", ".", ".", "5"]), "1.5");
        assert_eq!(displayed(&[".", "."]), "0.");
    }

    #[test]
    fn test_decimal_on_fresh_entry_prefixes_zero() {
        assert_eq!(displayed(&[".", "5"]), "0.5");
    }

    #[test]
    fn test_simple_addition() {
        assert_eq!(displayed(&["2", "+", "3", "="]), "5");
    }

    #[test]
    fn test_chaining_is_left_to_right() {
        assert_eq!(displayed(&["2", "+", "3", "+", "4", "="]), "9");
        // No precedence: (2 + 3) × 4, not 2 + (3 × 4)
        assert_eq!(displayed(&["2", "+", "3", "×", "4", "="]), "20");
    }

    #[test]
    fn test_integral_result_has_no_decimal_point() {
        assert_eq!(displayed(&["4", "×", "2", "="]), "8");
    }

    #[test]
    fn test_fractional_result_keeps_decimals() {
        assert_eq!(displayed(&["9", "÷", "2", "="]), "4.5");
    }

    #[test]
    fn test_subtraction_below_zero() {
        assert_eq!(displayed(&["3", "−", "5", "="]), "-2");
    }

    #[test]
    fn test_new_digit_after_result_starts_fresh_entry() {
        assert_eq!(displayed(&["6", "+", "4", "=", "7"]), "7");
    }

    #[test]
    fn test_decimal_after_result_starts_fresh_entry() {
        assert_eq!(displayed(&["6", "+", "4", "=", ".", "5"]), "0.5");
    }

    #[test]
    fn test_operator_after_result_chains_from_result() {
        assert_eq!(displayed(&["6", "+", "4", "=", "+", "1", "="]), "11");
    }

    #[test]
    fn test_equals_without_operator_is_noop() {
        assert_eq!(displayed(&["7", "="]), "7");
        assert_eq!(displayed(&["="]), "0");
    }

    #[test]
    fn test_equals_twice_is_noop() {
        // No repeat-equals: the first = cleared the pending operator
        assert_eq!(displayed(&["2", "+", "3", "=", "="]), "5");
    }

    #[test]
    fn test_division_by_zero_shows_error() {
        assert_eq!(displayed(&["5", "÷", "0", "="]), "Error");
    }

    #[test]
    fn test_division_by_zero_keeps_operator_state() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["5", "÷", "0", "="]);

        assert_eq!(calc.entry(), "Error");
        assert_eq!(calc.pending_operator(), Some(BinaryOp::Divide));
        assert!(!calc.result_shown());
    }

    #[test]
    fn test_division_by_typed_zero_point_zero() {
        assert_eq!(displayed(&["5", "÷", "0", ".", "0", "="]), "Error");
    }

    #[test]
    fn test_digit_appends_to_error_sentinel() {
        // result_shown is false after an error, so the digit path appends
        assert_eq!(displayed(&["5", "÷", "0", "=", "7"]), "Error7");
    }

    #[test]
    fn test_operator_on_error_entry_stays_error() {
        assert_eq!(displayed(&["5", "÷", "0", "=", "+"]), "Error");
    }

    #[test]
    fn test_percent_on_error_entry_stays_error() {
        assert_eq!(displayed(&["5", "÷", "0", "=", "%"]), "Error");
    }

    #[test]
    fn test_clear_recovers_from_error() {
        assert_eq!(displayed(&["5", "÷", "0", "=", "C"]), "0");
    }

    #[test]
    fn test_clear_resets_fully() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["7", "+", "2", "C"]);

        assert_eq!(calc.entry(), "0");
        assert_eq!(calc.pending_operator(), None);
        assert!(!calc.result_shown());

        // A chain started after C begins from a zero total
        press_all(&mut calc, &["+", "3", "="]);
        assert_eq!(calc.display_text(), "3");
    }

    #[test]
    fn test_sign_flip_toggles() {
        assert_eq!(displayed(&["5", "±"]), "-5");
        assert_eq!(displayed(&["5", "±", "±"]), "5");
    }

    #[test]
    fn test_sign_flip_noop_on_zero() {
        assert_eq!(displayed(&["±"]), "0");
    }

    #[test]
    fn test_sign_flip_noop_on_error() {
        assert_eq!(displayed(&["5", "÷", "0", "=", "±"]), "Error");
    }

    #[test]
    fn test_sign_flip_on_result() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["6", "+", "4", "=", "±"]);

        assert_eq!(calc.display_text(), "-10");
        // The flip does not consume the result flag
        assert!(calc.result_shown());
    }

    #[test]
    fn test_percent_divides_by_hundred() {
        assert_eq!(displayed(&["5", "0", "%"]), "0.5");
    }

    #[test]
    fn test_percent_keeps_native_decimal_form() {
        // 200 / 100 is integral but still renders with the point
        assert_eq!(displayed(&["2", "0", "0", "%"]), "2.0");
    }

    #[test]
    fn test_memory_clear_resets_entry_and_memory() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["4", "2", "MC"]);

        assert_eq!(calc.display_text(), "0");
        assert_eq!(calc.memory(), 0.0);
    }

    #[test]
    fn test_memory_clear_leaves_operator_state_alone() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["5", "+", "MC"]);

        // Entry is reset but the pending addition survives
        assert_eq!(calc.pending_operator(), Some(BinaryOp::Add));
        press_all(&mut calc, &["3", "="]);
        assert_eq!(calc.display_text(), "8");
    }

    #[test]
    fn test_memory_clear_after_result_keeps_flag() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["5", "+", "3", "=", "MC"]);

        assert_eq!(calc.display_text(), "0");
        assert!(calc.result_shown());
    }

    #[test]
    fn test_clear_does_not_touch_memory_register() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["5", "C"]);
        assert_eq!(calc.memory(), 0.0);
    }

    #[test]
    fn test_display_truncates_to_twelve_chars() {
        // 0.1 + 0.2 = 0.30000000000000004, shown as its first 12 chars
        let mut calc = Calculator::new();
        press_all(&mut calc, &[".", "1", "+", ".", "2", "="]);

        assert_eq!(calc.entry(), "0.30000000000000004");
        assert_eq!(calc.display_text(), "0.3000000000");
        assert_eq!(calc.display_text().chars().count(), 12);
    }

    #[test]
    fn test_truncated_entry_still_computes_at_full_precision() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &[".", "1", "+", ".", "2", "=", "×"]);
        press_all(&mut calc, &["1", "0", "="]);

        // 0.30000000000000004 × 10, not 0.3000000000 × 10
        assert_eq!(calc.entry(), "3.0000000000000004");
    }

    #[test]
    fn test_long_typed_entry_truncates() {
        let mut calc = Calculator::new();
        press_all(
            &mut calc,
            &["1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "1", "2", "3", "4"],
        );

        assert_eq!(calc.entry(), "12345678901234");
        assert_eq!(calc.display_text(), "123456789012");
    }

    #[test]
    fn test_operator_switch_midway_chains() {
        // 8 − 3 then ÷: the subtraction evaluates first, 5 ÷ 5 = 1
        assert_eq!(displayed(&["8", "−", "3", "÷", "5", "="]), "1");
    }

    #[test]
    fn test_negative_entry_in_chain() {
        assert_eq!(displayed(&["5", "±", "+", "8", "="]), "3");
    }

    #[test]
    fn test_percent_then_equals() {
        // 0.5 + 0.5 = 1; the `=` formatter collapses the integral result
        assert_eq!(displayed(&["5", "0", "%", "+", "5", "0", "%", "="]), "1");
    }
}
