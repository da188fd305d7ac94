//! # Calculator State
//!
//! Manages the single calculator instance for the window.
//!
//! ## Thread Safety
//! The calculator is wrapped in `Arc<Mutex<T>>` because:
//! 1. Tauri commands can run concurrently
//! 2. Only one token may mutate the state machine at a time
//! 3. The lock scope is one full token transition, so tokens never interleave
//!
//! ## Token Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Calculator State Operations                          │
//! │                                                                         │
//! │  Frontend Action          Tauri Command           State Change          │
//! │  ───────────────          ─────────────           ────────────          │
//! │                                                                         │
//! │  Click "7" ──────────────► press_button() ──────► calc.press(Digit(7)) │
//! │                                                                         │
//! │  Key "*" ────────────────► press_key() ─────────► calc.press(Op(Mul))  │
//! │                                                                         │
//! │  Window refresh ─────────► get_display() ───────► (read only)          │
//! │                                                                         │
//! │  NOTE: All write operations acquire the Mutex lock exclusively.         │
//! │        Read operations also acquire the lock but release it quickly.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use tally_core::Calculator;

/// Tauri-managed calculator state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Calculator>>` because:
/// - `Arc`: Allows shared ownership across threads
/// - `Mutex`: Ensures only one token is processed at a time
///
/// ## Why Not RwLock?
/// Almost every operation is a token press that mutates state; the only
/// pure read is `get_display`. A RwLock would add complexity with minimal
/// benefit.
#[derive(Debug)]
pub struct CalculatorState {
    calc: Arc<Mutex<Calculator>>,
}

impl CalculatorState {
    /// Creates state holding a fresh calculator.
    pub fn new() -> Self {
        CalculatorState {
            calc: Arc::new(Mutex::new(Calculator::new())),
        }
    }

    /// Executes a function with read access to the calculator.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let display = state.with_calc(|c| c.display_text());
    /// ```
    pub fn with_calc<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Calculator) -> R,
    {
        let calc = self.calc.lock().expect("Calculator mutex poisoned");
        f(&calc)
    }

    /// Executes a function with write access to the calculator.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_calc_mut(|c| c.press(token));
    /// ```
    pub fn with_calc_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Calculator) -> R,
    {
        let mut calc = self.calc.lock().expect("Calculator mutex poisoned");
        f(&mut calc)
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::{BinaryOp, Token};

    #[test]
    fn test_tokens_accumulate_across_calls() {
        let state = CalculatorState::new();

        state.with_calc_mut(|c| c.press(Token::Digit(4)));
        state.with_calc_mut(|c| c.press(Token::Op(BinaryOp::Multiply)));
        state.with_calc_mut(|c| c.press(Token::Digit(2)));
        state.with_calc_mut(|c| c.press(Token::Equals));

        assert_eq!(state.with_calc(|c| c.display_text()), "8");
    }

    #[test]
    fn test_shared_across_threads() {
        let state = Arc::new(CalculatorState::new());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let state = Arc::clone(&state);
                std::thread::spawn(move || {
                    state.with_calc_mut(|c| c.press(Token::Digit(1)));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // Four digit presses under the lock: "0" → "1" → "11" → "111" → "1111"
        assert_eq!(state.with_calc(|c| c.display_text()), "1111");
    }
}
