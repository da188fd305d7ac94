//! # tally-core: Pure Calculator Logic for Tally
//!
//! This crate is the **heart** of Tally. It contains the entire calculator
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Tally Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   Frontend (button grid)                        │   │
//! │  │    Keypad UI ──► Display Panel ──► Keyboard Listener           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Tauri Commands                               │   │
//! │  │    press_button, press_key, get_display                        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   token   │  │   state   │  │  format   │  │   error   │  │   │
//! │  │   │   Token   │  │ Calculator│  │  result/  │  │ Arithmetic│  │   │
//! │  │   │  BinaryOp │  │  press()  │  │  decimal  │  │   Error   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO WINDOW HANDLES • NO NETWORK • PURE FUNCTIONS     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`token`] - The input alphabet (digits, operators, commands)
//! - [`state`] - The calculator state machine
//! - [`format`] - Display formatting of computed values
//! - [`error`] - Arithmetic error taxonomy
//!
//! ## Design Principles
//!
//! 1. **One token, one transition**: every user action is a single [`Token`]
//!    fully processed by [`Calculator::press`] before the next is accepted
//! 2. **No I/O**: window, clipboard, network, file system access is FORBIDDEN here
//! 3. **Sequential arithmetic**: left-to-right chaining, no precedence,
//!    exactly like a four-function pocket calculator
//! 4. **Errors stay local**: arithmetic failures never escape; they surface
//!    as the `"Error"` display sentinel and nothing else changes
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{Calculator, Token, BinaryOp};
//!
//! let mut calc = Calculator::new();
//!
//! // 2 + 3 + 4 = ... chained left-to-right, no precedence
//! calc.press(Token::Digit(2));
//! calc.press(Token::Op(BinaryOp::Add));
//! calc.press(Token::Digit(3));
//! calc.press(Token::Op(BinaryOp::Add));
//! calc.press(Token::Digit(4));
//! calc.press(Token::Equals);
//!
//! assert_eq!(calc.display_text(), "9");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod format;
pub mod state;
pub mod token;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Calculator` instead of
// `use tally_core::state::Calculator`

pub use error::{ArithmeticError, ArithmeticResult};
pub use state::Calculator;
pub use token::{BinaryOp, Token};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of characters shown on the display.
///
/// ## Behavior
/// This is a hard cap, not rounding: `display_text()` keeps the first 12
/// characters of the entry and may cut a valid numeral mid-digit.
/// The full-precision entry is retained internally and keeps feeding
/// subsequent calculations.
pub const DISPLAY_MAX_CHARS: usize = 12;

/// The sentinel shown when an arithmetic step fails.
///
/// Only the Clear token replaces this with a fresh entry; digit tokens
/// append to it like to any other entry text.
pub const ERROR_SENTINEL: &str = "Error";
