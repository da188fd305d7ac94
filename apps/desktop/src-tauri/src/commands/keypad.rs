//! # Keypad Commands
//!
//! Tauri commands forwarding user actions to the state machine.
//!
//! ## Token Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Keypad Command Flow                               │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────────┐     ┌─────────────┐     ┌─────────┐ │
//! │  │ Button   │────►│ press_button │────►│ tally-core  │────►│ Display │ │
//! │  │ Click    │     │ (caption)    │     │ press()     │     │ Refresh │ │
//! │  └──────────┘     └──────────────┘     └─────────────┘     └─────────┘ │
//! │                                              ▲                          │
//! │  ┌──────────┐     ┌──────────────┐           │                          │
//! │  │ Keydown  │────►│ press_key    │───────────┘                          │
//! │  │ Event    │     │ (key name)   │  unmapped keys: no-op                │
//! │  └──────────┘     └──────────────┘                                      │
//! │                                                                         │
//! │  Every response carries the refreshed display string; the frontend     │
//! │  renders it verbatim after every token.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::CalculatorState;
use tally_core::{BinaryOp, Calculator, Token};

/// Keypad response: everything the frontend needs to redraw.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeypadResponse {
    /// Display string, already truncated to the visible width.
    pub display: String,

    /// Operator awaiting its second operand (for highlighting the key).
    pub pending_operator: Option<BinaryOp>,

    /// True when the display shows a freshly computed result.
    pub result_shown: bool,
}

impl From<&Calculator> for KeypadResponse {
    fn from(calc: &Calculator) -> Self {
        KeypadResponse {
            display: calc.display_text(),
            pending_operator: calc.pending_operator(),
            result_shown: calc.result_shown(),
        }
    }
}

/// Presses an on-screen button.
///
/// ## Arguments
/// * `symbol` - The exact button caption (`"7"`, `"×"`, `"MC"`, ...)
///
/// ## Errors
/// A caption outside the keypad alphabet is a protocol fault: the frontend
/// and backend disagree about the keypad layout. The command returns
/// `INVALID_TOKEN` and the frontend surfaces it as a non-blocking toast;
/// the calculator state is untouched.
///
/// ## Returns
/// The refreshed display state
#[tauri::command]
pub fn press_button(
    calc: State<'_, CalculatorState>,
    symbol: String,
) -> Result<KeypadResponse, ApiError> {
    debug!(symbol = %symbol, "press_button command");

    let token = Token::from_label(&symbol).ok_or_else(|| ApiError::invalid_token(&symbol))?;

    Ok(calc.with_calc_mut(|c| {
        c.press(token);
        KeypadResponse::from(&*c)
    }))
}

/// Presses a keyboard key.
///
/// ## Arguments
/// * `key` - The DOM `KeyboardEvent.key` value (`"5"`, `"*"`, `"Enter"`, ...)
///
/// ## Behavior
/// Unlike button captions, arbitrary keys are expected here: the user can
/// type anything. Unmapped keys are a silent no-op that returns the current
/// display unchanged.
///
/// ## Returns
/// The refreshed display state
#[tauri::command]
pub fn press_key(calc: State<'_, CalculatorState>, key: String) -> KeypadResponse {
    debug!(key = %key, "press_key command");

    match Token::from_key(&key) {
        Some(token) => calc.with_calc_mut(|c| {
            c.press(token);
            KeypadResponse::from(&*c)
        }),
        None => calc.with_calc(|c| KeypadResponse::from(c)),
    }
}

/// Gets the current display state without pressing anything.
///
/// ## When Used
/// - Initial render after the window opens
/// - Re-sync after the webview reloads
///
/// ## Returns
/// The current display state (read-only)
#[tauri::command]
pub fn get_display(calc: State<'_, CalculatorState>) -> KeypadResponse {
    debug!("get_display command");
    calc.with_calc(|c| KeypadResponse::from(c))
}
