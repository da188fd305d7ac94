//! # API Error Type
//!
//! Unified error type for Tauri commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Error Flow in Tally                                │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  invoke('press_button', { symbol: '√' })                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<KeypadResponse, ApiError>                                │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Unknown caption? ─── ApiError { INVALID_TOKEN } ──────────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄────────────────────────────────────────────────────────────────────  │
//! │                                                                         │
//! │  try {                                                                  │
//! │    await invoke('press_button', { symbol })                             │
//! │  } catch (e) {                                                          │
//! │    showToast(e.message)   // non-blocking, app keeps running            │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an ApiError
//! Arithmetic failures (division by zero, malformed numerals) are part of
//! the calculator's normal behavior: they surface as the `"Error"` display
//! sentinel inside tally-core and commands still return `Ok`. ApiError is
//! reserved for protocol faults at the IPC boundary.
//!
//! ## Tauri Error Serialization
//! Tauri requires errors to be serializable. We implement `Serialize`
//! and include both a machine-readable `code` and human-readable `message`.

use serde::Serialize;

/// API error returned from Tauri commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "INVALID_TOKEN",
///   "message": "Unrecognized button caption: \"√\""
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// ## Usage in Frontend
/// ```typescript
/// try {
///   await invoke('press_button', { symbol });
/// } catch (e) {
///   switch (e.code) {
///     case 'INVALID_TOKEN':
///       showToast(e.message);
///       break;
///     default:
///       showToast('An error occurred');
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The submitted symbol is not part of the keypad alphabet
    InvalidToken,

    /// Internal error (500)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates an invalid-token error for an unrecognized button caption.
    pub fn invalid_token(symbol: &str) -> Self {
        ApiError::new(
            ErrorCode::InvalidToken,
            format!("Unrecognized button caption: {:?}", symbol),
        )
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_token_serializes_with_screaming_code() {
        let err = ApiError::invalid_token("√");
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["code"], "INVALID_TOKEN");
        assert_eq!(json["message"], "Unrecognized button caption: \"√\"");
    }
}
