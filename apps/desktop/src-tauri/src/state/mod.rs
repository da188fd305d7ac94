//! # State Module
//!
//! Manages application state for the Tauri desktop app.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can exercise individual states without Tauri
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Tauri Runtime                              │   │
//! │  │  app.manage(calculator_state);                                  │   │
//! │  │  app.manage(config_state);                                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                    │                        │                           │
//! │                    ▼                        ▼                           │
//! │        ┌─────────────────────┐  ┌──────────────────────┐               │
//! │        │   CalculatorState   │  │     ConfigState      │               │
//! │        │                     │  │                      │               │
//! │        │   Arc<Mutex<        │  │   window_title       │               │
//! │        │     Calculator      │  │   keyboard_input     │               │
//! │        │   >>                │  │   raise_on_launch    │               │
//! │        └─────────────────────┘  └──────────────────────┘               │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CalculatorState: Protected by Arc<Mutex<T>> for exclusive access    │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod calculator;
mod config;

pub use calculator::CalculatorState;
pub use config::ConfigState;
