//! # Tally Desktop Application Entry Point
//!
//! This is the main entry point for the Tauri desktop application.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Tally Desktop                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Tauri WebView                               │  │
//! │  │  ┌────────────────────────────────────────────────────────────┐  │  │
//! │  │  │                  Static HTML Frontend                      │  │  │
//! │  │  │  • Display Panel         • 5×4 Button Grid                 │  │  │
//! │  │  │  • Keyboard Listener     • Error Toast                     │  │  │
//! │  │  └────────────────────────────────────────────────────────────┘  │  │
//! │  │                              │                                   │  │
//! │  │                     invoke('command')                           │  │
//! │  │                              │                                   │  │
//! │  └──────────────────────────────┼───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                     │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► Delegates to lib.rs                              │  │
//! │  │                                                                  │  │
//! │  │  lib.rs ─────► Sets up logging, state, window, commands         │  │
//! │  │                                                                  │  │
//! │  │  commands/ ──► press_button, press_key, get_display             │  │
//! │  │                                                                  │  │
//! │  │  state/ ─────► CalculatorState, ConfigState                     │  │
//! │  │                                                                  │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                         tally-core                               │  │
//! │  │  Token parsing, state machine, display formatting (no I/O)       │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Create state objects (CalculatorState, ConfigState)
//! 3. Build Tauri application
//! 4. Register commands
//! 5. Launch window (raised briefly so it never opens behind others)

// Prevents an additional console window on Windows in release
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

fn main() {
    // Run the Tauri application
    // The actual setup is in lib.rs for better testability
    tally_desktop_lib::run();
}
