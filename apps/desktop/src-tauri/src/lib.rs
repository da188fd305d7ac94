//! # Tally Desktop Library
//!
//! Core library for the Tally desktop application.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! tally_desktop_lib/
//! ├── lib.rs          ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── calculator.rs ◄─ Calculator state wrapper
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── keypad.rs   ◄─── Token forwarding & display commands
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Management (Multiple State Types)
//! Instead of a single `AppState` struct, we use multiple focused state types:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri State Management                               │
//! │                                                                         │
//! │  ┌───────────────────────────┐  ┌───────────────────────────────────┐  │
//! │  │    CalculatorState        │  │    ConfigState                    │  │
//! │  │                           │  │                                   │  │
//! │  │  • Arc<Mutex<Calculator>> │  │  • Window title                   │  │
//! │  │  • One token per lock     │  │  • Keyboard input flag            │  │
//! │  │                           │  │  • Raise-on-launch flag           │  │
//! │  └───────────────────────────┘  └───────────────────────────────────┘  │
//! │                                                                         │
//! │  WHY: Each command only requests the state it needs.                   │
//! │       Better separation of concerns and testability.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tauri::Manager;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use state::{CalculatorState, ConfigState};

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • Defaults merged with TALLY_* environment variables                │
/// │     • Nothing is read from or written to disk                           │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • CalculatorState: fresh Calculator behind a Mutex                  │
/// │     • ConfigState: read-only after this point                           │
/// │                                                                         │
/// │  4. Build & Run Tauri App ────────────────────────────────────────────► │
/// │     • Register all commands                                             │
/// │     • Manage state                                                      │
/// │     • Raise the window briefly, then release always-on-top              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    // Initialize tracing (logging)
    init_tracing();

    info!("Starting Tally Desktop Calculator");

    // Build and run the Tauri app
    tauri::Builder::default()
        // Setup hook runs before the app starts
        .setup(|app| {
            let config = ConfigState::from_env();
            info!(title = %config.window_title, "Configuration loaded");

            let raise_on_launch = config.raise_on_launch;

            // Register state with Tauri
            app.manage(CalculatorState::new());
            app.manage(config);

            // Raise the window briefly so it never opens behind others,
            // then drop always-on-top so it behaves like a normal window
            if raise_on_launch {
                if let Some(window) = app.get_webview_window("main") {
                    if let Err(e) = window.set_always_on_top(true) {
                        warn!("Failed to raise window: {e}");
                    }
                    tauri::async_runtime::spawn(async move {
                        if let Err(e) = window.set_always_on_top(false) {
                            warn!("Failed to release always-on-top: {e}");
                        }
                    });
                }
            }

            info!("State initialized");
            Ok(())
        })
        // Register all commands
        .invoke_handler(tauri::generate_handler![
            // Keypad commands
            commands::keypad::press_button,
            commands::keypad::press_key,
            commands::keypad::get_display,
            // Config commands
            commands::config::get_config,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tally=trace` - Show trace for tally crates only
/// - Default: INFO level, DEBUG for tally crates
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tally=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
