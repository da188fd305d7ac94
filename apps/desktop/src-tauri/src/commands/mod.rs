//! # Tauri Commands Module
//!
//! All commands exposed to the frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── keypad.rs   ◄─── Token forwarding, display refresh
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                                   │
//! │                                                                         │
//! │  Frontend                                                               │
//! │  ────────                                                               │
//! │  import { invoke } from '@tauri-apps/api/core';                         │
//! │                                                                         │
//! │  const res = await invoke('press_button', { symbol: '×' });             │
//! │         │                                                               │
//! │         │ (IPC via WebView)                                             │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  #[tauri::command]                                                      │
//! │  fn press_button(                                                       │
//! │      calc: State<'_, CalculatorState>,  ◄── Injected by Tauri          │
//! │      symbol: String,                    ◄── From invoke params         │
//! │  ) -> Result<KeypadResponse, ApiError>                                  │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives: { display: "0", pendingOperator: "multiply", ... }  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the calculator
//! fn press_button(calc: State<'_, CalculatorState>, symbol: String)
//!
//! // Only needs configuration
//! fn get_config(config: State<'_, ConfigState>)
//! ```

pub mod config;
pub mod keypad;
