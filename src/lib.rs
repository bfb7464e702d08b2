//! # pctui - Percentage calculators for the terminal
//!
//! Seven small calculators (percent of, increase, decrease, tip, margin,
//! discount, what percent of) behind a menu, built with Rust and Ratatui.
//! This library implements an Elm-like architecture for predictable state management.
//!
//! ## Architecture Overview
//!
//! - **Model** (`core::state`): application state
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure function that transforms state
//! - **Command** (`core::cmd`): side effects (terminal suspend, resize)
//! - **View** (`presentation::components`): UI rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use pctui::{
//!     core::msg::{input::InputMsg, nav::NavMsg},
//!     domain::{calculator::CalculatorKind, route::Route},
//!     update, AppState, Msg,
//! };
//!
//! let state = AppState::default();
//! let open = Msg::Nav(NavMsg::Navigate(Route::Calculator(CalculatorKind::Tip)));
//! let (mut state, _) = update(open, state);
//! for msg in ["50", "\t", "20"].concat().chars().map(|c| match c {
//!     '\t' => Msg::Input(InputMsg::NextField),
//!     c => Msg::Input(InputMsg::Insert(c)),
//! }) {
//!     state = update(msg, state).0;
//! }
//!
//! let line = state.calculator().and_then(|c| c.result_line());
//! assert_eq!(line.as_deref(), Some("Total with Tip: 60"));
//! ```
//!
//! ## Modules
//!
//! - [`domain`] - Formulas, number parsing/formatting, text fields, routes
//! - [`core`] - State, messages, update and translation
//! - [`presentation`] - Components, widgets, keybindings and styles
//! - [`infrastructure`] - CLI, configuration and terminal backends
//! - [`integration`] - Runtime and main loop

#![deny(warnings)]

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};
pub use domain::calculator::CalculatorKind;
pub use integration::{app_runner::AppRunner, runtime::ElmRuntime};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
