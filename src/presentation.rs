//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Screen components (menu, calculator, status bar)
//! - Reusable widgets
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod widgets;
