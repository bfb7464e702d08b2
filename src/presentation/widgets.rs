//! Reusable UI widgets
//!
//! Widgets shared by the screen components.

pub mod input_field;

pub use input_field::InputFieldWidget;
