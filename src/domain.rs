//! Domain logic
//!
//! This module contains the calculator logic, independent of the terminal:
//! - Calculator kinds and their formulas
//! - Operand parsing and result formatting
//! - Editable input fields
//! - Routes between the menu and the calculators

pub mod calculator;
pub mod input;
pub mod number;
pub mod route;
