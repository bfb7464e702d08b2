//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::core::state::{AppState, Screen};

pub mod calculator;
pub mod menu;
pub mod status_bar;

pub use calculator::CalculatorComponent;
pub use menu::MenuComponent;
pub use status_bar::StatusBarComponent;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub menu: MenuComponent,
    pub calculator: CalculatorComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    /// Create a new component collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the current screen with the status bar below it
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let [body, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        match &state.screen {
            Screen::Menu => self.menu.view(state, frame, body),
            Screen::Calculator(calculator) => self.calculator.view(state, calculator, frame, body),
        }

        self.status_bar.view(state, frame, status);
    }
}
