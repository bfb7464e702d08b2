pub mod calculator;
pub mod menu;
pub mod system;

use crate::{
    domain::route::Route, infrastructure::config::Config, presentation::config::Mode,
};
use calculator::CalculatorState;
use menu::MenuState;
use system::SystemState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub screen: Screen,
    pub menu: MenuState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

/// The screen currently displayed. A calculator's inputs live inside its
/// variant, so leaving the screen drops them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Menu,
    Calculator(CalculatorState),
}

impl AppState {
    pub fn new_with_config(config: Config) -> Self {
        Self {
            config: ConfigState { config },
            ..Default::default()
        }
    }

    pub fn route(&self) -> Route {
        match &self.screen {
            Screen::Menu => Route::Menu,
            Screen::Calculator(calculator) => Route::Calculator(calculator.kind),
        }
    }

    /// Keybinding context for the current screen
    pub fn mode(&self) -> Mode {
        match self.screen {
            Screen::Menu => Mode::Menu,
            Screen::Calculator(_) => Mode::Calculator,
        }
    }

    pub fn calculator(&self) -> Option<&CalculatorState> {
        match &self.screen {
            Screen::Calculator(calculator) => Some(calculator),
            Screen::Menu => None,
        }
    }

    pub fn calculator_mut(&mut self) -> Option<&mut CalculatorState> {
        match &mut self.screen {
            Screen::Calculator(calculator) => Some(calculator),
            Screen::Menu => None,
        }
    }
}
