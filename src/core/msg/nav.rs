use serde::{Deserialize, Serialize};

use crate::domain::route::Route;

/// Router messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavMsg {
    /// Switch to a route. Entering a calculator starts with empty inputs.
    Navigate(Route),
    /// Return to the main menu
    Back,
}
