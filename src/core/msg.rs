use serde::{Deserialize, Serialize};

pub mod input;
pub mod menu;
pub mod nav;
pub mod system;

use input::InputMsg;
use menu::MenuMsg;
use nav::NavMsg;
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function and are never raw terminal events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Router
    Nav(NavMsg),

    // Menu selection (delegated to MenuState)
    Menu(MenuMsg),

    // Field edits (delegated to the open CalculatorState)
    Input(InputMsg),
}
