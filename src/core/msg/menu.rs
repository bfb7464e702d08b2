use serde::{Deserialize, Serialize};

/// Menu selection messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuMsg {
    SelectPrevious,
    SelectNext,
    Select(usize),
    /// Open the selected calculator
    Confirm,
}
