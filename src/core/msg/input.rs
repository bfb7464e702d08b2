use serde::{Deserialize, Serialize};

/// Edits applied to the focused field of the current calculator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputMsg {
    Insert(char),
    Paste(String),
    DeleteBackward,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    NextField,
    PrevField,
    ClearField,
    ClearAll,
}

impl InputMsg {
    /// Whether the message can change the field texts (and so the result)
    pub fn edits_text(&self) -> bool {
        matches!(
            self,
            InputMsg::Insert(_)
                | InputMsg::Paste(_)
                | InputMsg::DeleteBackward
                | InputMsg::DeleteForward
                | InputMsg::ClearField
                | InputMsg::ClearAll
        )
    }
}
