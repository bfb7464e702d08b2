use serde::{Deserialize, Serialize};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
    Suspend,
    Resume,
}

/// Elm-like command definitions
/// Represents side effects the pure update function asks the runner to perform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // UI-related commands
    Tui(TuiCommand),
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cmd_serialization() -> Result<()> {
        let cmd = Cmd::Tui(TuiCommand::Resize {
            width: 80,
            height: 24,
        });
        let serialized = serde_json::to_string(&cmd)?;
        assert_eq!(serialized, r#"{"Tui":{"Resize":{"width":80,"height":24}}}"#);
        assert_eq!(serde_json::from_str::<Cmd>(&serialized)?, cmd);
        Ok(())
    }
}
