use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::core::cmd::{Cmd, TuiCommand};

/// Command executor that forwards Elm commands to the host that owns the terminal
#[derive(Clone, Default)]
pub struct CmdExecutor {
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
}

impl CmdExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    pub fn has_tui_sender(&self) -> bool {
        self.tui_sender.is_some()
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::Tui(tui_cmd) => {
                if let Some(sender) = &self.tui_sender {
                    sender.send(tui_cmd.clone())?;
                } else {
                    log::warn!("{tui_cmd:?} ignored: no terminal attached");
                }
            }
        }
        Ok(())
    }

    /// Execute multiple commands in order, returning a description of each one
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut executed = Vec::with_capacity(commands.len());
        for cmd in commands {
            self.execute_command(cmd)?;
            executed.push(format!("{cmd:?}"));
        }
        Ok(executed)
    }
}
