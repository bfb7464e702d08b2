//! Integration layer
//!
//! Connects the pure Elm core to the terminal:
//! - `ElmRuntime`: message queues and the update cycle
//! - `CmdExecutor`: forwards commands to the host
//! - `Renderer` and `AppRunner`: drawing and the main event loop
//! - `oneshot`: evaluation without a terminal

pub mod app_runner;
pub mod cmd_executor;
pub mod oneshot;
pub mod renderer;
pub mod runtime;
