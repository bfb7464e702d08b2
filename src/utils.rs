//! Process setup shared by the binary and the library:
//! file logging, the panic hook and the data/config directories.

pub mod logging;
pub mod panic;
pub mod paths;

// Setup and path helpers, reachable as `pctui::utils::*`
pub use logging::initialize_logging;
pub use panic::initialize_panic_handler;
pub use paths::{get_config_dir, get_data_dir, version};
