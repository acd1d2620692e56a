//! Configuration module
//!
//! Load-only user settings: defaults for the editor plus the initial
//! window geometry. The application never writes settings back to disk.

mod persistence;
mod settings;

pub use persistence::{get_config_file_path, load_config};
pub use settings::{Settings, WindowSize};
