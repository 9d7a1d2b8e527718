//! Settings module for the converter
//!
//! Holds the global configuration: server address, fetch behaviour and the
//! general block written into every generated Clash config.

pub mod settings;

// Re-export settings struct and functions
pub use settings::settings_struct::{
    override_listen, update_settings_from_content, update_settings_from_file, Settings,
};
