// Re-export types and implementations
pub mod file_settings;
pub mod settings_struct;

pub use file_settings::{CommonSettings, FileSettings, ServerSettings};
pub use settings_struct::{
    override_listen, update_settings_from_content, update_settings_from_file, Settings, GLOBAL,
};
