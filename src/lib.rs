pub mod generator;
pub mod interfaces;
pub mod models;
pub mod parser;
pub mod settings;
pub mod utils;
#[cfg(feature = "web-api")]
pub mod web_handlers;

// Re-export the main proxy types for easier access
pub use models::{ConfigDocument, Proxy, ProxyKind, ProxyType};

// Re-export the conversion entry points
pub use generator::{assemble, assemble_with, serialize};
pub use interfaces::{ConvertError, ConvertRequest};
pub use parser::{normalize, DecodeError};
pub use settings::Settings;
