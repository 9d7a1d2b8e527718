pub mod config;
pub mod exports;
pub mod yaml;

// Re-export the assembler and serializer
pub use config::formats::clash::{assemble, assemble_with, serialize};

// Re-export the structured output view
pub use exports::proxy_to_clash::document_to_clash_config;
pub use yaml::proxy_group_output::ClashConfig;
