use env_logger::{Builder, Env};

/// Environment variable that overrides the configured log filter
pub const LOG_FILTER_ENV: &str = "RUST_LOG";

/// Logger builder honouring `filter_env` first, then `default_level` from the settings
pub fn logger_builder(filter_env: &str, default_level: &str) -> Builder {
    Builder::from_env(Env::new().filter_or(filter_env, default_level))
}
