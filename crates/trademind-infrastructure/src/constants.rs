//! Infrastructure Constants

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "TRADEMIND";

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = "trademind.toml";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "TRADEMIND_LOG";
