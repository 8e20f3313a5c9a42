pub const DEFAULT_CONFIG_FILE: &str = "connect_four_config.yaml";
pub const LOG_PREFIX: &str = "Server";
