mod config_manager;
mod config_serializer;
mod game_config;
mod validate;

pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use game_config::{BoardConfig, GameConfig, ReminderConfig};
pub use validate::Validate;
