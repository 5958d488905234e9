pub mod config;
pub mod store;

pub use config::{
    APP_ID, CONFIG_VERSION, ConfigError, CosmicConfigStore, LighttableConfig, LighttableStore,
    config,
};
pub use store::{
    ConfigStore, DEFAULT_BASE_LAYOUT, DEFAULT_CULLING_NUM_IMAGES, DEFAULT_IMAGES_IN_ROW,
    DEFAULT_LAYOUT, MemoryConfigStore, keys,
};
