use crate::store::{
    ConfigStore, DEFAULT_BASE_LAYOUT, DEFAULT_CULLING_NUM_IMAGES, DEFAULT_IMAGES_IN_ROW,
    DEFAULT_LAYOUT, MemoryConfigStore, keys,
};
use cosmic::cosmic_config::{self, Config, ConfigGet, ConfigSet, CosmicConfigEntry};
use serde::{Deserialize, Serialize};

pub const CONFIG_VERSION: u64 = 1;
pub const APP_ID: &str = "org.codeberg.bhh32.Lighttable";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to open configuration: {0}")]
    Open(#[from] cosmic_config::Error),
}

/// Snapshot of every persisted lighttable value, as raw integer codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LighttableConfig {
    pub layout: i32,
    pub base_layout: i32,
    pub images_in_row: i32,
    pub culling_num_images: i32,
}

impl Default for LighttableConfig {
    fn default() -> Self {
        Self {
            layout: DEFAULT_LAYOUT.code(),
            base_layout: DEFAULT_BASE_LAYOUT.code(),
            images_in_row: DEFAULT_IMAGES_IN_ROW,
            culling_num_images: DEFAULT_CULLING_NUM_IMAGES,
        }
    }
}

impl LighttableConfig {
    fn field_mut(&mut self, key: &str) -> Option<&mut i32> {
        match key {
            keys::LAYOUT => Some(&mut self.layout),
            keys::BASE_LAYOUT => Some(&mut self.base_layout),
            keys::IMAGES_IN_ROW => Some(&mut self.images_in_row),
            keys::CULLING_NUM_IMAGES => Some(&mut self.culling_num_images),
            _ => None,
        }
    }

    fn field(&self, key: &str) -> Option<i32> {
        match key {
            keys::LAYOUT => Some(self.layout),
            keys::BASE_LAYOUT => Some(self.base_layout),
            keys::IMAGES_IN_ROW => Some(self.images_in_row),
            keys::CULLING_NUM_IMAGES => Some(self.culling_num_images),
            _ => None,
        }
    }

    /// Copies every value into a volatile store.
    pub fn to_store(&self) -> MemoryConfigStore {
        keys::ALL
            .iter()
            .filter_map(|key| self.field(key).map(|value| (*key, value)))
            .fold(MemoryConfigStore::new(), |store, (key, value)| {
                store.with(key, value)
            })
    }
}

impl CosmicConfigEntry for LighttableConfig {
    const VERSION: u64 = CONFIG_VERSION;

    fn write_entry(&self, config: &cosmic_config::Config) -> Result<(), cosmic_config::Error> {
        config.set(keys::LAYOUT, self.layout)?;
        config.set(keys::BASE_LAYOUT, self.base_layout)?;
        config.set(keys::IMAGES_IN_ROW, self.images_in_row)?;
        config.set(keys::CULLING_NUM_IMAGES, self.culling_num_images)?;
        Ok(())
    }

    fn get_entry(
        config: &cosmic_config::Config,
    ) -> Result<Self, (Vec<cosmic_config::Error>, Self)> {
        let mut errors = Vec::new();
        let mut cfg = LighttableConfig::default();

        macro_rules! get_field {
            ($name:expr, $field:ident) => {
                match config.get::<i32>($name) {
                    Ok(val) => cfg.$field = val,
                    Err(e) => errors.push(e),
                }
            };
        }

        get_field!(keys::LAYOUT, layout);
        get_field!(keys::BASE_LAYOUT, base_layout);
        get_field!(keys::IMAGES_IN_ROW, images_in_row);
        get_field!(keys::CULLING_NUM_IMAGES, culling_num_images);

        if errors.is_empty() {
            Ok(cfg)
        } else {
            Err((errors, cfg))
        }
    }

    fn update_keys<T: AsRef<str>>(
        &mut self,
        config: &cosmic_config::Config,
        changed_keys: &[T],
    ) -> (Vec<cosmic_config::Error>, Vec<&'static str>) {
        let mut errors = Vec::new();
        let mut updated = Vec::new();

        for key in changed_keys {
            let Some(name) = keys::ALL.iter().find(|name| **name == key.as_ref()) else {
                continue;
            };

            match config.get::<i32>(name) {
                Ok(val) => {
                    if let Some(field) = self.field_mut(name) {
                        *field = val;
                    }
                    updated.push(*name);
                }
                Err(e) => errors.push(e),
            }
        }

        (errors, updated)
    }
}

/// Store backed by cosmic-config, with an in-memory copy of every value.
///
/// Reads are served from the copy. Writes update the copy first, so a failed
/// disk write never makes reads disagree with what the controller last stored.
pub struct CosmicConfigStore {
    handler: Config,
    values: LighttableConfig,
}

impl CosmicConfigStore {
    pub fn open() -> Result<Self, ConfigError> {
        let handler = config()?;
        let values = match LighttableConfig::get_entry(&handler) {
            Ok(values) => values,
            Err((errors, values)) => {
                // Missing keys on first start are expected.
                tracing::debug!("lighttable config incomplete: {} key(s) unreadable", errors.len());
                values
            }
        };

        Ok(Self { handler, values })
    }

    /// Re-reads keys changed by another writer. Returns the keys that changed.
    pub fn reload<T: AsRef<str>>(&mut self, changed_keys: &[T]) -> Vec<&'static str> {
        let (errors, updated) = self.values.update_keys(&self.handler, changed_keys);
        for err in errors {
            tracing::warn!("failed to reload lighttable config: {err}");
        }
        updated
    }

    pub fn flush(&self) {
        if let Err(err) = self.values.write_entry(&self.handler) {
            tracing::warn!("failed to write lighttable config: {err}");
        }
    }
}

impl ConfigStore for CosmicConfigStore {
    fn get_int(&self, key: &str, default: i32) -> i32 {
        self.values.field(key).unwrap_or(default)
    }

    fn set_int(&mut self, key: &str, value: i32) {
        let Some(field) = self.values.field_mut(key) else {
            tracing::warn!("ignoring unknown lighttable config key `{key}`");
            return;
        };
        *field = value;

        if let Err(err) = self.handler.set(key, value) {
            tracing::warn!("failed to persist `{key}`: {err}");
        }
    }
}

pub fn config() -> Result<Config, cosmic_config::Error> {
    Config::new(APP_ID, CONFIG_VERSION)
}

/// The store the application runs on: cosmic-config when it can be opened,
/// otherwise defaults kept in memory for the session.
pub enum LighttableStore {
    Persistent(CosmicConfigStore),
    Volatile(MemoryConfigStore),
}

impl LighttableStore {
    pub fn open() -> Self {
        match CosmicConfigStore::open() {
            Ok(store) => Self::Persistent(store),
            Err(err) => {
                tracing::warn!("{err}, layout changes will not be saved");
                Self::Volatile(LighttableConfig::default().to_store())
            }
        }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, Self::Persistent(_))
    }

    pub fn reload<T: AsRef<str>>(&mut self, changed_keys: &[T]) -> Vec<&'static str> {
        match self {
            Self::Persistent(store) => store.reload(changed_keys),
            Self::Volatile(_) => Vec::new(),
        }
    }

    pub fn flush(&self) {
        if let Self::Persistent(store) = self {
            store.flush();
        }
    }
}

impl ConfigStore for LighttableStore {
    fn get_int(&self, key: &str, default: i32) -> i32 {
        match self {
            Self::Persistent(store) => store.get_int(key, default),
            Self::Volatile(store) => store.get_int(key, default),
        }
    }

    fn set_int(&mut self, key: &str, value: i32) {
        match self {
            Self::Persistent(store) => store.set_int(key, value),
            Self::Volatile(store) => store.set_int(key, value),
        }
    }
}
