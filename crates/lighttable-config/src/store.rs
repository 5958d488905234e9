use lighttable_types::{LayoutMode, clamp_zoom};
use std::collections::HashMap;

/// Configuration keys used by the lighttable layout controller.
pub mod keys {
    pub const LAYOUT: &str = "layout";
    pub const BASE_LAYOUT: &str = "base_layout";
    pub const IMAGES_IN_ROW: &str = "images_in_row";
    pub const CULLING_NUM_IMAGES: &str = "culling_num_images";

    pub const ALL: &[&str] = &[LAYOUT, BASE_LAYOUT, IMAGES_IN_ROW, CULLING_NUM_IMAGES];
}

pub const DEFAULT_LAYOUT: LayoutMode = LayoutMode::Filemanager;
pub const DEFAULT_BASE_LAYOUT: LayoutMode = LayoutMode::Filemanager;
pub const DEFAULT_IMAGES_IN_ROW: i32 = 5;
pub const DEFAULT_CULLING_NUM_IMAGES: i32 = 2;

/// Integer key/value persistence.
///
/// Reads never fail: a missing or unreadable key yields the supplied default.
pub trait ConfigStore {
    fn get_int(&self, key: &str, default: i32) -> i32;

    fn set_int(&mut self, key: &str, value: i32);

    /// Persisted resting layout, `Filemanager` when unset or invalid.
    fn layout(&self) -> LayoutMode {
        LayoutMode::from_code(self.get_int(keys::LAYOUT, DEFAULT_LAYOUT.code()))
            .unwrap_or(DEFAULT_LAYOUT)
    }

    fn set_layout(&mut self, layout: LayoutMode) {
        self.set_int(keys::LAYOUT, layout.code());
    }

    /// Persisted base layout, always `Filemanager` or `Zoomable`.
    fn base_layout(&self) -> LayoutMode {
        LayoutMode::from_code(self.get_int(keys::BASE_LAYOUT, DEFAULT_BASE_LAYOUT.code()))
            .filter(|layout| layout.is_base())
            .unwrap_or(DEFAULT_BASE_LAYOUT)
    }

    fn set_base_layout(&mut self, layout: LayoutMode) {
        self.set_int(keys::BASE_LAYOUT, layout.code());
    }

    /// Thumbnails per row in the filemanager and zoomable layouts.
    fn images_in_row(&self) -> i32 {
        clamp_zoom(self.get_int(keys::IMAGES_IN_ROW, DEFAULT_IMAGES_IN_ROW))
    }

    fn set_images_in_row(&mut self, zoom: i32) {
        self.set_int(keys::IMAGES_IN_ROW, clamp_zoom(zoom));
    }

    /// Images shown side by side in the fixed culling layout.
    fn culling_num_images(&self) -> i32 {
        clamp_zoom(self.get_int(keys::CULLING_NUM_IMAGES, DEFAULT_CULLING_NUM_IMAGES))
    }

    fn set_culling_num_images(&mut self, zoom: i32) {
        self.set_int(keys::CULLING_NUM_IMAGES, clamp_zoom(zoom));
    }
}

/// Volatile store, used when no persistent backend is available and in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryConfigStore {
    values: HashMap<String, i32>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: i32) -> Self {
        self.values.insert(key.to_string(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<i32> {
        self.values.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

impl ConfigStore for MemoryConfigStore {
    fn get_int(&self, key: &str, default: i32) -> i32 {
        self.get(key).unwrap_or(default)
    }

    fn set_int(&mut self, key: &str, value: i32) {
        self.values.insert(key.to_string(), value);
    }
}
