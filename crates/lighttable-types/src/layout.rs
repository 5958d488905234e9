use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Lowest density the zoom control accepts.
pub const MIN_ZOOM: i32 = 1;
/// Highest density: thumbnails per row, or images shown side by side in culling.
pub const MAX_ZOOM: i32 = 25;

pub fn clamp_zoom(zoom: i32) -> i32 {
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Browsing layout of the lighttable screen.
///
/// `Preview` is a modal overlay on top of a resting layout. It can be
/// requested like any other layout but is never stored as the resting one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LayoutMode {
    #[default]
    Filemanager,
    Zoomable,
    Culling,
    CullingDynamic,
    Preview,
}

impl LayoutMode {
    pub const ALL: &'static [Self] = &[
        Self::Zoomable,
        Self::Filemanager,
        Self::Culling,
        Self::CullingDynamic,
        Self::Preview,
    ];

    /// Integer code written to the configuration store.
    pub fn code(self) -> i32 {
        match self {
            LayoutMode::Zoomable => 0,
            LayoutMode::Filemanager => 1,
            LayoutMode::Culling => 2,
            LayoutMode::CullingDynamic => 3,
            LayoutMode::Preview => 4,
        }
    }

    /// Decodes a persisted layout code.
    ///
    /// `Preview` is not a resting layout, so its code decodes to `None`
    /// just like an unknown one.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(LayoutMode::Zoomable),
            1 => Some(LayoutMode::Filemanager),
            2 => Some(LayoutMode::Culling),
            3 => Some(LayoutMode::CullingDynamic),
            _ => None,
        }
    }

    /// Layouts that can serve as the base to fall back to.
    pub fn is_base(self) -> bool {
        matches!(self, LayoutMode::Filemanager | LayoutMode::Zoomable)
    }

    pub fn is_culling(self) -> bool {
        matches!(self, LayoutMode::Culling | LayoutMode::CullingDynamic)
    }

    pub fn name(self) -> &'static str {
        match self {
            LayoutMode::Filemanager => "filemanager",
            LayoutMode::Zoomable => "zoomable",
            LayoutMode::Culling => "culling",
            LayoutMode::CullingDynamic => "culling_dynamic",
            LayoutMode::Preview => "preview",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown layout `{0}`")]
pub struct ParseLayoutError(pub String);

impl FromStr for LayoutMode {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LayoutMode::ALL
            .iter()
            .copied()
            .find(|layout| layout.name() == s)
            .ok_or_else(|| ParseLayoutError(s.to_string()))
    }
}

/// Which images culling and preview are allowed to browse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RestrictionScope {
    Selection,
    Collection,
    /// `Selection` when something is selected, otherwise `Collection`.
    /// Resolved by the overlay service.
    #[default]
    Auto,
}

impl fmt::Display for RestrictionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestrictionScope::Selection => write!(f, "Selection"),
            RestrictionScope::Collection => write!(f, "Collection"),
            RestrictionScope::Auto => write!(f, "Auto"),
        }
    }
}
