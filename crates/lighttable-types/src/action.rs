use serde::{Deserialize, Serialize};
use std::fmt;

/// Toggle controls of the lighttable layout toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutControl {
    Filemanager,
    Zoomable,
    CullingFixed,
    CullingDynamic,
    Preview,
    Restriction,
}

impl LayoutControl {
    /// Layout selector controls, in toolbar order.
    pub const LAYOUTS: &'static [Self] = &[
        Self::Filemanager,
        Self::Zoomable,
        Self::CullingFixed,
        Self::CullingDynamic,
        Self::Preview,
    ];

    pub fn icon_name(self) -> &'static str {
        match self {
            LayoutControl::Filemanager => "view-grid-symbolic",
            LayoutControl::Zoomable => "zoom-in-symbolic",
            LayoutControl::CullingFixed => "view-dual-symbolic",
            LayoutControl::CullingDynamic => "view-paged-symbolic",
            LayoutControl::Preview => "view-fullscreen-symbolic",
            LayoutControl::Restriction => "changes-prevent-symbolic",
        }
    }
}

/// How a hold-capable shortcut was actuated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ActionEffect {
    /// Momentary press; the matching release arrives as `Off`.
    #[default]
    Hold,
    /// Activate and keep on.
    On,
    /// Activate and keep off.
    Off,
    Toggle,
    /// Toggle on a short tap, momentary on a long press.
    HoldToggle,
}

impl fmt::Display for ActionEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionEffect::Hold => write!(f, "hold"),
            ActionEffect::On => write!(f, "on"),
            ActionEffect::Off => write!(f, "off"),
            ActionEffect::Toggle => write!(f, "toggle"),
            ActionEffect::HoldToggle => write!(f, "hold toggle"),
        }
    }
}

/// Variants of the culling shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CullingElement {
    #[default]
    Normal,
    NoRestriction,
}

/// Variants of the preview shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PreviewElement {
    #[default]
    Normal,
    FocusDetect,
    NoRestriction,
}

/// Whether a shortcut magnitude asks for an actual state change.
///
/// Zero and NaN are read-only polls, used by input devices to query the
/// current state without acting on it.
pub fn is_actuation(magnitude: f32) -> bool {
    magnitude != 0.0 && !magnitude.is_nan()
}
