pub mod action;
pub mod layout;

pub use action::{ActionEffect, CullingElement, LayoutControl, PreviewElement, is_actuation};
pub use layout::{LayoutMode, MAX_ZOOM, MIN_ZOOM, ParseLayoutError, RestrictionScope, clamp_zoom};
