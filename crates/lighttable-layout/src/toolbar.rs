use lighttable_config::DEFAULT_IMAGES_IN_ROW;
use lighttable_types::{LayoutControl, LayoutMode, RestrictionScope};

/// Tooltip texts of the layout toolbar, localized by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tooltip {
    EnterFilemanager,
    EnterZoomable,
    EnterPreview,
    ExitPreview,
    EnterCullingFixed,
    EnterCullingDynamic,
    ExitCulling,
    LimitToSelection,
    AllowCollection,
}

/// What the layout toolbar should show for the current controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarState {
    /// The single layout selector drawn as pressed.
    pub active: LayoutControl,
    pub preview_tooltip: Tooltip,
    pub culling_fixed_tooltip: Tooltip,
    pub culling_dynamic_tooltip: Tooltip,
    pub zoom: i32,
    pub zoom_sensitive: bool,
    pub restriction_visible: bool,
    /// Always false while hidden, so the control never flashes as pressed
    /// when it is shown again.
    pub restriction_active: bool,
    pub restriction_tooltip: Tooltip,
}

impl ToolbarState {
    pub fn derive(
        layout: LayoutMode,
        zoom: i32,
        preview: bool,
        restriction: RestrictionScope,
    ) -> Self {
        let active = if preview {
            LayoutControl::Preview
        } else {
            match layout {
                LayoutMode::CullingDynamic => LayoutControl::CullingDynamic,
                LayoutMode::Culling => LayoutControl::CullingFixed,
                LayoutMode::Zoomable => LayoutControl::Zoomable,
                LayoutMode::Filemanager | LayoutMode::Preview => LayoutControl::Filemanager,
            }
        };

        let preview_tooltip = if preview {
            Tooltip::ExitPreview
        } else {
            Tooltip::EnterPreview
        };

        let culling_fixed_tooltip = if layout == LayoutMode::Culling && !preview {
            Tooltip::ExitCulling
        } else {
            Tooltip::EnterCullingFixed
        };

        let culling_dynamic_tooltip = if layout == LayoutMode::CullingDynamic && !preview {
            Tooltip::ExitCulling
        } else {
            Tooltip::EnterCullingDynamic
        };

        let restriction_visible = layout == LayoutMode::Culling || preview;
        let restriction_active = restriction_visible && restriction == RestrictionScope::Selection;
        let restriction_tooltip = if restriction_active {
            Tooltip::AllowCollection
        } else {
            Tooltip::LimitToSelection
        };

        Self {
            active,
            preview_tooltip,
            culling_fixed_tooltip,
            culling_dynamic_tooltip,
            zoom,
            zoom_sensitive: layout != LayoutMode::CullingDynamic && !preview,
            restriction_visible,
            restriction_active,
            restriction_tooltip,
        }
    }

    pub fn is_active(&self, control: LayoutControl) -> bool {
        match control {
            LayoutControl::Restriction => self.restriction_active,
            other => self.active == other,
        }
    }

    pub fn tooltip(&self, control: LayoutControl) -> Tooltip {
        match control {
            LayoutControl::Filemanager => Tooltip::EnterFilemanager,
            LayoutControl::Zoomable => Tooltip::EnterZoomable,
            LayoutControl::CullingFixed => self.culling_fixed_tooltip,
            LayoutControl::CullingDynamic => self.culling_dynamic_tooltip,
            LayoutControl::Preview => self.preview_tooltip,
            LayoutControl::Restriction => self.restriction_tooltip,
        }
    }
}

impl Default for ToolbarState {
    fn default() -> Self {
        Self::derive(
            LayoutMode::Filemanager,
            DEFAULT_IMAGES_IN_ROW,
            false,
            RestrictionScope::Auto,
        )
    }
}
