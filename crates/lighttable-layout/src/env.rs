use lighttable_config::ConfigStore;
use lighttable_types::RestrictionScope;

/// Reports how many images the user currently has selected.
pub trait SelectionQuery {
    fn selected_count(&self) -> usize;
}

/// Full-preview overlay and browsing restriction, owned by the view
/// coordinator above the layout controller.
pub trait PreviewOverlay {
    fn is_preview_on(&self) -> bool;

    /// `sticky` keeps the preview open after the triggering key is released.
    /// `focus` turns on focus detection.
    fn set_preview(&mut self, on: bool, sticky: bool, focus: bool, restriction: RestrictionScope);

    fn restriction_scope(&self) -> RestrictionScope;

    fn set_restriction_scope(&mut self, scope: RestrictionScope);
}

/// The thumbnail grid reacting to layout and zoom changes.
pub trait GridRenderer {
    fn request_redraw(&mut self);

    /// Thumbnails per row changed; lets the grid keep its anchor while relayouting.
    fn zoom_changed(&mut self, old: i32, new: i32);
}

/// Collaborators lent to the controller for the duration of one operation.
pub struct Env<'a> {
    pub config: &'a mut dyn ConfigStore,
    pub selection: &'a dyn SelectionQuery,
    pub overlay: &'a mut dyn PreviewOverlay,
    pub grid: &'a mut dyn GridRenderer,
}

impl<'a> Env<'a> {
    pub fn new(
        config: &'a mut dyn ConfigStore,
        selection: &'a dyn SelectionQuery,
        overlay: &'a mut dyn PreviewOverlay,
        grid: &'a mut dyn GridRenderer,
    ) -> Self {
        Self {
            config,
            selection,
            overlay,
            grid,
        }
    }

    pub fn is_preview_on(&self) -> bool {
        self.overlay.is_preview_on()
    }
}
