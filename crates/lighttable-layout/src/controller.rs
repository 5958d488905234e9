//! Layout state machine of the lighttable screen.

use crate::{env::Env, toolbar::ToolbarState};
use lighttable_types::{
    ActionEffect, CullingElement, LayoutControl, LayoutMode, MIN_ZOOM, PreviewElement,
    RestrictionScope, clamp_zoom, is_actuation,
};

/// Options that only matter for the layout being entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutEntry {
    /// Focus detection, used when entering preview.
    pub focus: bool,
    /// Browsing restriction, used when entering fixed culling.
    pub restriction: RestrictionScope,
}

impl LayoutEntry {
    pub fn with_focus(focus: bool) -> Self {
        Self {
            focus,
            ..Self::default()
        }
    }

    pub fn with_restriction(restriction: RestrictionScope) -> Self {
        Self {
            restriction,
            ..Self::default()
        }
    }
}

/// Owns the resting layout, the base layout to fall back to, and the zoom of
/// the lighttable screen.
///
/// Preview is an overlay tracked by [`crate::PreviewOverlay`]; the controller
/// only asks for it, so `layout()` is never `Preview`.
#[derive(Debug, Clone)]
pub struct LayoutController {
    layout: LayoutMode,
    base_layout: LayoutMode,
    current_zoom: i32,
    culling_restriction: RestrictionScope,
    toolbar: ToolbarState,
}

impl LayoutController {
    /// Restores the persisted layouts and seeds the zoom for the resting layout.
    pub fn load(env: &Env<'_>) -> Self {
        let layout = env.config.layout();
        let base_layout = env.config.base_layout();
        let current_zoom = derive_zoom(layout, env);

        tracing::debug!(%layout, %base_layout, current_zoom, "lighttable layout restored");

        let mut controller = Self {
            layout,
            base_layout,
            current_zoom,
            culling_restriction: RestrictionScope::Auto,
            toolbar: ToolbarState::default(),
        };
        controller.sync_toolbar(env);
        controller
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn base_layout(&self) -> LayoutMode {
        self.base_layout
    }

    pub fn current_zoom(&self) -> i32 {
        self.current_zoom
    }

    pub fn toolbar(&self) -> &ToolbarState {
        &self.toolbar
    }

    /// Restriction the fixed culling layout was last entered with. The culling
    /// view reads it when it builds its image list.
    pub fn culling_initial_restriction(&self) -> RestrictionScope {
        self.culling_restriction
    }

    pub(crate) fn reset_culling_restriction(&mut self) {
        self.culling_restriction = RestrictionScope::Auto;
    }

    pub fn request_layout(&mut self, env: &mut Env<'_>, target: LayoutMode) {
        self.request_layout_with(env, target, LayoutEntry::default());
    }

    /// The single state-changing entry point.
    pub fn request_layout_with(
        &mut self,
        env: &mut Env<'_>,
        target: LayoutMode,
        entry: LayoutEntry,
    ) {
        let wants_preview = target == LayoutMode::Preview;
        if wants_preview != env.overlay.is_preview_on() {
            env.overlay
                .set_preview(wants_preview, true, entry.focus, RestrictionScope::Auto);
        }

        // Preview leaves the layout underneath untouched.
        if wants_preview {
            self.sync_toolbar(env);
            return;
        }

        let prior = env.config.layout();
        self.layout = target;
        if target == LayoutMode::Culling {
            self.culling_restriction = entry.restriction;
        }

        if prior != target {
            self.current_zoom = derive_zoom(target, env);

            env.config.set_layout(target);
            if target.is_base() {
                self.base_layout = target;
                env.config.set_base_layout(target);
            }
            // Culling starts from the scope it was entered with, not the
            // one the toggle was last left at.
            if target == LayoutMode::Culling {
                env.overlay.set_restriction_scope(entry.restriction);
            }

            tracing::debug!(
                from = %prior,
                to = %target,
                zoom = self.current_zoom,
                "lighttable layout changed"
            );
        }

        // Re-entering the same layout still redraws to reset the framing.
        env.grid.request_redraw();
        self.sync_toolbar(env);
    }

    /// Sets thumbnails per row (file manager, zoomable) or images shown
    /// (fixed culling). Dynamic culling derives its density from the
    /// selection, so nothing is persisted there.
    pub fn set_zoom(&mut self, env: &mut Env<'_>, zoom: i32) {
        let zoom = clamp_zoom(zoom);

        match self.layout {
            LayoutMode::Culling => {
                env.config.set_culling_num_images(zoom);
                env.grid.request_redraw();
            }
            LayoutMode::Filemanager | LayoutMode::Zoomable => {
                env.config.set_images_in_row(zoom);
                env.grid.zoom_changed(self.current_zoom, zoom);
            }
            LayoutMode::CullingDynamic | LayoutMode::Preview => {}
        }

        self.current_zoom = zoom;
        self.sync_toolbar(env);
    }

    /// A toolbar toggle was clicked. `was_active` is its state before the
    /// click, `modifier` whether the control modifier was held.
    pub fn control_released(
        &mut self,
        env: &mut Env<'_>,
        control: LayoutControl,
        was_active: bool,
        modifier: bool,
    ) {
        match control {
            LayoutControl::Restriction => self.restriction_released(env, was_active),
            _ => self.layout_control_released(env, control, was_active, modifier),
        }
    }

    pub fn layout_control_released(
        &mut self,
        env: &mut Env<'_>,
        control: LayoutControl,
        was_active: bool,
        modifier: bool,
    ) {
        let request = if !was_active {
            match control {
                LayoutControl::Preview => {
                    Some((LayoutMode::Preview, LayoutEntry::with_focus(modifier)))
                }
                LayoutControl::CullingFixed => {
                    let restriction = if modifier {
                        RestrictionScope::Collection
                    } else {
                        RestrictionScope::Auto
                    };
                    Some((LayoutMode::Culling, LayoutEntry::with_restriction(restriction)))
                }
                LayoutControl::CullingDynamic => {
                    Some((LayoutMode::CullingDynamic, LayoutEntry::default()))
                }
                LayoutControl::Zoomable => Some((LayoutMode::Zoomable, LayoutEntry::default())),
                LayoutControl::Filemanager => {
                    Some((LayoutMode::Filemanager, LayoutEntry::default()))
                }
                LayoutControl::Restriction => {
                    not_a_layout_selector(control);
                    None
                }
            }
        } else {
            match control {
                LayoutControl::Preview => Some((self.layout, LayoutEntry::default())),
                LayoutControl::CullingFixed | LayoutControl::CullingDynamic => {
                    Some((self.base_layout, LayoutEntry::default()))
                }
                // The resting layouts cannot be switched off.
                LayoutControl::Filemanager | LayoutControl::Zoomable => None,
                LayoutControl::Restriction => {
                    not_a_layout_selector(control);
                    None
                }
            }
        };

        if let Some((target, entry)) = request {
            self.request_layout_with(env, target, entry);
        }
    }

    /// The restriction toggle was clicked: pressed limits browsing to the
    /// selection, released opens the whole collection.
    pub fn restriction_released(&mut self, env: &mut Env<'_>, was_active: bool) {
        let scope = if was_active {
            RestrictionScope::Collection
        } else {
            RestrictionScope::Selection
        };

        env.overlay.set_restriction_scope(scope);
        self.sync_toolbar(env);
    }

    /// Culling shortcut. Returns whether fixed culling is active afterwards.
    pub fn process_culling(
        &mut self,
        env: &mut Env<'_>,
        element: CullingElement,
        effect: ActionEffect,
        magnitude: f32,
    ) -> bool {
        if is_actuation(magnitude) {
            if !self.layout.is_culling() && effect != ActionEffect::On {
                let restriction = match element {
                    CullingElement::NoRestriction => RestrictionScope::Collection,
                    CullingElement::Normal => RestrictionScope::Auto,
                };
                self.request_layout_with(
                    env,
                    LayoutMode::Culling,
                    LayoutEntry::with_restriction(restriction),
                );
            } else if effect != ActionEffect::On {
                self.request_layout(env, self.base_layout);
            }

            self.sync_toolbar(env);
        }

        self.layout == LayoutMode::Culling
    }

    /// Preview shortcut. Returns whether the preview overlay is shown afterwards.
    pub fn process_preview(
        &mut self,
        env: &mut Env<'_>,
        element: PreviewElement,
        effect: ActionEffect,
        magnitude: f32,
    ) -> bool {
        if is_actuation(magnitude) {
            if env.overlay.is_preview_on() {
                if effect != ActionEffect::On {
                    self.request_layout(env, self.layout);
                }
            } else if effect != ActionEffect::Off {
                // Talks to the overlay directly: a transition always opens a
                // sticky preview, a held key must not.
                let sticky = effect == ActionEffect::HoldToggle;
                let focus = element == PreviewElement::FocusDetect;
                let restriction = if sticky && element == PreviewElement::NoRestriction {
                    RestrictionScope::Collection
                } else {
                    RestrictionScope::Auto
                };
                env.overlay.set_preview(true, sticky, focus, restriction);
            }

            self.sync_toolbar(env);
        }

        env.overlay.is_preview_on()
    }

    /// Re-derives the toolbar. Call after a collaborator changed on its own,
    /// e.g. the selection the restriction toggle follows.
    pub fn sync_toolbar(&mut self, env: &Env<'_>) {
        self.toolbar = ToolbarState::derive(
            self.layout,
            self.current_zoom,
            env.overlay.is_preview_on(),
            env.overlay.restriction_scope(),
        );
    }
}

fn derive_zoom(layout: LayoutMode, env: &Env<'_>) -> i32 {
    match layout {
        LayoutMode::CullingDynamic => {
            let selected = i32::try_from(env.selection.selected_count()).unwrap_or(i32::MAX);
            // Zero or one selected image gives no density to follow.
            match clamp_zoom(selected) {
                MIN_ZOOM => env.config.culling_num_images(),
                zoom => zoom,
            }
        }
        LayoutMode::Culling => env.config.culling_num_images(),
        LayoutMode::Filemanager | LayoutMode::Zoomable | LayoutMode::Preview => {
            env.config.images_in_row()
        }
    }
}

fn not_a_layout_selector(control: LayoutControl) {
    tracing::error!(?control, "control is not a layout selector, ignoring");
    debug_assert!(false, "{control:?} is not a layout selector");
}
