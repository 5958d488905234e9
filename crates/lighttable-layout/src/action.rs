use crate::{controller::LayoutController, env::Env};
use lighttable_types::{ActionEffect, CullingElement, LayoutMode, PreviewElement};

/// Discrete layout shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LighttableAction {
    ToggleFilemanager,
    ToggleZoomable,
    ToggleCullingDynamic,
    CycleCullingZoomMode,
    ToggleRestriction,
    ExitLayout,
}

impl LighttableAction {
    pub const ALL: &'static [Self] = &[
        Self::ToggleFilemanager,
        Self::ToggleZoomable,
        Self::ToggleCullingDynamic,
        Self::CycleCullingZoomMode,
        Self::ToggleRestriction,
        Self::ExitLayout,
    ];

    /// Stable identifier for remapping shortcuts.
    pub fn id(self) -> &'static str {
        match self {
            LighttableAction::ToggleFilemanager => "toggle-filemanager-layout",
            LighttableAction::ToggleZoomable => "toggle-zoomable-layout",
            LighttableAction::ToggleCullingDynamic => "toggle-culling-dynamic-mode",
            LighttableAction::CycleCullingZoomMode => "toggle-culling-zoom-mode",
            LighttableAction::ToggleRestriction => "toggle-culling-restricted",
            LighttableAction::ExitLayout => "exit-current-layout",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|action| action.id() == id)
    }
}

/// Shortcuts that can be held, toggled, or held as a sticky toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MomentaryAction {
    Culling(CullingElement),
    Preview(PreviewElement),
}

impl MomentaryAction {
    pub const ALL: &'static [Self] = &[
        Self::Culling(CullingElement::Normal),
        Self::Culling(CullingElement::NoRestriction),
        Self::Preview(PreviewElement::Normal),
        Self::Preview(PreviewElement::FocusDetect),
        Self::Preview(PreviewElement::NoRestriction),
    ];

    pub fn id(self) -> &'static str {
        match self {
            MomentaryAction::Culling(CullingElement::Normal) => "culling",
            MomentaryAction::Culling(CullingElement::NoRestriction) => "culling-no-restriction",
            MomentaryAction::Preview(PreviewElement::Normal) => "preview",
            MomentaryAction::Preview(PreviewElement::FocusDetect) => "preview-focus-detection",
            MomentaryAction::Preview(PreviewElement::NoRestriction) => "preview-no-restriction",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|action| action.id() == id)
    }
}

impl LayoutController {
    pub fn perform(&mut self, env: &mut Env<'_>, action: LighttableAction) {
        tracing::trace!(action = action.id(), "lighttable shortcut");

        match action {
            LighttableAction::ToggleFilemanager => {
                self.request_layout(env, LayoutMode::Filemanager);
            }
            LighttableAction::ToggleZoomable => self.request_layout(env, LayoutMode::Zoomable),
            LighttableAction::ToggleCullingDynamic => {
                if self.layout().is_culling() {
                    self.request_layout(env, self.base_layout());
                } else {
                    self.request_layout(env, LayoutMode::CullingDynamic);
                }
                env.grid.request_redraw();
            }
            LighttableAction::CycleCullingZoomMode => match self.layout() {
                LayoutMode::Culling => self.request_layout(env, LayoutMode::CullingDynamic),
                LayoutMode::CullingDynamic => {
                    self.reset_culling_restriction();
                    self.request_layout(env, LayoutMode::Culling);
                }
                _ => {}
            },
            LighttableAction::ToggleRestriction => {
                if self.layout() == LayoutMode::Culling || env.is_preview_on() {
                    let was_active = self.toolbar().restriction_active;
                    self.restriction_released(env, was_active);
                }
            }
            LighttableAction::ExitLayout => {
                if env.is_preview_on() {
                    self.request_layout(env, self.layout());
                } else if self.layout() != self.base_layout() {
                    self.request_layout(env, self.base_layout());
                }
            }
        }
    }

    /// Routes a momentary shortcut to its dispatcher. Returns the state the
    /// shortcut reflects: fixed culling active, or preview shown.
    pub fn perform_momentary(
        &mut self,
        env: &mut Env<'_>,
        action: MomentaryAction,
        effect: ActionEffect,
        magnitude: f32,
    ) -> bool {
        tracing::trace!(action = action.id(), %effect, magnitude, "lighttable momentary shortcut");

        match action {
            MomentaryAction::Culling(element) => {
                self.process_culling(env, element, effect, magnitude)
            }
            MomentaryAction::Preview(element) => {
                self.process_preview(env, element, effect, magnitude)
            }
        }
    }
}
