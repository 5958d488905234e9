mod common;

use common::{Event, Harness};
use lighttable_config::{ConfigStore, MemoryConfigStore, keys};
use lighttable_layout::{LighttableAction, LayoutEntry};
use lighttable_types::{
    ActionEffect, CullingElement, LayoutControl, LayoutMode, PreviewElement, RestrictionScope,
};

#[test]
fn test_layout_change_persists_before_redraw() {
    let mut h = Harness::new();
    let mut controller = h.controller();

    controller.request_layout(&mut h.env(), LayoutMode::Zoomable);

    assert_eq!(
        h.take(),
        vec![
            Event::SetInt(keys::LAYOUT.to_string(), LayoutMode::Zoomable.code()),
            Event::SetInt(keys::BASE_LAYOUT.to_string(), LayoutMode::Zoomable.code()),
            Event::Redraw,
        ]
    );
    assert_eq!(controller.base_layout(), LayoutMode::Zoomable);
}

#[test]
fn test_culling_does_not_touch_base_layout() {
    let mut h = Harness::new();
    let mut controller = h.controller();

    controller.request_layout(&mut h.env(), LayoutMode::Culling);

    assert_eq!(
        h.take(),
        vec![
            Event::SetInt(keys::LAYOUT.to_string(), LayoutMode::Culling.code()),
            Event::SetRestriction(RestrictionScope::Auto),
            Event::Redraw,
        ]
    );
    assert_eq!(controller.base_layout(), LayoutMode::Filemanager);
    assert_eq!(controller.current_zoom(), 2);
}

#[test]
fn test_rerequesting_same_layout_only_redraws() {
    let mut h = Harness::new();
    let mut controller = h.controller();
    controller.request_layout(&mut h.env(), LayoutMode::Culling);
    controller.set_zoom(&mut h.env(), 6);
    let before = (
        controller.layout(),
        controller.base_layout(),
        controller.current_zoom(),
    );
    h.take();

    controller.request_layout(&mut h.env(), LayoutMode::Culling);

    assert_eq!(h.take(), vec![Event::Redraw]);
    assert_eq!(
        (
            controller.layout(),
            controller.base_layout(),
            controller.current_zoom()
        ),
        before
    );
}

#[test]
fn test_dynamic_culling_without_selection_uses_persisted_density() {
    let mut h = Harness::with_config(MemoryConfigStore::new().with(keys::CULLING_NUM_IMAGES, 3));
    h.selection.0 = 0;
    let mut controller = h.controller();

    controller.request_layout(&mut h.env(), LayoutMode::CullingDynamic);
    assert_eq!(controller.current_zoom(), 3);
}

#[test]
fn test_dynamic_culling_with_single_selection_uses_persisted_density() {
    let mut h = Harness::with_config(MemoryConfigStore::new().with(keys::CULLING_NUM_IMAGES, 4));
    h.selection.0 = 1;
    let mut controller = h.controller();

    controller.request_layout(&mut h.env(), LayoutMode::CullingDynamic);
    assert_eq!(controller.current_zoom(), 4);
}

#[test]
fn test_dynamic_culling_follows_selection() {
    let mut h = Harness::new();
    h.selection.0 = 5;
    let mut controller = h.controller();

    controller.request_layout(&mut h.env(), LayoutMode::CullingDynamic);
    assert_eq!(controller.current_zoom(), 5);

    controller.request_layout(&mut h.env(), LayoutMode::Filemanager);
    h.selection.0 = 500;
    controller.request_layout(&mut h.env(), LayoutMode::CullingDynamic);
    assert_eq!(controller.current_zoom(), lighttable_types::MAX_ZOOM);
}

#[test]
fn test_fixed_culling_with_modifier_restricts_to_collection() {
    let mut h = Harness::new();
    let mut controller = h.controller();
    assert_eq!(controller.layout(), LayoutMode::Filemanager);
    assert_eq!(controller.base_layout(), LayoutMode::Filemanager);

    controller.control_released(&mut h.env(), LayoutControl::CullingFixed, false, true);
    assert_eq!(controller.layout(), LayoutMode::Culling);
    assert_eq!(
        controller.culling_initial_restriction(),
        RestrictionScope::Collection
    );
    assert!(controller.toolbar().is_active(LayoutControl::CullingFixed));

    controller.control_released(&mut h.env(), LayoutControl::CullingFixed, true, false);
    assert_eq!(controller.layout(), LayoutMode::Filemanager);
}

#[test]
fn test_fixed_culling_without_modifier_is_auto() {
    let mut h = Harness::new();
    let mut controller = h.controller();

    controller.request_layout_with(
        &mut h.env(),
        LayoutMode::Culling,
        LayoutEntry::with_restriction(RestrictionScope::Collection),
    );
    controller.request_layout(&mut h.env(), LayoutMode::Filemanager);
    controller.control_released(&mut h.env(), LayoutControl::CullingFixed, false, false);

    assert_eq!(controller.culling_initial_restriction(), RestrictionScope::Auto);
}

#[test]
fn test_ctrl_click_culling_after_restriction_toggle_opens_collection() {
    let mut h = Harness::new();
    h.selection.0 = 3;
    let mut controller = h.controller();
    controller.control_released(&mut h.env(), LayoutControl::CullingFixed, false, false);
    controller.control_released(&mut h.env(), LayoutControl::Restriction, false, false);
    assert!(controller.toolbar().restriction_active);
    controller.control_released(&mut h.env(), LayoutControl::CullingFixed, true, false);
    h.take();

    controller.control_released(&mut h.env(), LayoutControl::CullingFixed, false, true);

    assert_eq!(h.overlay.restriction, RestrictionScope::Collection);
    assert!(!controller.toolbar().restriction_active);
    assert_eq!(
        h.take(),
        vec![
            Event::SetInt(keys::LAYOUT.to_string(), LayoutMode::Culling.code()),
            Event::SetRestriction(RestrictionScope::Collection),
            Event::Redraw,
        ]
    );
}

#[test]
fn test_leaving_dynamic_culling_falls_back_to_base_layout() {
    let mut h = Harness::new();
    let mut controller = h.controller();
    controller.control_released(&mut h.env(), LayoutControl::Zoomable, false, false);
    controller.control_released(&mut h.env(), LayoutControl::CullingFixed, false, false);
    controller.perform(&mut h.env(), LighttableAction::CycleCullingZoomMode);
    assert_eq!(controller.layout(), LayoutMode::CullingDynamic);

    controller.control_released(&mut h.env(), LayoutControl::CullingDynamic, true, false);
    assert_eq!(controller.layout(), LayoutMode::Zoomable);
}

#[test]
fn test_hold_preview_from_zoomable_then_release() {
    let mut h = Harness::new();
    let mut controller = h.controller();
    controller.request_layout(&mut h.env(), LayoutMode::Zoomable);
    h.take();

    let shown = controller.process_preview(
        &mut h.env(),
        PreviewElement::Normal,
        ActionEffect::Hold,
        1.0,
    );
    assert!(shown);
    assert!(!h.overlay.sticky);
    assert_eq!(
        h.take(),
        vec![Event::SetPreview {
            on: true,
            sticky: false,
            focus: false,
            restriction: RestrictionScope::Auto,
        }]
    );

    let shown = controller.process_preview(
        &mut h.env(),
        PreviewElement::Normal,
        ActionEffect::Off,
        1.0,
    );
    assert!(!shown);
    assert_eq!(controller.layout(), LayoutMode::Zoomable);
    assert_eq!(
        h.take(),
        vec![
            Event::SetPreview {
                on: false,
                sticky: true,
                focus: false,
                restriction: RestrictionScope::Auto,
            },
            Event::Redraw,
        ]
    );
}

#[test]
fn test_hold_on_keeps_preview_open() {
    let mut h = Harness::new();
    let mut controller = h.controller();
    controller.request_layout(&mut h.env(), LayoutMode::Preview);

    let shown = controller.process_preview(
        &mut h.env(),
        PreviewElement::Normal,
        ActionEffect::On,
        1.0,
    );
    assert!(shown);
}

#[test]
fn test_off_does_not_open_preview() {
    let mut h = Harness::new();
    let mut controller = h.controller();

    let shown = controller.process_preview(
        &mut h.env(),
        PreviewElement::Normal,
        ActionEffect::Off,
        1.0,
    );
    assert!(!shown);
    assert!(h.take().is_empty());
}

#[test]
fn test_sticky_preview_without_restriction() {
    let mut h = Harness::new();
    let mut controller = h.controller();

    controller.process_preview(
        &mut h.env(),
        PreviewElement::NoRestriction,
        ActionEffect::HoldToggle,
        1.0,
    );
    assert_eq!(
        h.take(),
        vec![Event::SetPreview {
            on: true,
            sticky: true,
            focus: false,
            restriction: RestrictionScope::Collection,
        }]
    );
}

#[test]
fn test_held_preview_ignores_no_restriction() {
    let mut h = Harness::new();
    let mut controller = h.controller();

    controller.process_preview(
        &mut h.env(),
        PreviewElement::NoRestriction,
        ActionEffect::Hold,
        1.0,
    );
    assert_eq!(
        h.take(),
        vec![Event::SetPreview {
            on: true,
            sticky: false,
            focus: false,
            restriction: RestrictionScope::Auto,
        }]
    );
}

#[test]
fn test_culling_shortcut_enters_and_leaves() {
    let mut h = Harness::new();
    let mut controller = h.controller();

    assert!(controller.process_culling(
        &mut h.env(),
        CullingElement::NoRestriction,
        ActionEffect::Toggle,
        1.0,
    ));
    assert_eq!(
        controller.culling_initial_restriction(),
        RestrictionScope::Collection
    );

    // Holding on while already culling keeps the layout.
    assert!(controller.process_culling(
        &mut h.env(),
        CullingElement::Normal,
        ActionEffect::On,
        1.0,
    ));

    assert!(!controller.process_culling(
        &mut h.env(),
        CullingElement::Normal,
        ActionEffect::Off,
        1.0,
    ));
    assert_eq!(controller.layout(), LayoutMode::Filemanager);
}

#[test]
fn test_culling_shortcut_on_outside_culling_does_nothing() {
    let mut h = Harness::new();
    let mut controller = h.controller();

    assert!(!controller.process_culling(
        &mut h.env(),
        CullingElement::Normal,
        ActionEffect::On,
        1.0,
    ));
    assert_eq!(controller.layout(), LayoutMode::Filemanager);
    assert!(h.take().is_empty());
}

#[test]
fn test_culling_shortcut_reports_dynamic_culling_as_inactive() {
    let mut h = Harness::new();
    let mut controller = h.controller();
    controller.request_layout(&mut h.env(), LayoutMode::CullingDynamic);

    assert!(!controller.process_culling(
        &mut h.env(),
        CullingElement::Normal,
        ActionEffect::On,
        1.0,
    ));
    assert_eq!(controller.layout(), LayoutMode::CullingDynamic);
}

#[test]
fn test_cycle_culling_zoom_mode_twice() {
    let mut h = Harness::new();
    let mut controller = h.controller();
    controller.request_layout_with(
        &mut h.env(),
        LayoutMode::Culling,
        LayoutEntry::with_restriction(RestrictionScope::Collection),
    );

    controller.perform(&mut h.env(), LighttableAction::CycleCullingZoomMode);
    assert_eq!(controller.layout(), LayoutMode::CullingDynamic);

    controller.perform(&mut h.env(), LighttableAction::CycleCullingZoomMode);
    assert_eq!(controller.layout(), LayoutMode::Culling);
    assert_eq!(controller.culling_initial_restriction(), RestrictionScope::Auto);
    assert_eq!(controller.base_layout(), LayoutMode::Filemanager);
}

#[test]
fn test_cycle_culling_zoom_mode_outside_culling_is_noop() {
    let mut h = Harness::new();
    let mut controller = h.controller();

    controller.perform(&mut h.env(), LighttableAction::CycleCullingZoomMode);
    assert_eq!(controller.layout(), LayoutMode::Filemanager);
    assert!(h.take().is_empty());
}

#[test]
fn test_exit_layout_at_base_is_noop() {
    let mut h = Harness::new();
    let mut controller = h.controller();
    let toolbar = *controller.toolbar();

    controller.perform(&mut h.env(), LighttableAction::ExitLayout);

    assert!(h.take().is_empty());
    assert_eq!(controller.layout(), LayoutMode::Filemanager);
    assert_eq!(*controller.toolbar(), toolbar);
}

#[test]
fn test_shortcut_bindings_switch_resting_layouts() {
    let mut h = Harness::new();
    let mut controller = h.controller();

    controller.perform(&mut h.env(), LighttableAction::ToggleZoomable);
    assert_eq!(controller.layout(), LayoutMode::Zoomable);
    assert_eq!(h.config.base_layout(), LayoutMode::Zoomable);

    controller.perform(&mut h.env(), LighttableAction::ToggleFilemanager);
    assert_eq!(controller.layout(), LayoutMode::Filemanager);
    assert_eq!(h.config.base_layout(), LayoutMode::Filemanager);
    assert_eq!(h.redraws(), 2);
}

#[test]
fn test_restriction_visible_only_in_fixed_culling_or_preview() {
    let mut h = Harness::new();
    let mut controller = h.controller();
    assert!(!controller.toolbar().restriction_visible);

    controller.request_layout(&mut h.env(), LayoutMode::Culling);
    assert!(controller.toolbar().restriction_visible);

    controller.perform(&mut h.env(), LighttableAction::CycleCullingZoomMode);
    assert!(!controller.toolbar().restriction_visible);

    controller.process_preview(
        &mut h.env(),
        PreviewElement::Normal,
        ActionEffect::Hold,
        1.0,
    );
    assert!(controller.toolbar().restriction_visible);
    assert!(!controller.toolbar().zoom_sensitive);
}

#[test]
fn test_zoom_in_grid_layouts_notifies_relayout() {
    let mut h = Harness::with_config(MemoryConfigStore::new().with(keys::IMAGES_IN_ROW, 6));
    let mut controller = h.controller();
    assert_eq!(controller.current_zoom(), 6);

    controller.set_zoom(&mut h.env(), 9);
    assert_eq!(
        h.take(),
        vec![
            Event::SetInt(keys::IMAGES_IN_ROW.to_string(), 9),
            Event::ZoomChanged(6, 9),
        ]
    );
}

#[test]
fn test_invalid_persisted_layout_loads_as_filemanager() {
    let mut h = Harness::with_config(
        MemoryConfigStore::new()
            .with(keys::LAYOUT, LayoutMode::Preview.code())
            .with(keys::BASE_LAYOUT, LayoutMode::CullingDynamic.code()),
    );
    let controller = h.controller();

    assert_eq!(controller.layout(), LayoutMode::Filemanager);
    assert_eq!(controller.base_layout(), LayoutMode::Filemanager);
}
