use crate::{
    fl,
    message::{Message, ToolbarMessage},
};
use cosmic::{
    Element,
    widget::{button, icon, spin_button, text, tooltip},
};
use lighttable_layout::{ToolbarState, Tooltip};
use lighttable_types::{LayoutControl, MAX_ZOOM, MIN_ZOOM};

pub fn tooltip_text(tooltip: Tooltip) -> String {
    match tooltip {
        Tooltip::EnterFilemanager => fl!("tooltip-filemanager"),
        Tooltip::EnterZoomable => fl!("tooltip-zoomable"),
        Tooltip::EnterPreview => fl!("tooltip-enter-preview"),
        Tooltip::ExitPreview => fl!("tooltip-exit-preview"),
        Tooltip::EnterCullingFixed => fl!("tooltip-enter-culling-fixed"),
        Tooltip::EnterCullingDynamic => fl!("tooltip-enter-culling-dynamic"),
        Tooltip::ExitCulling => fl!("tooltip-exit-culling"),
        Tooltip::LimitToSelection => fl!("tooltip-limit-to-selection"),
        Tooltip::AllowCollection => fl!("tooltip-allow-collection"),
    }
}

fn toggle<'a>(state: &ToolbarState, control: LayoutControl) -> Element<'a, Message> {
    tooltip(
        button::icon(icon::from_name(control.icon_name()))
            .selected(state.is_active(control))
            .on_press(Message::Toolbar(ToolbarMessage::Released(control))),
        text(tooltip_text(state.tooltip(control))),
        tooltip::Position::Bottom,
    )
    .into()
}

/// Layout selectors, the zoom entry and, when it applies, the restriction toggle.
pub fn layout_toolbar<'a>(state: &ToolbarState) -> Vec<Element<'a, Message>> {
    let mut items: Vec<Element<'a, Message>> = LayoutControl::LAYOUTS
        .iter()
        .map(|control| toggle(state, *control))
        .collect();

    items.push(if state.zoom_sensitive {
        spin_button(
            format!("{}", state.zoom),
            fl!("zoom-label"),
            state.zoom,
            1,
            MIN_ZOOM,
            MAX_ZOOM,
            |zoom| Message::Toolbar(ToolbarMessage::Zoom(zoom)),
        )
        .into()
    } else {
        text::body(format!("{}", state.zoom)).into()
    });

    if state.restriction_visible {
        items.push(toggle(state, LayoutControl::Restriction));
    }

    items
}
