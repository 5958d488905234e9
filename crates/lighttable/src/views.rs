//! The pieces of the lighttable screen the layout controller drives: the
//! selection, the preview overlay and the thumbnail grid.

use crate::{fl, message::Message};
use cosmic::{
    Element,
    iced::{Alignment, Length},
    theme,
    widget::{button, column, container, icon, row, scrollable, text},
};
use lighttable_layout::{GridRenderer, PreviewOverlay, SelectionQuery};
use lighttable_types::{LayoutMode, RestrictionScope};
use std::collections::BTreeSet;

/// Placeholder images shown until a collection is attached.
pub const COLLECTION_SIZE: usize = 48;

#[derive(Debug, Clone, Default)]
pub struct Selection {
    selected: BTreeSet<usize>,
}

impl Selection {
    pub fn toggle(&mut self, index: usize) {
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }
}

impl SelectionQuery for Selection {
    fn selected_count(&self) -> usize {
        self.selected.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenPreview {
    pub sticky: bool,
    pub focus: bool,
    pub restriction: RestrictionScope,
}

#[derive(Debug, Clone, Default)]
pub struct PreviewPane {
    open: Option<OpenPreview>,
    restriction: RestrictionScope,
    /// Selection size `Auto` is resolved against.
    selected: usize,
}

impl PreviewPane {
    pub fn open(&self) -> Option<OpenPreview> {
        self.open
    }

    pub fn selection_changed(&mut self, selected: usize) {
        self.selected = selected;
    }
}

impl PreviewOverlay for PreviewPane {
    fn is_preview_on(&self) -> bool {
        self.open.is_some()
    }

    fn set_preview(&mut self, on: bool, sticky: bool, focus: bool, restriction: RestrictionScope) {
        self.open = on.then_some(OpenPreview {
            sticky,
            focus,
            restriction,
        });
        if on && restriction != RestrictionScope::Auto {
            self.restriction = restriction;
        }
        tracing::debug!(on, sticky, focus, %restriction, "preview overlay");
    }

    /// Never `Auto`: more than one selected image restricts to the selection.
    fn restriction_scope(&self) -> RestrictionScope {
        match self.restriction {
            RestrictionScope::Auto if self.selected > 1 => RestrictionScope::Selection,
            RestrictionScope::Auto => RestrictionScope::Collection,
            scope => scope,
        }
    }

    fn set_restriction_scope(&mut self, scope: RestrictionScope) {
        self.restriction = scope;
    }
}

/// Scroll anchor of the thumbnail grid.
#[derive(Debug, Clone, Default)]
pub struct GridPane {
    /// First image shown; culling starts here too.
    offset: usize,
    /// Bumped on every redraw request, so a stale frame can be told apart.
    generation: u64,
}

impl GridPane {
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn scroll_to(&mut self, index: usize) {
        self.offset = index.min(COLLECTION_SIZE.saturating_sub(1));
    }
}

impl GridRenderer for GridPane {
    fn request_redraw(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        tracing::trace!(generation = self.generation, "grid redraw");
    }

    fn zoom_changed(&mut self, old: i32, new: i32) {
        // Keep the anchor image on screen by snapping it to the start of its new row.
        let per_row = usize::try_from(new).unwrap_or(1).max(1);
        self.offset -= self.offset % per_row;
        tracing::trace!(old, new, offset = self.offset, "grid relayout");
    }
}

#[derive(Debug, Clone, Default)]
pub struct Views {
    pub selection: Selection,
    pub preview: PreviewPane,
    pub grid: GridPane,
}

impl Views {
    pub fn toggle_select(&mut self, index: usize) {
        self.selection.toggle(index);
        self.preview.selection_changed(self.selection.selected_count());
        self.grid.scroll_to(index);
    }

    /// Images fixed culling cycles through: the selection when restricted to
    /// it, or when more than one image is selected and nothing overrides it.
    pub fn culling_images(&self, restriction: RestrictionScope, zoom: i32) -> Vec<usize> {
        let zoom = usize::try_from(zoom).unwrap_or(1);
        let use_selection = match restriction {
            RestrictionScope::Selection => true,
            RestrictionScope::Collection => false,
            RestrictionScope::Auto => self.selection.selected_count() > 1,
        };

        if use_selection && self.selection.selected_count() > 0 {
            self.selection.iter().take(zoom).collect()
        } else {
            (self.grid.offset..COLLECTION_SIZE).take(zoom).collect()
        }
    }

    pub fn view(&self, layout: LayoutMode, zoom: i32) -> Element<'_, Message> {
        if let Some(preview) = self.preview.open() {
            return self.preview_view(preview);
        }

        match layout {
            LayoutMode::Culling => {
                self.strip(self.culling_images(self.preview.restriction_scope(), zoom))
            }
            LayoutMode::CullingDynamic => self.strip(self.selection.iter().collect()),
            LayoutMode::Filemanager | LayoutMode::Zoomable | LayoutMode::Preview => {
                self.grid_view(zoom)
            }
        }
    }

    fn tile(&self, index: usize) -> Element<'_, Message> {
        button::custom(
            container(text::title4(format!("{}", index + 1)))
                .center(Length::Fill)
                .class(theme::Container::Card),
        )
        .selected(self.selection.contains(index))
        .on_press(Message::ToggleSelect(index))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    fn grid_view(&self, per_row: i32) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;
        let per_row = usize::try_from(per_row).unwrap_or(1).max(1);
        let indices: Vec<usize> = (0..COLLECTION_SIZE).collect();

        let rows = indices.chunks(per_row).fold(column(), |rows, chunk| {
            let tiles = chunk.iter().fold(row(), |tiles, index| {
                tiles.push(
                    container(self.tile(*index))
                        .width(Length::FillPortion(1))
                        .height(Length::Fixed(120.0)),
                )
            });
            rows.push(tiles.spacing(spacing.space_xs))
        });

        let status = row()
            .push(text(fl!("status-images", count = COLLECTION_SIZE)).size(12))
            .push(text(fl!("status-selected", count = self.selection.selected_count())).size(12))
            .spacing(spacing.space_s)
            .padding([spacing.space_xxs, spacing.space_s])
            .align_y(Alignment::Center);

        column()
            .push(
                scrollable(rows.spacing(spacing.space_xs).padding(spacing.space_s))
                    .height(Length::Fill),
            )
            .push(status)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn strip(&self, images: Vec<usize>) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;

        if images.is_empty() {
            return container(
                column()
                    .push(icon::from_name("image-x-generic-symbolic").size(64))
                    .push(text(fl!("status-nothing-to-cull")).size(16))
                    .spacing(spacing.space_m)
                    .align_x(Alignment::Center),
            )
            .center(Length::Fill)
            .into();
        }

        images
            .into_iter()
            .fold(row(), |strip, index| strip.push(self.tile(index)))
            .spacing(spacing.space_s)
            .padding(spacing.space_s)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn preview_view(&self, preview: OpenPreview) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;
        let shown = self
            .selection
            .iter()
            .next()
            .unwrap_or(self.grid.offset());

        let mut caption = row()
            .push(text::body(fl!("preview-of", index = shown + 1)))
            .spacing(spacing.space_s);
        if preview.focus {
            caption = caption.push(text::caption(fl!("preview-focus-detection")));
        }
        if preview.sticky {
            caption = caption.push(text::caption(fl!("preview-sticky")));
        }
        if preview.restriction == RestrictionScope::Collection {
            caption = caption.push(text::caption(fl!("preview-whole-collection")));
        }

        container(
            column()
                .push(self.tile(shown))
                .push(caption)
                .spacing(spacing.space_s)
                .align_x(Alignment::Center),
        )
        .padding([spacing.space_l, spacing.space_xl])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}
