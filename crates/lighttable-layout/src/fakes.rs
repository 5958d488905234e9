use crate::env::{Env, GridRenderer, PreviewOverlay, SelectionQuery};
use lighttable_config::MemoryConfigStore;
use lighttable_types::RestrictionScope;

#[derive(Debug, Default)]
pub struct FakeOverlay {
    pub preview: bool,
    pub sticky: bool,
    pub focus: bool,
    pub preview_restriction: RestrictionScope,
    pub restriction: RestrictionScope,
    pub preview_calls: usize,
}

impl PreviewOverlay for FakeOverlay {
    fn is_preview_on(&self) -> bool {
        self.preview
    }

    fn set_preview(&mut self, on: bool, sticky: bool, focus: bool, restriction: RestrictionScope) {
        self.preview = on;
        self.sticky = sticky;
        self.focus = focus;
        self.preview_restriction = restriction;
        self.preview_calls += 1;
    }

    fn restriction_scope(&self) -> RestrictionScope {
        self.restriction
    }

    fn set_restriction_scope(&mut self, scope: RestrictionScope) {
        self.restriction = scope;
    }
}

#[derive(Debug, Default)]
pub struct FakeGrid {
    pub redraws: usize,
    pub zoom_changes: Vec<(i32, i32)>,
}

impl GridRenderer for FakeGrid {
    fn request_redraw(&mut self) {
        self.redraws += 1;
    }

    fn zoom_changed(&mut self, old: i32, new: i32) {
        self.zoom_changes.push((old, new));
    }
}

pub struct Selected(pub usize);

impl SelectionQuery for Selected {
    fn selected_count(&self) -> usize {
        self.0
    }
}

#[derive(Default)]
pub struct Fixture {
    pub config: MemoryConfigStore,
    pub selected: usize,
    pub overlay: FakeOverlay,
    pub grid: FakeGrid,
    selection: Option<Selected>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn env(&mut self) -> Env<'_> {
        let selection = self.selection.insert(Selected(self.selected));
        Env::new(&mut self.config, selection, &mut self.overlay, &mut self.grid)
    }
}
