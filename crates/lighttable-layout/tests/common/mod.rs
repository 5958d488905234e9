#![allow(dead_code)]

use lighttable_config::{ConfigStore, MemoryConfigStore};
use lighttable_layout::{Env, GridRenderer, LayoutController, PreviewOverlay, SelectionQuery};
use lighttable_types::RestrictionScope;
use std::{cell::RefCell, rc::Rc};

/// Side effects in the order the controller produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SetInt(String, i32),
    SetPreview {
        on: bool,
        sticky: bool,
        focus: bool,
        restriction: RestrictionScope,
    },
    SetRestriction(RestrictionScope),
    Redraw,
    ZoomChanged(i32, i32),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

pub struct RecordingStore {
    pub inner: MemoryConfigStore,
    log: Log,
}

impl ConfigStore for RecordingStore {
    fn get_int(&self, key: &str, default: i32) -> i32 {
        self.inner.get_int(key, default)
    }

    fn set_int(&mut self, key: &str, value: i32) {
        self.log.borrow_mut().push(Event::SetInt(key.to_string(), value));
        self.inner.set_int(key, value);
    }
}

pub struct RecordingOverlay {
    pub preview: bool,
    pub sticky: bool,
    pub restriction: RestrictionScope,
    log: Log,
}

impl PreviewOverlay for RecordingOverlay {
    fn is_preview_on(&self) -> bool {
        self.preview
    }

    fn set_preview(&mut self, on: bool, sticky: bool, focus: bool, restriction: RestrictionScope) {
        self.log.borrow_mut().push(Event::SetPreview {
            on,
            sticky,
            focus,
            restriction,
        });
        self.preview = on;
        self.sticky = sticky;
    }

    fn restriction_scope(&self) -> RestrictionScope {
        self.restriction
    }

    fn set_restriction_scope(&mut self, scope: RestrictionScope) {
        self.log.borrow_mut().push(Event::SetRestriction(scope));
        self.restriction = scope;
    }
}

pub struct RecordingGrid {
    log: Log,
}

impl GridRenderer for RecordingGrid {
    fn request_redraw(&mut self) {
        self.log.borrow_mut().push(Event::Redraw);
    }

    fn zoom_changed(&mut self, old: i32, new: i32) {
        self.log.borrow_mut().push(Event::ZoomChanged(old, new));
    }
}

pub struct Selection(pub usize);

impl SelectionQuery for Selection {
    fn selected_count(&self) -> usize {
        self.0
    }
}

pub struct Harness {
    pub config: RecordingStore,
    pub selection: Selection,
    pub overlay: RecordingOverlay,
    pub grid: RecordingGrid,
    pub log: Log,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(MemoryConfigStore::new())
    }

    pub fn with_config(config: MemoryConfigStore) -> Self {
        let log = Log::default();
        Self {
            config: RecordingStore {
                inner: config,
                log: log.clone(),
            },
            selection: Selection(0),
            overlay: RecordingOverlay {
                preview: false,
                sticky: false,
                restriction: RestrictionScope::Auto,
                log: log.clone(),
            },
            grid: RecordingGrid { log: log.clone() },
            log,
        }
    }

    pub fn env(&mut self) -> Env<'_> {
        Env::new(
            &mut self.config,
            &self.selection,
            &mut self.overlay,
            &mut self.grid,
        )
    }

    pub fn controller(&mut self) -> LayoutController {
        LayoutController::load(&self.env())
    }

    /// Drains the recorded events.
    pub fn take(&self) -> Vec<Event> {
        std::mem::take(&mut *self.log.borrow_mut())
    }

    pub fn redraws(&self) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|event| **event == Event::Redraw)
            .count()
    }
}
