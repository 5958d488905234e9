//! Layout state machine for the lighttable screen: which browsing layout is
//! shown, how dense it is, and how toolbar clicks and shortcuts drive it.

pub mod action;
pub mod controller;
pub mod env;
pub mod property;
pub mod shortcut;
pub mod toolbar;

#[cfg(test)]
mod fakes;

pub use action::{LighttableAction, MomentaryAction};
pub use controller::{LayoutController, LayoutEntry};
pub use env::{Env, GridRenderer, PreviewOverlay, SelectionQuery};
pub use property::{PropertyError, PropertyValue, layout_names};
pub use shortcut::{LONG_PRESS, Shortcut, ShortcutEvent, ShortcutTracker};
pub use toolbar::{ToolbarState, Tooltip};
