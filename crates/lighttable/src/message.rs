use cosmic::iced::keyboard::{Key, Modifiers, key::Physical};
use lighttable_types::LayoutControl;

/// Top-level application message type
#[derive(Debug, Clone)]
pub enum Message {
    /// Layout toolbar interaction
    Toolbar(ToolbarMessage),
    /// A thumbnail was clicked
    ToggleSelect(usize),
    /// `key` picks the binding, `physical` pairs the press with its release
    KeyPressed {
        key: Key,
        physical: Physical,
        modifiers: Modifiers,
    },
    KeyReleased(Physical),
    ModifiersChanged(Modifiers),
    /// Held keys will not report their release anymore
    WindowUnfocused,
    /// Keys changed on disk by another writer
    ConfigChanged(Vec<&'static str>),
}

#[derive(Debug, Clone, Copy)]
pub enum ToolbarMessage {
    /// A toggle was released; its state before the click is read from the toolbar
    Released(LayoutControl),
    Zoom(i32),
}
