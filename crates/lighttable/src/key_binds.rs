use cosmic::{
    iced::keyboard::{Key, Modifiers, key::Named},
    widget::menu::key_bind::{KeyBind, Modifier},
};
use lighttable_layout::{LighttableAction, MomentaryAction, Shortcut};
use lighttable_types::{ActionEffect, CullingElement, PreviewElement};
use std::collections::HashMap;

fn momentary(action: MomentaryAction, effect: ActionEffect) -> Shortcut {
    Shortcut::Momentary { action, effect }
}

fn bind(modifiers: Vec<Modifier>, key: &str) -> KeyBind {
    KeyBind {
        modifiers,
        key: Key::Character(key.into()),
    }
}

pub fn init_key_binds() -> HashMap<KeyBind, Shortcut> {
    let mut binds = HashMap::new();

    // Culling
    binds.insert(
        bind(vec![], "x"),
        momentary(
            MomentaryAction::Culling(CullingElement::Normal),
            ActionEffect::HoldToggle,
        ),
    );
    binds.insert(
        bind(vec![Modifier::Shift], "x"),
        momentary(
            MomentaryAction::Culling(CullingElement::NoRestriction),
            ActionEffect::HoldToggle,
        ),
    );
    binds.insert(
        bind(vec![Modifier::Ctrl], "x"),
        Shortcut::Action(LighttableAction::ToggleCullingDynamic),
    );
    binds.insert(
        bind(vec![], "<"),
        Shortcut::Action(LighttableAction::CycleCullingZoomMode),
    );
    binds.insert(
        bind(vec![Modifier::Ctrl], "r"),
        Shortcut::Action(LighttableAction::ToggleRestriction),
    );

    // Preview
    binds.insert(
        bind(vec![], "f"),
        momentary(
            MomentaryAction::Preview(PreviewElement::Normal),
            ActionEffect::HoldToggle,
        ),
    );
    binds.insert(
        bind(vec![Modifier::Shift], "f"),
        momentary(
            MomentaryAction::Preview(PreviewElement::NoRestriction),
            ActionEffect::HoldToggle,
        ),
    );
    binds.insert(
        bind(vec![], "w"),
        momentary(
            MomentaryAction::Preview(PreviewElement::Normal),
            ActionEffect::Hold,
        ),
    );
    binds.insert(
        bind(vec![Modifier::Ctrl], "w"),
        momentary(
            MomentaryAction::Preview(PreviewElement::FocusDetect),
            ActionEffect::Hold,
        ),
    );

    binds.insert(
        KeyBind {
            modifiers: vec![],
            key: Key::Named(Named::Escape),
        },
        Shortcut::Action(LighttableAction::ExitLayout),
    );

    binds
}

/// Identifies a physical key across press and release, whatever modifiers
/// changed in between.
pub fn normalize_key(key: Key) -> Key {
    match key {
        Key::Character(c) => Key::Character(c.to_lowercase().into()),
        other => other,
    }
}

/// Builds the binding a key press matches. Shift is dropped for symbols,
/// where it is already part of the character.
pub fn key_bind(key: &Key, modifiers: Modifiers) -> KeyBind {
    let mut mods = Vec::new();

    if modifiers.control() {
        mods.push(Modifier::Ctrl);
    }

    let symbol = matches!(key, Key::Character(c) if !c.chars().any(char::is_alphanumeric));
    if modifiers.shift() && !symbol {
        mods.push(Modifier::Shift);
    }

    if modifiers.alt() {
        mods.push(Modifier::Alt);
    }

    if modifiers.logo() {
        mods.push(Modifier::Super);
    }

    KeyBind {
        modifiers: mods,
        key: key.clone(),
    }
}
