//! Turns key presses and releases into shortcut effects.

use crate::action::{LighttableAction, MomentaryAction};
use lighttable_types::ActionEffect;
use std::{
    collections::HashMap,
    hash::Hash,
    time::{Duration, Instant},
};

/// A `HoldToggle` key held at least this long acts as a hold on release.
pub const LONG_PRESS: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shortcut {
    Action(LighttableAction),
    Momentary {
        action: MomentaryAction,
        effect: ActionEffect,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutEvent {
    Perform(LighttableAction),
    Momentary {
        action: MomentaryAction,
        effect: ActionEffect,
    },
}

#[derive(Debug, Clone, Copy)]
struct HeldKey {
    shortcut: Shortcut,
    pressed_at: Instant,
}

/// Keys currently held down, keyed by whatever identifies a physical key.
#[derive(Debug, Clone)]
pub struct ShortcutTracker<K> {
    held: HashMap<K, HeldKey>,
}

impl<K> Default for ShortcutTracker<K> {
    fn default() -> Self {
        Self {
            held: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> ShortcutTracker<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Auto-repeated presses of a key already held are swallowed. A held key
    /// pressed under another binding counts as a fresh press.
    pub fn press(&mut self, key: K, shortcut: Shortcut, at: Instant) -> Option<ShortcutEvent> {
        if self
            .held
            .get(&key)
            .is_some_and(|held| held.shortcut == shortcut)
        {
            return None;
        }

        self.held.insert(
            key,
            HeldKey {
                shortcut,
                pressed_at: at,
            },
        );

        Some(match shortcut {
            Shortcut::Action(action) => ShortcutEvent::Perform(action),
            Shortcut::Momentary { action, effect } => ShortcutEvent::Momentary { action, effect },
        })
    }

    pub fn release(&mut self, key: &K, at: Instant) -> Option<ShortcutEvent> {
        let held = self.held.remove(key)?;
        let Shortcut::Momentary { action, effect } = held.shortcut else {
            return None;
        };

        let long_press = at.saturating_duration_since(held.pressed_at) >= LONG_PRESS;
        match effect {
            ActionEffect::Hold => Some(ShortcutEvent::Momentary {
                action,
                effect: ActionEffect::Off,
            }),
            ActionEffect::HoldToggle if long_press => Some(ShortcutEvent::Momentary {
                action,
                effect: ActionEffect::Off,
            }),
            _ => None,
        }
    }

    pub fn is_held(&self, key: &K) -> bool {
        self.held.contains_key(key)
    }

    /// Forgets every held key, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.held.clear();
    }
}
