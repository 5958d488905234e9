//! Main app state

use crate::{
    fl,
    key_binds::{self, key_bind, normalize_key},
    message::{Message, ToolbarMessage},
    toolbar::layout_toolbar,
    views::Views,
};
use cosmic::{
    Action, Application, ApplicationExt, Core, Element, Task,
    iced::{
        Event, Subscription, event,
        keyboard::{self, Modifiers, key::Physical},
        window,
    },
    widget::menu::key_bind::KeyBind,
};
use lighttable_config::{APP_ID, ConfigStore, LighttableConfig, LighttableStore, keys};
use lighttable_layout::{
    Env, LayoutController, PropertyValue, Shortcut, ShortcutEvent, ShortcutTracker, property,
};
use std::{collections::HashMap, time::Instant};

pub struct Lighttable {
    core: Core,
    store: LighttableStore,
    views: Views,
    controller: LayoutController,
    key_binds: HashMap<KeyBind, Shortcut>,
    shortcuts: ShortcutTracker<Physical>,
    modifiers: Modifiers,
}

impl Lighttable {
    pub const APP_ID: &'static str = APP_ID;

    /// Lends the store and views to the controller for one operation.
    fn with_controller<R>(
        &mut self,
        f: impl FnOnce(&mut LayoutController, &mut Env<'_>) -> R,
    ) -> R {
        let mut env = Env::new(
            &mut self.store,
            &self.views.selection,
            &mut self.views.preview,
            &mut self.views.grid,
        );
        f(&mut self.controller, &mut env)
    }

    fn dispatch(&mut self, event: ShortcutEvent) {
        match event {
            ShortcutEvent::Perform(action) => {
                self.with_controller(|controller, env| controller.perform(env, action));
            }
            ShortcutEvent::Momentary { action, effect } => {
                self.with_controller(|controller, env| {
                    controller.perform_momentary(env, action, effect, 1.0)
                });
            }
        }
    }

    fn reload_config(&mut self, changed: &[&'static str]) {
        let updated = self.store.reload(changed);
        let layout_changed = updated
            .iter()
            .any(|key| *key == keys::LAYOUT || *key == keys::BASE_LAYOUT);

        if layout_changed
            && (self.store.layout() != self.controller.layout()
                || self.store.base_layout() != self.controller.base_layout())
        {
            tracing::info!("lighttable layout changed by another instance");
            let env = Env::new(
                &mut self.store,
                &self.views.selection,
                &mut self.views.preview,
                &mut self.views.grid,
            );
            self.controller = LayoutController::load(&env);
        }
    }
}

impl Application for Lighttable {
    type Executor = cosmic::executor::Default;
    type Flags = Option<String>;
    type Message = Message;

    const APP_ID: &'static str = Self::APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Action<Self::Message>>) {
        let mut tasks = vec![];

        let mut store = LighttableStore::open();
        let mut views = Views::default();
        let controller = LayoutController::load(&Env::new(
            &mut store,
            &views.selection,
            &mut views.preview,
            &mut views.grid,
        ));

        let mut app = Self {
            core,
            store,
            views,
            controller,
            key_binds: key_binds::init_key_binds(),
            shortcuts: ShortcutTracker::new(),
            modifiers: Modifiers::empty(),
        };

        if let Some(name) = flags {
            let result = app.with_controller(|controller, env| {
                controller.property(env, property::LAYOUT, Some(PropertyValue::Name(name)))
            });
            if let Err(err) = result {
                let known: Vec<_> = lighttable_layout::layout_names()
                    .map(|(name, _)| name)
                    .collect();
                tracing::warn!("{err}, expected one of: {}", known.join(", "));
            }
        }

        if let Some(id) = app.core.main_window_id() {
            tasks.push(app.set_window_title(fl!("app-title"), id));
        }

        (app, Task::batch(tasks))
    }

    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        layout_toolbar(self.controller.toolbar())
    }

    fn view(&self) -> Element<'_, Self::Message> {
        self.views
            .view(self.controller.layout(), self.controller.current_zoom())
    }

    fn update(&mut self, message: Message) -> Task<Action<Self::Message>> {
        match message {
            Message::Toolbar(ToolbarMessage::Released(control)) => {
                let was_active = self.controller.toolbar().is_active(control);
                let modifier = self.modifiers.control();
                self.with_controller(|controller, env| {
                    controller.control_released(env, control, was_active, modifier);
                });
            }
            Message::Toolbar(ToolbarMessage::Zoom(zoom)) => {
                self.with_controller(|controller, env| controller.set_zoom(env, zoom));
            }
            Message::ToggleSelect(index) => {
                self.views.toggle_select(index);
                // The restriction toggle follows how many images are selected.
                self.with_controller(|controller, env| controller.sync_toolbar(env));
            }
            Message::KeyPressed {
                key,
                physical,
                modifiers,
            } => {
                let key = normalize_key(key);
                let shortcut = self.key_binds.get(&key_bind(&key, modifiers)).copied();

                if let Some(shortcut) = shortcut
                    && let Some(event) = self.shortcuts.press(physical, shortcut, Instant::now())
                {
                    self.dispatch(event);
                }
            }
            Message::KeyReleased(physical) => {
                if let Some(event) = self.shortcuts.release(&physical, Instant::now()) {
                    self.dispatch(event);
                }
            }
            Message::ModifiersChanged(modifiers) => self.modifiers = modifiers,
            Message::WindowUnfocused => self.shortcuts.clear(),
            Message::ConfigChanged(changed) => self.reload_config(&changed),
        }

        Task::none()
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        let config_sub = if self.store.is_persistent() {
            self.core()
                .watch_config::<LighttableConfig>(Self::APP_ID)
                .map(|update| Message::ConfigChanged(update.keys))
        } else {
            Subscription::none()
        };

        Subscription::batch([event::listen_with(event_handler), config_sub])
    }

    fn on_app_exit(&mut self) -> Option<Self::Message> {
        self.store.flush();
        None
    }
}

fn event_handler(event: Event, status: event::Status, _id: window::Id) -> Option<Message> {
    match event {
        // Presses a focused widget consumed are not shortcuts.
        Event::Keyboard(keyboard::Event::KeyPressed {
            key,
            physical_key,
            modifiers,
            ..
        }) if status == event::Status::Ignored => Some(Message::KeyPressed {
            key,
            physical: physical_key,
            modifiers,
        }),
        // Releases always go through, or a held key would stay held.
        Event::Keyboard(keyboard::Event::KeyReleased { physical_key, .. }) => {
            Some(Message::KeyReleased(physical_key))
        }
        Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) => {
            Some(Message::ModifiersChanged(modifiers))
        }
        Event::Window(window::Event::Unfocused) => Some(Message::WindowUnfocused),
        _ => None,
    }
}
