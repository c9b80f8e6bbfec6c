// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the eye scene to the Iced runtime: it owns the
//! scene state and the theme preference, routes subscription events into the
//! scene, and persists preference changes. Policy decisions (window sizing,
//! persistence format, theme cycling) stay close to the update loop so
//! user-facing behavior is easy to audit.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::ui::scene;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 400;
pub const MIN_WINDOW_HEIGHT: u32 = 300;

const WINDOW_TITLE: &str = "IcedGaze";

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    scene: scene::State,
    theme_mode: ThemeMode,
}

impl Default for App {
    fn default() -> Self {
        Self {
            scene: scene::State::default(),
            theme_mode: ThemeMode::System,
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from persisted preferences and CLI
    /// flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();

        let theme_mode = flags
            .theme
            .as_deref()
            .and_then(ThemeMode::from_flag)
            .unwrap_or(config.theme_mode);

        let app = App {
            scene: scene::State::new(
                config.show_caption.unwrap_or(true),
                config.show_accents.unwrap_or(true),
            ),
            theme_mode,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        WINDOW_TITLE.to_string()
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.scene.show_accents());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Scene(scene_message) => {
                self.scene.handle_message(scene_message);
                Task::none()
            }
            Message::Tick(now) => {
                self.scene.advance_pulse(now);
                Task::none()
            }
            Message::CycleThemeMode => {
                self.theme_mode = self.theme_mode.cycled();
                self.persist_preferences();
                Task::none()
            }
        }
    }

    /// Writes the current preferences back to `settings.toml`. The new theme
    /// still applies for this session if the save fails.
    fn persist_preferences(&self) {
        let mut config = config::load().unwrap_or_default();
        config.theme_mode = self.theme_mode;
        let _ = config::save(&config);
    }

    fn view(&self) -> Element<'_, Message> {
        let scheme = ColorScheme::for_mode(self.theme_mode);
        view::view(view::ViewContext {
            scene: &self.scene,
            scheme: &scheme,
        })
    }
}
