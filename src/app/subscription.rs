// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The pointer listener is declarative: it is registered while the returned
//! subscription is requested by `App::subscription` and released by the
//! runtime when the application winds down, so it can never outlive the view.

use super::Message;
use crate::ui::scene;
use iced::{event, keyboard, mouse, time, window, Subscription};
use std::time::Duration;

/// Creates the runtime event subscription.
///
/// Cursor movement and window resizes are routed to the scene regardless of
/// whether a widget captured them; tracking is window-wide, matching a
/// listener registered at window scope. The `T` key cycles the theme mode.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match &event {
        event::Event::Mouse(mouse::Event::CursorMoved { .. } | mouse::Event::CursorLeft)
        | event::Event::Window(window::Event::Resized(_)) => {
            Some(Message::Scene(scene::Message::RawEvent {
                window: window_id,
                event: event.clone(),
            }))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Character(c),
            modifiers,
            ..
        }) if (c.as_str() == "t" || c.as_str() == "T")
            && !modifiers.command()
            && !modifiers.alt() =>
        {
            Some(Message::CycleThemeMode)
        }
        _ => None,
    })
}

/// Creates a periodic tick subscription for the accent pulse.
///
/// Disabled entirely when the accents are hidden so an idle window schedules
/// no work.
pub fn create_tick_subscription(accents_animating: bool) -> Subscription<Message> {
    if accents_animating {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
