// SPDX-License-Identifier: MPL-2.0
//! The eye scene component.
//!
//! Follows the "state down, messages up" pattern: [`State`] stores the latest
//! pointer position and the accent pulse phase, [`Message`] carries raw events
//! routed from the application subscription, and [`State::view`] renders the
//! canvas with the caption overlaid.

pub mod canvas;
pub mod layout;

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::state::PointerState;
use crate::ui::theming::ColorScheme;
use canvas::EyesCanvas;
use iced::widget::canvas::Canvas;
use iced::widget::{Column, Container, Stack, Text};
use iced::{alignment, event, mouse, window, Element, Length, Point};
use std::f32::consts::TAU;
use std::time::Instant;

/// One full accent pulse every two seconds.
const PULSE_PERIOD_SECS: f32 = 2.0;

const CAPTION_TITLE: &str = "Gaze Following Eyes";
const CAPTION_SUBTITLE: &str = "Move your mouse around to see the eyes follow your cursor!";

/// Messages handled by the scene.
#[derive(Debug, Clone)]
pub enum Message {
    /// Raw runtime event routed from the application subscription.
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
}

/// Scene state: pointer tracking plus presentation toggles.
#[derive(Debug, Clone)]
pub struct State {
    pointer: PointerState,
    pulse_phase: f32,
    started_at: Instant,
    show_caption: bool,
    show_accents: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl State {
    #[must_use]
    pub fn new(show_caption: bool, show_accents: bool) -> Self {
        Self {
            pointer: PointerState::default(),
            pulse_phase: 0.0,
            started_at: Instant::now(),
            show_caption,
            show_accents,
        }
    }

    /// Latest pointer position in window coordinates.
    #[must_use]
    pub fn pointer_position(&self) -> Point {
        self.pointer.position
    }

    #[must_use]
    pub fn show_accents(&self) -> bool {
        self.show_accents
    }

    /// Routes a scene message into the state.
    ///
    /// Only cursor movement mutates anything. Window resizes need no handling
    /// because the eye boxes are re-derived from the live layout on every
    /// draw, and cursor-leave keeps the last position so the eyes hold their
    /// gaze.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::RawEvent { event, .. } => {
                if let event::Event::Mouse(mouse::Event::CursorMoved { position }) = event {
                    self.pointer.record(position);
                }
            }
        }
    }

    /// Advances the accent pulse to the given instant.
    pub fn advance_pulse(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.started_at);
        self.pulse_phase = elapsed.as_secs_f32() * (TAU / PULSE_PERIOD_SECS);
    }

    /// Renders the scene with the given color scheme.
    pub fn view(&self, scheme: &ColorScheme) -> Element<'_, Message> {
        let eyes = Canvas::new(EyesCanvas {
            pointer: self.pointer.position,
            pulse_phase: self.pulse_phase,
            scheme: scheme.clone(),
            show_accents: self.show_accents,
        })
        .width(Length::Fill)
        .height(Length::Fill);

        if !self.show_caption {
            return eyes.into();
        }

        let caption = Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(
                Text::new(CAPTION_TITLE)
                    .size(typography::TITLE)
                    .color(scheme.text_primary),
            )
            .push(
                Text::new(CAPTION_SUBTITLE)
                    .size(typography::SUBTITLE)
                    .color(scheme.text_secondary),
            );

        Stack::new()
            .push(eyes)
            .push(
                Container::new(caption)
                    .width(Length::Fill)
                    .padding(spacing::XL)
                    .align_x(alignment::Horizontal::Center),
            )
            .into()
    }
}
