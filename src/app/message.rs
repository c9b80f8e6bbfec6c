// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::scene;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Scene(scene::Message),
    /// Periodic tick driving the background accent pulse.
    Tick(Instant),
    /// Cycle the theme mode (bound to the `T` key) and persist the choice.
    CycleThemeMode,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional theme override (`light`, `dark`, or `system`); takes
    /// precedence over the persisted preference for this session.
    pub theme: Option<String>,
}
