// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! - [`scene`] - The eye scene: canvas painter, layout, messages
//! - [`gaze`] - Pure pupil displacement geometry
//! - [`state`] - Reusable state management (pointer tracking)
//! - [`design_tokens`] - Design system constants (colors, spacing, typography)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gaze;
pub mod scene;
pub mod state;
pub mod theming;
