// SPDX-License-Identifier: MPL-2.0
//! `iced_gaze` is a decorative cursor-following animation built with the Iced
//! GUI framework.
//!
//! Two eyes track the mouse pointer: each pupil shifts toward the cursor,
//! clamped to a fixed travel radius. The crate demonstrates event
//! subscriptions, canvas drawing, and user preference management in a small
//! Elm-style application.

#![doc(html_root_url = "https://docs.rs/iced_gaze/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod ui;
