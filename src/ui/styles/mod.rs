// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for all UI components.
//!
//! Unlike stock Iced theming, every style here is parameterized by the active
//! [`crate::theme::ColorScheme`] so the three variants (light, dark, gradient)
//! stay visually coherent without per-widget color logic.

pub mod button;
pub mod container;
pub mod text_input;
