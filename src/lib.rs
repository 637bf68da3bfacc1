// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a single-page personal portfolio built with the Iced GUI
//! framework.
//!
//! It demonstrates a three-variant theme system with persistence,
//! internationalization with Fluent, a validated contact form with a
//! simulated submission flow, and a canvas-drawn radar chart animated by an
//! editable speed curve.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod theme;
pub mod ui;
