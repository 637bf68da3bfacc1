// SPDX-License-Identifier: MPL-2.0
//! User interface components following the Elm-style "state down, messages
//! up" pattern.
//!
//! # Sections
//!
//! - [`hero`] - Landing headline with the call-to-action buttons
//! - [`about`] - Biography, headline numbers, and social links
//! - [`skills`] - Categorized proficiency bars
//! - [`stats`] - Animated radar chart with the speed-curve editor
//! - [`projects`] - Project card grid
//! - [`experience`] - Work history timeline
//! - [`contact`] - Contact details and the validated form
//!
//! # Shared Infrastructure
//!
//! - [`header`] - Fixed navigation bar with the theme cycle button
//! - [`footer`] - Footer with quick links and social handles
//! - [`back_to_top`] - Floating scroll-to-top control
//! - [`styles`] - Centralized styling (buttons, containers, text inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod about;
pub mod back_to_top;
pub mod contact;
pub mod design_tokens;
pub mod experience;
pub mod footer;
pub mod header;
pub mod hero;
pub mod projects;
pub mod skills;
pub mod stats;
pub mod styles;
