// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::back_to_top;
use crate::ui::contact;
use crate::ui::footer;
use crate::ui::header;
use crate::ui::hero;
use crate::ui::stats;
use iced::widget::scrollable;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Hero(hero::Message),
    Stats(stats::Message),
    Contact(contact::Message),
    Footer(footer::Message),
    BackToTop(back_to_top::Message),
    /// The page scrollable moved; tracked for the back-to-top button.
    PageScrolled(scrollable::Viewport),
    /// Periodic animation tick.
    Tick(Instant),
    DismissStartupWarning,
}

/// Runtime flags parsed by `main.rs` and consumed during boot.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Override the UI language (e.g. `--lang id`).
    pub lang: Option<String>,
}
