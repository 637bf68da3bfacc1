// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Frame interval for the radar animation, roughly 60 fps.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Creates the periodic tick subscription driving the radar animation.
///
/// The radar section is always mounted, so the tick never pauses.
pub fn create_tick_subscription() -> Subscription<Message> {
    time::every(TICK_INTERVAL).map(Message::Tick)
}
