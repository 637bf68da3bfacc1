// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page sections.
//!
//! The `App` struct wires together the domains (localization, theming, the
//! animated statistics, the contact form) and translates messages into side
//! effects like config persistence or scroll navigation. Policy decisions
//! (window sizing, persistence format, the tick cadence) stay close to the
//! main update loop so user-facing behavior is easy to audit.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::I18n;
use crate::theme::{SceneColors, ThemeStore};
use crate::ui::contact;
use crate::ui::stats;
use iced::{window, Theme};
use std::fmt;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 650;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    theme_store: ThemeStore,
    /// Active variant and scheme as applied by the theme store.
    surface: SceneColors,
    stats: stats::State,
    contact: contact::State,
    /// Whether the header's dropdown menu is open.
    menu_open: bool,
    /// Absolute vertical scroll offset of the page, in logical pixels.
    scroll_offset: f32,
    /// Previous animation tick, used to derive the frame delta.
    last_tick: Option<Instant>,
    /// Time since launch, driving the hero typewriter and skill bar reveal.
    intro_elapsed: Duration,
    /// Warning key surfaced when the config failed to load.
    startup_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme", &self.theme_store.variant())
            .field("scroll_offset", &self.scroll_offset)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from persisted preferences and the
    /// launcher `Flags`.
    fn new(flags: Flags) -> (Self, iced::Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let theme_store = ThemeStore::new(config.general.theme);
        let surface = SceneColors::new(theme_store.variant());

        let duration_secs = config
            .animation
            .radar_duration_secs
            .unwrap_or(config::DEFAULT_RADAR_DURATION_SECS);

        let app = App {
            i18n,
            theme_store,
            surface,
            stats: stats::State::new(duration_secs),
            contact: contact::State::default(),
            menu_open: false,
            scroll_offset: 0.0,
            last_tick: None,
            intro_elapsed: Duration::ZERO,
            startup_warning: config_warning,
        };

        (app, iced::Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    /// Maps the application's own variant onto the closest built-in Iced
    /// theme so stock widgets (sliders, text inputs) pick sensible defaults.
    fn theme(&self) -> Theme {
        if self.surface.variant.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> iced::Subscription<Message> {
        subscription::create_tick_subscription()
    }
}
