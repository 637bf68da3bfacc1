// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Component messages are forwarded to their modules; the events those
//! modules return are turned into side effects here (async timers, config
//! persistence, scroll navigation).

use super::{App, Message};
use crate::config;
use crate::content::Section;
use crate::ui::back_to_top;
use crate::ui::contact;
use crate::ui::footer;
use crate::ui::header;
use crate::ui::hero;
use crate::ui::stats;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;

/// Widget id of the single page scrollable.
pub const PAGE_SCROLL_ID: &str = "page";

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(now) => {
                if let Some(last) = self.last_tick.replace(now) {
                    let delta = now.saturating_duration_since(last);
                    self.intro_elapsed += delta;
                    stats::update(stats::Message::Tick(delta), &mut self.stats);
                }
                Task::none()
            }
            Message::Header(header::Message::Navigate(section)) => {
                self.menu_open = false;
                scroll_to_section(section)
            }
            Message::Header(header::Message::CycleTheme) => {
                self.theme_store.cycle(&mut self.surface);
                Task::none()
            }
            Message::Header(header::Message::ToggleMenu) => {
                self.menu_open = !self.menu_open;
                Task::none()
            }
            Message::Hero(hero::Message::Navigate(section)) => scroll_to_section(section),
            Message::Footer(footer::Message::Navigate(section)) => scroll_to_section(section),
            Message::BackToTop(back_to_top::Message::Pressed) => {
                scroll_to_section(Section::Home)
            }
            Message::Stats(msg) => {
                match stats::update(msg, &mut self.stats) {
                    stats::Event::None => {}
                    stats::Event::DurationChanged(secs) => persist_radar_duration(secs),
                }
                Task::none()
            }
            Message::Contact(msg) => match contact::update(msg, &mut self.contact) {
                contact::Event::None => Task::none(),
                contact::Event::SubmissionStarted { generation } => Task::perform(
                    tokio::time::sleep(contact::SUBMIT_DELAY),
                    move |()| {
                        Message::Contact(contact::Message::SubmissionFinished {
                            generation,
                            outcome: contact::Outcome::Success,
                        })
                    },
                ),
                contact::Event::OutcomeSettled { generation } => Task::perform(
                    tokio::time::sleep(contact::BANNER_DURATION),
                    move |()| Message::Contact(contact::Message::BannerExpired { generation }),
                ),
            },
            Message::PageScrolled(viewport) => {
                self.scroll_offset = viewport.absolute_offset().y;
                Task::none()
            }
            Message::DismissStartupWarning => {
                self.startup_warning = None;
                Task::none()
            }
        }
    }
}

fn scroll_to_section(section: Section) -> Task<Message> {
    operation::snap_to(
        Id::new(PAGE_SCROLL_ID),
        RelativeOffset {
            x: 0.0,
            y: section.scroll_fraction(),
        },
    )
}

/// Write-through of the sweep duration, preserving unrelated settings.
fn persist_radar_duration(secs: f32) {
    let (mut cfg, _warning) = config::load();
    cfg.animation.radar_duration_secs = Some(secs);
    if let Err(error) = config::save(&cfg) {
        eprintln!("Failed to save animation settings: {:?}", error);
    }
}
