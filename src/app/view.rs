// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The whole portfolio is one scrollable column of sections under a fixed
//! header, with the back-to-top button stacked on top once the page has
//! scrolled past the hero.

use super::update::PAGE_SCROLL_ID;
use super::{App, Message};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::{
    about, back_to_top, contact, experience, footer, header, hero, projects, skills, stats,
};
use iced::widget::{button, container, scrollable, text, Column, Id, Row, Stack};
use iced::{Alignment, Element, Length};
use std::time::Duration;

/// How long the skill bars take to grow to their final levels.
const SKILL_REVEAL: Duration = Duration::from_millis(900);

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let scheme = self.surface.scheme;

        let header_bar = header::view(header::ViewContext {
            i18n: &self.i18n,
            scheme,
            variant: self.surface.variant,
            menu_open: self.menu_open,
            elevated: self.scroll_offset > header::ELEVATE_THRESHOLD,
        })
        .map(Message::Header);

        let skills_reveal =
            (self.intro_elapsed.as_secs_f32() / SKILL_REVEAL.as_secs_f32()).min(1.0);

        let mut page = Column::new().width(Length::Fill);
        if let Some(key) = &self.startup_warning {
            page = page.push(self.warning_banner(key));
        }
        page = page
            .push(hero::view(&self.i18n, scheme, self.intro_elapsed).map(Message::Hero))
            .push(section(about::view(&self.i18n, scheme)))
            .push(section(skills::view(&self.i18n, scheme, skills_reveal)))
            .push(section(
                stats::view(&self.stats, &self.i18n, scheme).map(Message::Stats),
            ))
            .push(section(projects::view(&self.i18n, scheme)))
            .push(section(experience::view(&self.i18n, scheme)))
            .push(section(
                contact::view(&self.contact, &self.i18n, scheme).map(Message::Contact),
            ))
            .push(footer::view(&self.i18n, scheme).map(Message::Footer));

        let scroll = scrollable(page)
            .id(Id::new(PAGE_SCROLL_ID))
            .on_scroll(Message::PageScrolled)
            .width(Length::Fill)
            .height(Length::Fill);

        let backdrop = container(
            Column::new()
                .push(header_bar)
                .push(scroll)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .style(styles::container::page(&scheme))
        .width(Length::Fill)
        .height(Length::Fill);

        let mut layers = Stack::new().push(backdrop);
        if self.scroll_offset > back_to_top::SHOW_THRESHOLD {
            layers = layers.push(back_to_top::view(&self.i18n, scheme).map(Message::BackToTop));
        }
        layers.into()
    }

    fn warning_banner<'a>(&self, key: &str) -> Element<'a, Message> {
        let scheme = self.surface.scheme;
        container(
            Row::new()
                .align_y(Alignment::Center)
                .spacing(spacing::SM)
                .push(
                    text(self.i18n.tr(key))
                        .size(typography::BODY_SM)
                        .width(Length::Fill),
                )
                .push(
                    button(text("✕").size(typography::BODY_SM))
                        .on_press(Message::DismissStartupWarning)
                        .style(styles::button::link(&scheme))
                        .padding(spacing::XXS),
                ),
        )
        .style(styles::container::status_banner(&scheme, false))
        .padding([spacing::XS, spacing::MD])
        .width(Length::Fill)
        .into()
    }
}

/// Uniform vertical rhythm between sections.
fn section(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .padding([spacing::SECTION / 2.0, spacing::LG])
        .width(Length::Fill)
        .into()
}
