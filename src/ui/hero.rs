// SPDX-License-Identifier: MPL-2.0
//! Landing section: greeting, typewriter name reveal, role line, summary, and
//! the two call-to-action buttons.

use crate::content::Section;
use crate::i18n::I18n;
use crate::theme::ColorScheme;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Row};
use iced::{Alignment, Element, Length};
use std::time::Duration;

/// Time per revealed character of the name headline.
const TYPE_INTERVAL: Duration = Duration::from_millis(80);

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Section),
}

/// How much of `name` the typewriter has revealed after `intro` of app time.
/// The cursor block stays attached until the whole name is out.
fn typed_name(name: &str, intro: Duration) -> String {
    let total = name.chars().count();
    let shown = (intro.as_millis() / TYPE_INTERVAL.as_millis()) as usize;
    if shown >= total {
        name.to_owned()
    } else {
        let mut partial: String = name.chars().take(shown).collect();
        partial.push('▌');
        partial
    }
}

pub fn view<'a>(i18n: &I18n, scheme: ColorScheme, intro: Duration) -> Element<'a, Message> {
    let headline = Column::new()
        .align_x(Alignment::Center)
        .spacing(spacing::XS)
        .push(
            text(i18n.tr("hero-greeting"))
                .size(typography::TITLE_LG)
                .color(scheme.text),
        )
        .push(
            text(typed_name(&i18n.tr("hero-name"), intro))
                .size(typography::DISPLAY)
                .color(scheme.accent),
        )
        .push(
            text(format!(
                "{} · {}",
                i18n.tr("hero-role-primary"),
                i18n.tr("hero-role-secondary")
            ))
            .size(typography::TITLE_SM)
            .color(scheme.text_secondary()),
        );

    let summary = container(
        text(i18n.tr("hero-summary"))
            .size(typography::BODY_LG)
            .color(scheme.text_secondary())
            .center(),
    )
    .max_width(sizing::CONTENT_WIDTH * 0.7);

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            button(text(format!("{} ↓", i18n.tr("hero-view-portfolio"))).size(typography::BODY_LG))
                .on_press(Message::Navigate(Section::Projects))
                .style(styles::button::primary(&scheme))
                .padding([spacing::SM, spacing::XL]),
        )
        .push(
            button(text(format!("✉ {}", i18n.tr("hero-contact-me"))).size(typography::BODY_LG))
                .on_press(Message::Navigate(Section::Contact))
                .style(styles::button::secondary(&scheme))
                .padding([spacing::SM, spacing::XL]),
        );

    let scroll_hint = text("⌄")
        .size(typography::TITLE_LG)
        .color(scheme.text_secondary());

    container(
        Column::new()
            .align_x(Alignment::Center)
            .spacing(spacing::XL)
            .push(headline)
            .push(summary)
            .push(actions)
            .push(scroll_hint),
    )
    .width(Length::Fill)
    .align_x(Alignment::Center)
    .padding([spacing::SECTION, spacing::LG])
    .into()
}
