// SPDX-License-Identifier: MPL-2.0
//! About section: biography paragraphs, headline numbers, and social links.
//!
//! Purely presentational, so the view is generic over the parent's message
//! type.

use crate::content;
use crate::i18n::I18n;
use crate::theme::ColorScheme;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{container, text, Column, Row};
use iced::{Alignment, Background, Border, Element, Length, Theme};

pub fn view<'a, Message: 'a>(i18n: &I18n, scheme: ColorScheme) -> Element<'a, Message> {
    let avatar = container(
        text(content::INITIALS)
            .size(typography::TITLE_LG)
            .color(scheme.background),
    )
    .style(move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.accent)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .width(Length::Fixed(sizing::AVATAR))
    .height(Length::Fixed(sizing::AVATAR))
    .align_x(Alignment::Center)
    .align_y(Alignment::Center);

    let mut paragraphs = Column::new().spacing(spacing::MD);
    for key in ["about-paragraph-1", "about-paragraph-2", "about-paragraph-3"] {
        paragraphs = paragraphs.push(
            text(i18n.tr(key))
                .size(typography::BODY_LG)
                .color(scheme.text_secondary()),
        );
    }

    let mut stats = Row::new().spacing(spacing::MD);
    for stat in content::ABOUT_STATS {
        stats = stats.push(
            container(
                Column::new()
                    .align_x(Alignment::Center)
                    .spacing(spacing::XXS)
                    .push(
                        text(stat.number)
                            .size(typography::TITLE_MD)
                            .color(scheme.accent),
                    )
                    .push(
                        text(i18n.tr(stat.label_key))
                            .size(typography::BODY_SM)
                            .color(scheme.text_secondary()),
                    ),
            )
            .style(styles::container::card(&scheme))
            .padding(spacing::MD)
            .width(Length::FillPortion(1)),
        );
    }

    let mut socials = Row::new().spacing(spacing::XS);
    for link in content::SOCIAL_LINKS {
        socials = socials.push(
            container(text(link.name).size(typography::BODY_SM))
                .style(styles::container::chip(&scheme))
                .padding([spacing::XXS, spacing::SM]),
        );
    }

    container(
        Column::new()
            .align_x(Alignment::Center)
            .spacing(spacing::XL)
            .push(
                text(i18n.tr("about-title"))
                    .size(typography::TITLE_LG)
                    .color(scheme.text),
            )
            .push(avatar)
            .push(paragraphs)
            .push(stats)
            .push(socials),
    )
    .width(Length::Fill)
    .align_x(Alignment::Center)
    .max_width(sizing::CONTENT_WIDTH)
    .into()
}
