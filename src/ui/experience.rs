// SPDX-License-Identifier: MPL-2.0
//! Experience section: the work history timeline.

use crate::content::{self, Experience};
use crate::i18n::I18n;
use crate::theme::ColorScheme;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{container, text, Column, Row};
use iced::{Alignment, Element, Length};

pub fn view<'a, Message: 'a>(i18n: &I18n, scheme: ColorScheme) -> Element<'a, Message> {
    let mut entries = Column::new().spacing(spacing::LG);
    for experience in &content::EXPERIENCES {
        entries = entries.push(entry(experience, i18n, scheme));
    }

    container(
        Column::new()
            .align_x(Alignment::Center)
            .spacing(spacing::XL)
            .push(
                text(i18n.tr("experience-title"))
                    .size(typography::TITLE_LG)
                    .color(scheme.text),
            )
            .push(entries),
    )
    .width(Length::Fill)
    .align_x(Alignment::Center)
    .into()
}

fn entry<'a, Message: 'a>(
    experience: &'static Experience,
    i18n: &I18n,
    scheme: ColorScheme,
) -> Element<'a, Message> {
    let heading = Column::new()
        .spacing(spacing::XXS)
        .push(
            text(experience.title)
                .size(typography::TITLE_SM)
                .color(scheme.text),
        )
        .push(
            text(format!(
                "{} · {} · {}",
                experience.company, experience.period, experience.location
            ))
            .size(typography::BODY_SM)
            .color(scheme.accent),
        );

    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(heading)
        .push(
            text(experience.description)
                .size(typography::BODY)
                .color(scheme.text_secondary()),
        )
        .push(
            text(i18n.tr("experience-responsibilities"))
                .size(typography::BODY_SM)
                .color(scheme.text),
        );

    for responsibility in experience.responsibilities {
        column = column.push(
            text(format!("• {responsibility}"))
                .size(typography::BODY_SM)
                .color(scheme.text_secondary()),
        );
    }

    let mut chips = Row::new().spacing(spacing::XXS);
    for tech in experience.technologies {
        chips = chips.push(
            container(text(*tech).size(typography::CAPTION))
                .style(styles::container::chip(&scheme))
                .padding([spacing::XXS, spacing::XS]),
        );
    }
    column = column
        .push(
            text(i18n.tr("experience-technologies"))
                .size(typography::BODY_SM)
                .color(scheme.text),
        )
        .push(chips);

    container(column)
        .style(styles::container::card(&scheme))
        .padding(spacing::LG)
        .width(Length::Fill)
        .into()
}
