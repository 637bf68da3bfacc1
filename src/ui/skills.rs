// SPDX-License-Identifier: MPL-2.0
//! Skills section: categorized proficiency bars. The bars grow from zero to
//! their level during the intro, driven by the `reveal` fraction.

use crate::content::{self, Skill};
use crate::i18n::I18n;
use crate::theme::ColorScheme;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{container, space::horizontal as horizontal_space, text, Column, Row, Space};
use iced::{Alignment, Element, Length};

pub fn view<'a, Message: 'a>(i18n: &I18n, scheme: ColorScheme, reveal: f32) -> Element<'a, Message> {
    let reveal = reveal.clamp(0.0, 1.0);

    let mut grid = Row::new().spacing(spacing::LG);
    for category in content::SKILL_CATEGORIES {
        let mut card = Column::new().spacing(spacing::SM).push(
            text(i18n.tr(category.title_key))
                .size(typography::TITLE_SM)
                .color(scheme.accent),
        );
        for skill in category.skills {
            card = card.push(skill_row(*skill, scheme, reveal));
        }

        grid = grid.push(
            container(card)
                .style(styles::container::card(&scheme))
                .padding(spacing::LG)
                .width(Length::FillPortion(1)),
        );
    }

    container(
        Column::new()
            .align_x(Alignment::Center)
            .spacing(spacing::XL)
            .push(
                text(i18n.tr("skills-title"))
                    .size(typography::TITLE_LG)
                    .color(scheme.text),
            )
            .push(grid),
    )
    .width(Length::Fill)
    .align_x(Alignment::Center)
    .into()
}

fn skill_row<'a, Message: 'a>(skill: Skill, scheme: ColorScheme, reveal: f32) -> Element<'a, Message> {
    let label = Row::new()
        .push(text(skill.name).size(typography::BODY).color(scheme.text))
        .push(horizontal_space())
        .push(
            text(format!("{}%", skill.level))
                .size(typography::BODY_SM)
                .color(scheme.text_secondary()),
        );

    // The fill and the remainder split the track proportionally. The label
    // always shows the final level; only the fill follows the reveal.
    let level = u16::from(skill.level.min(100));
    let filled = (f32::from(level) * reveal).round() as u16;
    let mut bar = Row::new().height(Length::Fixed(sizing::SKILL_BAR_HEIGHT));
    if filled > 0 {
        bar = bar.push(
            container(Space::new().width(Length::Fill).height(Length::Fill))
                .style(styles::container::bar_fill(&scheme))
                .width(Length::FillPortion(filled))
                .height(Length::Fill),
        );
    }
    if filled < 100 {
        bar = bar.push(Space::new().width(Length::FillPortion(100 - filled)).height(Length::Fill));
    }

    Column::new()
        .spacing(spacing::XXS)
        .push(label)
        .push(
            container(bar)
                .style(styles::container::bar_track(&scheme))
                .width(Length::Fill),
        )
        .into()
}
