// SPDX-License-Identifier: MPL-2.0
//! Projects section: a grid of project cards with technology chips.

use crate::content::{self, Project};
use crate::i18n::I18n;
use crate::theme::ColorScheme;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{container, text, Column, Row};
use iced::{Alignment, Element, Length};

const CARDS_PER_ROW: usize = 2;

pub fn view<'a, Message: 'a>(i18n: &I18n, scheme: ColorScheme) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(spacing::LG);
    for chunk in content::PROJECTS.chunks(CARDS_PER_ROW) {
        let mut row = Row::new().spacing(spacing::LG);
        for project in chunk {
            row = row.push(card(project, i18n, scheme));
        }
        rows = rows.push(row);
    }

    let view_all = text(format!("{} → github.com/ridwantaufik", i18n.tr("projects-view-all")))
        .size(typography::BODY)
        .color(scheme.accent);

    container(
        Column::new()
            .align_x(Alignment::Center)
            .spacing(spacing::XL)
            .push(
                text(i18n.tr("projects-title"))
                    .size(typography::TITLE_LG)
                    .color(scheme.text),
            )
            .push(rows)
            .push(view_all),
    )
    .width(Length::Fill)
    .align_x(Alignment::Center)
    .into()
}

fn card<'a, Message: 'a>(
    project: &'static Project,
    i18n: &I18n,
    scheme: ColorScheme,
) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::SM);

    if project.featured {
        column = column.push(
            container(
                text(i18n.tr("projects-featured-badge"))
                    .size(typography::CAPTION)
                    .color(iced::Color::WHITE),
            )
            .style(move |_theme| iced::widget::container::Style {
                background: Some(iced::Background::Color(scheme.accent)),
                border: iced::Border {
                    radius: crate::ui::design_tokens::radius::FULL.into(),
                    ..Default::default()
                },
                ..Default::default()
            })
            .padding([spacing::XXS, spacing::SM]),
        );
    }

    column = column
        .push(
            text(project.title)
                .size(typography::TITLE_SM)
                .color(scheme.text),
        )
        .push(
            text(project.description)
                .size(typography::BODY)
                .color(scheme.text_secondary()),
        );

    let mut chips = Row::new().spacing(spacing::XXS);
    for tech in project.technologies {
        chips = chips.push(
            container(text(*tech).size(typography::CAPTION))
                .style(styles::container::chip(&scheme))
                .padding([spacing::XXS, spacing::XS]),
        );
    }
    column = column.push(chips);

    column = column.push(
        text(format!("{} · {}", i18n.tr("projects-code-label"), project.github_url))
            .size(typography::CAPTION)
            .color(scheme.text_secondary()),
    );

    container(column)
        .style(styles::container::card(&scheme))
        .padding(spacing::LG)
        .width(Length::FillPortion(1))
        .into()
}
