// SPDX-License-Identifier: MPL-2.0
//! Footer: brand block, quick navigation, social links, and the closing
//! quote.

use crate::content::{self, Section};
use crate::i18n::I18n;
use crate::theme::ColorScheme;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Row};
use iced::{Alignment, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Section),
}

pub fn view<'a>(i18n: &I18n, scheme: ColorScheme) -> Element<'a, Message> {
    let brand = Column::new()
        .spacing(spacing::XS)
        .push(
            text(i18n.tr("hero-name"))
                .size(typography::TITLE_SM)
                .color(scheme.accent),
        )
        .push(
            text(i18n.tr("footer-tagline"))
                .size(typography::BODY_SM)
                .color(scheme.text_secondary()),
        );

    let mut links = Column::new().spacing(spacing::XXS).push(
        text(i18n.tr("footer-quick-links"))
            .size(typography::BODY)
            .color(scheme.text),
    );
    for section in Section::NAV {
        links = links.push(
            button(
                text(i18n.tr(section.label_key()))
                    .size(typography::BODY_SM)
                    .color(scheme.text_secondary()),
            )
            .on_press(Message::Navigate(section))
            .style(styles::button::link(&scheme))
            .padding(0),
        );
    }

    let mut socials = Column::new().spacing(spacing::XXS).push(
        text(i18n.tr("footer-connect"))
            .size(typography::BODY)
            .color(scheme.text),
    );
    for link in content::SOCIAL_LINKS {
        socials = socials.push(
            text(format!("{} · {}", link.name, link.url))
                .size(typography::BODY_SM)
                .color(scheme.text_secondary()),
        );
    }

    let columns = Row::new()
        .spacing(spacing::XL)
        .push(container(brand).width(Length::FillPortion(2)))
        .push(container(links).width(Length::FillPortion(1)))
        .push(container(socials).width(Length::FillPortion(2)));

    let closing = Column::new()
        .align_x(Alignment::Center)
        .spacing(spacing::XXS)
        .push(
            text(i18n.tr("footer-cta"))
                .size(typography::BODY)
                .color(scheme.accent),
        )
        .push(
            text(format!("© 2025 {}. {}", i18n.tr("hero-name"), i18n.tr("footer-rights")))
                .size(typography::CAPTION)
                .color(scheme.text_secondary()),
        )
        .push(
            text(i18n.tr("footer-quote"))
                .size(typography::CAPTION)
                .color(scheme.text_secondary()),
        );

    container(
        Column::new()
            .spacing(spacing::XL)
            .push(columns)
            .push(closing),
    )
    .style(styles::container::card(&scheme))
    .padding(spacing::XL)
    .width(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::theme::ThemeVariant;

    #[test]
    fn test_footer_renders_for_all_variants() {
        let i18n = I18n::new(None, &Config::default());
        for variant in ThemeVariant::ALL {
            let _element: Element<'_, Message> = view(&i18n, variant.scheme());
        }
    }
}
