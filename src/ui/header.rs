// SPDX-License-Identifier: MPL-2.0
//! Fixed navigation bar: brand, section links, theme cycle button, and a
//! compact dropdown menu.

use crate::content::Section;
use crate::i18n::I18n;
use crate::theme::{ColorScheme, ThemeVariant};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Row};
use iced::{Alignment, Element, Length};

/// Scroll offset past which the bar renders elevated.
pub const ELEVATE_THRESHOLD: f32 = 50.0;

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scheme: ColorScheme,
    pub variant: ThemeVariant,
    pub menu_open: bool,
    pub elevated: bool,
}

/// Messages emitted by the header.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Section),
    CycleTheme,
    ToggleMenu,
}

/// Render the navigation bar (plus the dropdown menu when it is open).
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = button(
        text(ctx.i18n.tr("hero-name"))
            .size(typography::TITLE_MD)
            .color(ctx.scheme.accent),
    )
    .on_press(Message::Navigate(Section::Home))
    .style(styles::button::link(&ctx.scheme))
    .padding(spacing::XS);

    let mut links = Row::new().spacing(spacing::XS);
    for section in Section::NAV {
        links = links.push(
            button(text(ctx.i18n.tr(section.label_key())).size(typography::BODY))
                .on_press(Message::Navigate(section))
                .style(styles::button::link(&ctx.scheme))
                .padding([spacing::XXS, spacing::XS]),
        );
    }

    let theme_label = match ctx.variant {
        ThemeVariant::Light => ctx.i18n.tr("theme-light"),
        ThemeVariant::Dark => ctx.i18n.tr("theme-dark"),
        ThemeVariant::Gradient => ctx.i18n.tr("theme-gradient"),
    };
    let theme_button = button(text(format!("◐ {theme_label}")).size(typography::BODY))
        .on_press(Message::CycleTheme)
        .style(styles::button::secondary(&ctx.scheme))
        .padding([spacing::XXS, spacing::SM]);

    let menu_button = button(text("☰").size(typography::TITLE_SM))
        .on_press(Message::ToggleMenu)
        .style(styles::button::link(&ctx.scheme))
        .padding([spacing::XXS, spacing::XS]);

    let bar = Row::new()
        .align_y(Alignment::Center)
        .spacing(spacing::LG)
        .push(brand)
        .push(iced::widget::space::horizontal())
        .push(links)
        .push(theme_button)
        .push(menu_button);

    let bar = container(bar)
        .style(styles::container::navbar(&ctx.scheme, ctx.elevated))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding([0.0, spacing::LG])
        .align_y(Alignment::Center);

    if ctx.menu_open {
        Column::new()
            .push(bar)
            .push(dropdown_menu(&ctx))
            .width(Length::Fill)
            .into()
    } else {
        bar.into()
    }
}

fn dropdown_menu<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut items = Column::new().spacing(spacing::XXS);
    for section in Section::NAV {
        items = items.push(
            button(text(ctx.i18n.tr(section.label_key())).size(typography::BODY_LG))
                .on_press(Message::Navigate(section))
                .style(styles::button::link(&ctx.scheme))
                .padding([spacing::XXS, spacing::SM])
                .width(Length::Fill),
        );
    }

    container(items)
        .style(styles::container::card(&ctx.scheme))
        .padding(spacing::SM)
        .width(Length::Fill)
        .into()
}
