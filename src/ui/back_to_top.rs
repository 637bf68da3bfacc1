// SPDX-License-Identifier: MPL-2.0
//! Floating back-to-top control, shown once the page has scrolled past the
//! hero.

use crate::i18n::I18n;
use crate::theme::ColorScheme;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text};
use iced::{Alignment, Element, Length};

/// Absolute scroll offset in logical pixels past which the button appears.
pub const SHOW_THRESHOLD: f32 = 300.0;

#[derive(Debug, Clone)]
pub enum Message {
    Pressed,
}

pub fn view<'a>(i18n: &I18n, scheme: ColorScheme) -> Element<'a, Message> {
    container(
        button(text(format!("↑ {}", i18n.tr("back-to-top"))).size(typography::BODY_SM))
            .on_press(Message::Pressed)
            .style(styles::button::primary(&scheme))
            .padding([spacing::XS, spacing::MD]),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Alignment::End)
    .align_y(Alignment::End)
    .padding(spacing::LG)
    .into()
}
