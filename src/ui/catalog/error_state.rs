// SPDX-License-Identifier: MPL-2.0
//! Error line shown when the catalog fetch failed.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, typography};
use iced::widget::{Container, Text};
use iced::{alignment, Element, Length};

/// Renders the localized error prefix followed by the failure message
/// (status code or transport/decode description).
pub fn view<'a>(i18n: &I18n, message: &str) -> Element<'a, Message> {
    let line = Text::new(format!("{} {}", i18n.tr("catalog-error-prefix"), message))
        .size(typography::BODY_LG)
        .color(palette::ERROR_500);

    Container::new(line)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
