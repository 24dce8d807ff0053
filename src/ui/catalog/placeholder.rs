// SPDX-License-Identifier: MPL-2.0
//! Placeholder line shown while the catalog loads.
//!
//! Also rendered when the catalog arrives empty; the two situations share
//! one visual state.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, typography};
use iced::widget::{Container, Text};
use iced::{alignment, Element, Length};

pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let line = Text::new(i18n.tr("catalog-loading"))
        .size(typography::BODY_LG)
        .color(palette::GRAY_400);

    Container::new(line)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
