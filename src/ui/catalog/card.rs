// SPDX-License-Identifier: MPL-2.0
//! A single product card: thumbnail, title, and price.

use super::component::Message;
use crate::catalog::Product;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::{image, space, Column, Container, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Renders one product card.
///
/// The image slot is a fixed bounding box; a downloaded thumbnail fits
/// inside it preserving its aspect ratio, and a neutral box fills the slot
/// until the download completes (or permanently, if it failed).
pub fn view<'a>(product: &'a Product, thumbnail: Option<&Handle>) -> Element<'a, Message> {
    let image_slot: Element<'a, Message> = match thumbnail {
        Some(handle) => image(handle.clone())
            .width(sizing::THUMBNAIL)
            .height(sizing::THUMBNAIL)
            .content_fit(ContentFit::Contain)
            .into(),
        None => Container::new(space::horizontal())
            .width(sizing::THUMBNAIL)
            .height(sizing::THUMBNAIL)
            .style(styles::container::thumbnail_slot)
            .into(),
    };

    let title = Text::new(product.title.as_str())
        .size(typography::BODY)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let price = Text::new(product.price_label())
        .size(typography::BODY)
        .color(palette::SUCCESS_500);

    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(image_slot)
        .push(title)
        .push(price);

    Container::new(content)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}
