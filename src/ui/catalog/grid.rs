// SPDX-License-Identifier: MPL-2.0
//! Responsive card grid.
//!
//! The column count follows the available width: as many columns of at
//! least the card minimum width as fit, never fewer than one. Products stay
//! in the order the service returned them; rows are keyed by their leading
//! product id so re-renders stay stable.

use super::card;
use super::component::Message;
use crate::catalog::Product;
use crate::ui::design_tokens::{sizing, spacing};
use iced::widget::image::Handle;
use iced::widget::{keyed_column, responsive, scrollable, space, Row};
use iced::{Element, Length};
use std::collections::HashMap;

pub fn view<'a>(
    products: &'a [Product],
    thumbnails: &'a HashMap<u64, Handle>,
) -> Element<'a, Message> {
    responsive(move |size| {
        let columns = column_count(size.width);

        let rows = products.chunks(columns).map(|chunk| {
            let key = chunk.first().map(|product| product.id).unwrap_or_default();

            let mut row = Row::new().spacing(spacing::LG);
            for product in chunk {
                row = row.push(card::view(product, thumbnails.get(&product.id)));
            }
            // Pad the trailing row so every card keeps the same width.
            for _ in chunk.len()..columns {
                row = row.push(space::horizontal());
            }

            let element: Element<'a, Message> = row.into();
            (key, element)
        });

        scrollable(
            keyed_column(rows)
                .spacing(spacing::LG)
                .width(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    })
    .into()
}

fn column_count(available_width: f32) -> usize {
    ((available_width / sizing::CARD_MIN_WIDTH) as usize).max(1)
}
