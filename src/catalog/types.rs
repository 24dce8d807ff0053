// SPDX-License-Identifier: MPL-2.0
//! Catalog record types.

use serde::Deserialize;

/// A single catalog entry as served by the remote catalog service.
///
/// The service owns the records; the viewer keeps a read-only copy for the
/// duration of one session. Fields the service sends beyond the ones modeled
/// here are ignored during decoding.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    /// Unique, opaque identifier. Cards and thumbnails are keyed by it.
    pub id: u64,
    pub title: String,
    /// Currency-less numeric price.
    pub price: f64,
    /// URI of the product's raster image.
    pub image: String,
}

impl Product {
    /// Price text shown on a card: the bare numeric value with the shop's
    /// currency suffix (`9.99` → `"9.99 $"`, whole prices lose the fraction).
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("{} $", self.price)
    }
}
