// SPDX-License-Identifier: MPL-2.0
//! Product catalog domain and the client that fetches it.
//!
//! The catalog is owned by the remote service; this module holds the
//! read-only record type and the two outbound operations — fetching the
//! product list once and downloading individual product images.

pub mod client;
pub mod types;

pub use client::{fetch_products, fetch_thumbnail};
pub use types::Product;
