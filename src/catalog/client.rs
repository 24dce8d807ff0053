// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the remote catalog service.
//!
//! One GET for the product list, one GET per product image. No retries, no
//! imposed timeout; the network layer's own failure behavior applies.

use crate::catalog::Product;
use crate::error::{Error, Result};
use iced::widget::image;

const USER_AGENT: &str = concat!("IcedVitrine/", env!("CARGO_PKG_VERSION"));

fn build_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| Error::Network(e.to_string()))
}

/// Fetches the product list from `endpoint`.
///
/// Success requires a 2xx status and a body that decodes as a JSON array of
/// products; the server-provided order is preserved. Anything else maps onto
/// the catalog error taxonomy: transport failures to [`Error::Network`],
/// non-success statuses to [`Error::Status`], malformed bodies to
/// [`Error::Decode`].
pub async fn fetch_products(endpoint: String) -> Result<Vec<Product>> {
    let client = build_client()?;

    let response = client
        .get(&endpoint)
        .send()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status(status.as_u16()));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    Ok(serde_json::from_slice(&body)?)
}

/// Downloads one product image and wraps the bytes in an Iced image handle.
///
/// Decoding happens lazily inside the image widget, so a payload that is not
/// a valid raster image surfaces as a blank thumbnail rather than an error.
pub async fn fetch_thumbnail(url: String) -> Result<image::Handle> {
    let client = build_client()?;

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status(status.as_u16()));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    Ok(image::Handle::from_bytes(body.to_vec()))
}
