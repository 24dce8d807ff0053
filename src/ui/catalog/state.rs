// SPDX-License-Identifier: MPL-2.0
//! Display state machine for the catalog view.

use crate::catalog::Product;
use crate::error::Error;

/// The exclusive set of display modes for the catalog.
///
/// Exactly one variant holds at any instant; the initial state is `Loading`
/// and the transition out of it is one-shot. `Error` carries the final
/// human-readable message (status failures embed the numeric code,
/// transport and decode failures the underlying description).
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Error(String),
    Loaded(Vec<Product>),
}

impl Default for ViewState {
    fn default() -> Self {
        Self::Loading
    }
}

impl ViewState {
    /// Applies the fetch outcome, transitioning out of `Loading`.
    ///
    /// Returns `false` without touching the state when it has already
    /// settled — a completion arriving after the state left `Loading` (a
    /// duplicate result, or one that outlived its view) is dropped.
    pub fn settle(&mut self, outcome: Result<Vec<Product>, Error>) -> bool {
        if !matches!(self, ViewState::Loading) {
            return false;
        }

        *self = match outcome {
            Ok(products) => ViewState::Loaded(products),
            Err(err) => ViewState::Error(err.to_string()),
        };
        true
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        !matches!(self, ViewState::Loading)
    }
}
