// SPDX-License-Identifier: MPL-2.0
//! Catalog component encapsulating state and update logic.
//!
//! The component owns the one-shot fetch lifecycle: `start_load` launches the
//! catalog request at most once, `handle_message` applies completions on the
//! update loop, and `view` renders the current display state. Thumbnails are
//! fetched after the catalog arrives and cached by product id, so a late or
//! out-of-order download can never attach to the wrong card.

use crate::catalog::{client, Product};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::catalog::{error_state, grid, placeholder, ViewState};
use iced::widget::image;
use iced::{Element, Task};
use std::collections::HashMap;

/// Messages emitted by catalog-related tasks and widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// The one-shot catalog fetch finished.
    CatalogLoaded(Result<Vec<Product>, Error>),
    /// A product image finished downloading.
    ThumbnailLoaded {
        id: u64,
        result: Result<image::Handle, Error>,
    },
}

/// Environment the caller provides for rendering.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

/// Catalog view state: the display state machine plus per-product thumbnail
/// handles.
#[derive(Debug, Default)]
pub struct State {
    endpoint: String,
    load_started: bool,
    view_state: ViewState,
    thumbnails: HashMap<u64, image::Handle>,
}

impl State {
    #[must_use]
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            ..Self::default()
        }
    }

    /// Launches the catalog fetch.
    ///
    /// The trigger is idempotent: only the first call per component lifetime
    /// issues a request, later calls are no-ops.
    pub fn start_load(&mut self) -> Task<Message> {
        if self.load_started {
            return Task::none();
        }
        self.load_started = true;

        let endpoint = self.endpoint.clone();
        Task::perform(client::fetch_products(endpoint), Message::CatalogLoaded)
    }

    pub fn handle_message(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogLoaded(outcome) => {
                if !self.view_state.settle(outcome) {
                    return Task::none();
                }

                let ViewState::Loaded(products) = &self.view_state else {
                    return Task::none();
                };

                let downloads = products.iter().map(|product| {
                    let id = product.id;
                    let url = product.image.clone();
                    Task::perform(client::fetch_thumbnail(url), move |result| {
                        Message::ThumbnailLoaded { id, result }
                    })
                });
                Task::batch(downloads)
            }
            Message::ThumbnailLoaded { id, result } => {
                // A failed download leaves the card on its neutral slot; a
                // completion arriving outside the Loaded state is dropped.
                if matches!(self.view_state, ViewState::Loaded(_)) {
                    if let Ok(handle) = result {
                        self.thumbnails.insert(id, handle);
                    }
                }
                Task::none()
            }
        }
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        match &self.view_state {
            ViewState::Loading => placeholder::view(env.i18n),
            // An empty catalog keeps the pre-fetch placeholder.
            ViewState::Loaded(products) if products.is_empty() => placeholder::view(env.i18n),
            ViewState::Loaded(products) => grid::view(products, &self.thumbnails),
            ViewState::Error(message) => error_state::view(env.i18n, message),
        }
    }

    #[must_use]
    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn has_started_load(&self) -> bool {
        self.load_started
    }

    /// Whether the view currently renders the shared placeholder line
    /// (still loading, or loaded but empty).
    #[must_use]
    pub fn shows_placeholder(&self) -> bool {
        match &self.view_state {
            ViewState::Loading => true,
            ViewState::Loaded(products) => products.is_empty(),
            ViewState::Error(_) => false,
        }
    }

    #[must_use]
    pub fn thumbnail(&self, id: u64) -> Option<&image::Handle> {
        self.thumbnails.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product(id: u64) -> Product {
        Product {
            id,
            title: format!("product-{id}"),
            price: 9.99,
            image: format!("http://x/{id}.png"),
        }
    }

    fn sample_handle() -> image::Handle {
        image::Handle::from_rgba(1, 1, vec![255_u8; 4])
    }

    #[test]
    fn start_load_is_idempotent() {
        let mut state = State::new("http://localhost/products".into());
        assert!(!state.has_started_load());

        let _ = state.start_load();
        assert!(state.has_started_load());
        assert!(!state.view_state().is_settled());

        // Re-triggering must not reset anything.
        let _ = state.start_load();
        assert!(state.has_started_load());
        assert!(!state.view_state().is_settled());
    }

    #[test]
    fn catalog_loaded_settles_and_shows_grid() {
        let mut state = State::new(String::new());
        let _ = state.handle_message(Message::CatalogLoaded(Ok(vec![
            sample_product(1),
            sample_product(2),
        ])));

        assert!(state.view_state().is_settled());
        assert!(!state.shows_placeholder());
    }

    #[test]
    fn empty_catalog_keeps_the_placeholder() {
        let mut state = State::new(String::new());
        let _ = state.handle_message(Message::CatalogLoaded(Ok(vec![])));

        assert!(state.view_state().is_settled());
        assert!(state.shows_placeholder());
    }

    #[test]
    fn failed_fetch_shows_error_not_placeholder() {
        let mut state = State::new(String::new());
        let _ = state.handle_message(Message::CatalogLoaded(Err(Error::Status(500))));

        assert!(matches!(state.view_state(), ViewState::Error(m) if m.contains("500")));
        assert!(!state.shows_placeholder());
    }

    #[test]
    fn thumbnails_are_keyed_by_product_id() {
        let mut state = State::new(String::new());
        let _ = state.handle_message(Message::CatalogLoaded(Ok(vec![sample_product(7)])));

        let _ = state.handle_message(Message::ThumbnailLoaded {
            id: 7,
            result: Ok(sample_handle()),
        });

        assert!(state.thumbnail(7).is_some());
        assert!(state.thumbnail(8).is_none());
    }

    #[test]
    fn failed_thumbnail_is_nonfatal() {
        let mut state = State::new(String::new());
        let _ = state.handle_message(Message::CatalogLoaded(Ok(vec![sample_product(7)])));

        let _ = state.handle_message(Message::ThumbnailLoaded {
            id: 7,
            result: Err(Error::Status(404)),
        });

        assert!(state.thumbnail(7).is_none());
        assert!(matches!(state.view_state(), ViewState::Loaded(_)));
    }

    #[test]
    fn late_thumbnail_outside_loaded_state_is_dropped() {
        let mut state = State::new(String::new());
        let _ = state.handle_message(Message::CatalogLoaded(Err(Error::Network(
            "refused".into(),
        ))));

        let _ = state.handle_message(Message::ThumbnailLoaded {
            id: 1,
            result: Ok(sample_handle()),
        });

        assert!(state.thumbnail(1).is_none());
    }
}
