// SPDX-License-Identifier: MPL-2.0
//! Catalog screen: a fetch-once view over the remote product catalog.
//!
//! `component` owns the state machine and message handling following the
//! Elm-style "state down, messages up" pattern; the sibling modules render
//! the individual display states.

pub mod card;
pub mod component;
pub mod error_state;
pub mod grid;
pub mod placeholder;
pub mod state;

pub use component::{Message, State, ViewEnv};
pub use state::ViewState;
