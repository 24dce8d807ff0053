// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! - [`catalog`] - The catalog screen (placeholder, error line, card grid)
//! - [`styles`] - Centralized styling (cards, thumbnail slots)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod catalog;
pub mod design_tokens;
pub mod styles;
pub mod theming;
