// SPDX-License-Identifier: MPL-2.0
//! `iced_vitrine` is a product catalog viewer built with the Iced GUI
//! framework.
//!
//! On startup it fetches a public product catalog once and renders it as a
//! responsive card grid, demonstrating internationalization with Fluent,
//! user preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_vitrine/0.1.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
