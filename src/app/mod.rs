// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the catalog view.
//!
//! The `App` struct wires together the catalog component, localization, and
//! the configured theme, and launches the one-shot catalog fetch on startup.
//! Policy decisions (endpoint resolution, window sizing, theme selection)
//! stay close to the main update loop so user-facing behavior is easy to
//! audit.

mod message;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::catalog::component;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::ThemeMode;
use iced::widget::{Column, Text};
use iced::{window, Element, Length, Task, Theme};
use std::fmt;

/// Root Iced application state bridging the catalog view, localization, and
/// persisted preferences.
pub struct App {
    i18n: I18n,
    theme_mode: ThemeMode,
    catalog: component::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("catalog", &self.catalog.view_state())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 400;
pub const MIN_WINDOW_HEIGHT: u32 = 300;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::System,
            catalog: component::State::new(config::DEFAULT_ENDPOINT.to_string()),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the one-shot catalog
    /// fetch based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let endpoint = config::resolve_endpoint(flags.endpoint, &config);

        let mut app = App {
            i18n,
            theme_mode: config.theme_mode.unwrap_or_default(),
            catalog: component::State::new(endpoint),
        };

        let task = app.catalog.start_load().map(Message::Catalog);
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Catalog(catalog_message) => self
                .catalog
                .handle_message(catalog_message)
                .map(Message::Catalog),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let heading = Text::new(self.i18n.tr("catalog-heading")).size(typography::TITLE_LG);

        let catalog = self
            .catalog
            .view(component::ViewEnv { i18n: &self.i18n })
            .map(Message::Catalog);

        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(heading)
            .push(catalog)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
