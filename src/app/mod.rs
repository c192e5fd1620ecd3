// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the installation panel.
//!
//! The `App` struct wires together localization, the resolved
//! distribution origin, the generated commands, the fetched release
//! metadata, and toast notifications. Every displayed value is a pure
//! function of those inputs; the update loop recomputes the affected
//! values whenever an input changes. The only suspending operation is
//! the one-shot metadata fetch kicked off at startup.

mod message;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::command;
use crate::config;
use crate::i18n::fluent::I18n;
use crate::origin::Origin;
use crate::release::{self, ReleaseInfo};
use crate::ui::notifications;
use iced::{time, window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

/// Distribution server used when neither the CLI nor the config file
/// names one.
pub const DEFAULT_SERVER_URL: &str = "https://install.admin.im";

pub const WINDOW_DEFAULT_WIDTH: u32 = 760;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = 560;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Interval of the toast auto-dismiss timer.
const TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Root Iced application state bridging the installation panel,
/// localization, and the release metadata fetch.
pub struct App {
    pub i18n: I18n,
    origin: Origin,
    share_name: String,
    install_command: String,
    uninstall_command: String,
    release: Option<ReleaseInfo>,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("origin", &self.origin)
            .field("share_name", &self.share_name)
            .field("has_release", &self.release.is_some())
            .finish()
    }
}

/// Builds the window settings.
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
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let origin = Origin::resolve(DEFAULT_SERVER_URL);
        Self {
            i18n: I18n::default(),
            share_name: String::new(),
            install_command: command::install_command(&origin, ""),
            uninstall_command: command::uninstall_command(&origin),
            origin,
            release: None,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the one-shot release
    /// metadata fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_error) = match config::load() {
            Ok(config) => (config, false),
            Err(error) => {
                tracing::warn!(%error, "failed to load settings, using defaults");
                (config::Config::default(), true)
            }
        };

        let i18n = I18n::new(flags.lang, &config);

        let server_url = flags
            .server
            .or(config.server_url)
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        let origin = Origin::resolve(&server_url);

        let mut app = App {
            i18n,
            share_name: String::new(),
            install_command: command::install_command(&origin, ""),
            uninstall_command: command::uninstall_command(&origin),
            origin: origin.clone(),
            release: None,
            notifications: notifications::Manager::new(),
        };

        if config_error {
            app.notifications
                .push(notifications::Notification::warning(
                    "notification-config-error",
                ));
        }

        let task = Task::perform(release::fetch(origin), Message::MetadataLoaded);
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("page-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    /// The tick subscription only runs while a toast is on screen.
    fn subscription(&self) -> Subscription<Message> {
        if self.notifications.has_visible() {
            time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_app_composes_commands_for_default_server() {
        let app = App::default();
        assert_eq!(
            app.install_command,
            format!("bash <(curl -fsSL {DEFAULT_SERVER_URL}) -share yes")
        );
        assert_eq!(
            app.uninstall_command,
            format!("bash <(curl -fsSL {DEFAULT_SERVER_URL}) uninstall")
        );
    }

    #[test]
    fn window_settings_enforce_minimum_size() {
        let settings = window_settings();
        let min = settings.min_size.expect("min size is set");
        assert!(min.width <= settings.size.width);
        assert!(min.height <= settings.size.height);
    }
}
