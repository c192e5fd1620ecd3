// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every piece of page state is a pure function of its inputs: editing
//! the share name recomputes the install command, a resolved metadata
//! fetch fills the release block, and everything else is toast
//! bookkeeping. The clipboard write is the only side effect.

use super::{App, Message};
use crate::command;
use crate::ui::install_page::{self, Event as PageEvent};
use crate::ui::notifications::Notification;
use iced::Task;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Page(message) => handle_page_event(app, install_page::update(message)),
        Message::MetadataLoaded(Ok(release)) => {
            tracing::info!(tag = %release.tag, date = %release.date, "release metadata loaded");
            app.release = Some(release);
            Task::none()
        }
        Message::MetadataLoaded(Err(error)) => {
            // The panel stays usable without version info.
            tracing::warn!(%error, "failed to fetch release metadata");
            Task::none()
        }
        Message::Notification(message) => {
            app.notifications.update(message);
            Task::none()
        }
        Message::Tick(now) => {
            app.notifications.tick(now);
            Task::none()
        }
    }
}

fn handle_page_event(app: &mut App, event: PageEvent) -> Task<Message> {
    match event {
        PageEvent::ShareNameChanged(name) => {
            app.share_name = command::clamp_share_name(&name);
            app.install_command = command::install_command(&app.origin, &app.share_name);
            Task::none()
        }
        PageEvent::CopyInstall => copy_to_clipboard(app, app.install_command.clone()),
        PageEvent::CopyUninstall => copy_to_clipboard(app, app.uninstall_command.clone()),
    }
}

/// The clipboard write is fire-and-forget: a failure (headless session,
/// denied permission) produces no message and no error surface.
fn copy_to_clipboard(app: &mut App, contents: String) -> Task<Message> {
    app.notifications
        .push(Notification::success("notification-copied"));
    iced::clipboard::write(contents)
}
