// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The single screen is the installation panel; toast notifications are
//! stacked on top of it.

use super::{App, Message};
use crate::ui::install_page::{self, ViewContext};
use crate::ui::notifications::Toast;
use iced::widget::Stack;
use iced::{Element, Length};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let page = install_page::view(ViewContext {
        i18n: &app.i18n,
        release: app.release.as_ref(),
        share_name: &app.share_name,
        install_command: &app.install_command,
        uninstall_command: &app.uninstall_command,
    })
    .map(Message::Page);

    let toasts = Toast::view_overlay(&app.notifications, &app.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(toasts)
        .into()
}
