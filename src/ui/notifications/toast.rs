// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with severity-colored accents in the bottom-right corner.

use super::manager::{Manager, Message};
use super::notification::{Notification, Severity};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, radius, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Border, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let accent_color = notification.severity().color();

        let glyph = Text::new(Self::severity_glyph(notification.severity()))
            .size(typography::BODY)
            .color(accent_color);

        let message_widget = Text::new(i18n.tr(notification.message_key()))
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let notification_id = notification.id();
        let dismiss_button = button(text("✕").size(typography::CAPTION))
            .on_press(Message::Dismiss(notification_id))
            .padding(spacing::XXS)
            .style(|theme: &Theme, _status| button::Style {
                background: None,
                text_color: theme.palette().text,
                ..button::Style::default()
            });

        // Layout: [glyph] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders the toast overlay with all visible notifications.
    ///
    /// Positions toasts in the bottom-right corner, stacked vertically.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, i18n))
            .collect();

        if toasts.is_empty() {
            // An empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into()
        }
    }

    fn severity_glyph(severity: Severity) -> &'static str {
        match severity {
            Severity::Success => "✓",
            Severity::Warning => "!",
        }
    }
}

fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    container::Style {
        background: Some(theme.extended_palette().background.base.color.into()),
        border: Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_renders_with_and_without_toasts() {
        let i18n = I18n::default();
        let mut manager = Manager::new();
        let _empty = Toast::view_overlay(&manager, &i18n);
        drop(_empty);

        manager.push(Notification::success("notification-copied"));
        let _with_toast = Toast::view_overlay(&manager, &i18n);
    }

    #[test]
    fn glyphs_differ_per_severity() {
        assert_ne!(
            Toast::severity_glyph(Severity::Success),
            Toast::severity_glyph(Severity::Warning)
        );
    }
}
