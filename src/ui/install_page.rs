// SPDX-License-Identifier: MPL-2.0
//! The installation panel screen.
//!
//! Renders the localized page: title with the fetched release block,
//! the share-name input, the generated install and uninstall commands
//! with their copy buttons, a documentation pointer, the installation
//! tips, and the copyright footer. All state lives in the parent; this
//! module only maps messages to events and draws.

use crate::i18n::fluent::I18n;
use crate::release::ReleaseInfo;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{
        button, container, rule, scrollable, text, text_input, Column, Container, Row, Text,
    },
    Border, Element, Length, Theme,
};

/// Documentation site for the installer script.
const DOCS_URL: &str = "https://doc.admin.im";

/// Contextual data needed to render the installation panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub release: Option<&'a ReleaseInfo>,
    pub share_name: &'a str,
    pub install_command: &'a str,
    pub uninstall_command: &'a str,
}

/// Messages emitted by the installation panel.
#[derive(Debug, Clone)]
pub enum Message {
    ShareNameChanged(String),
    CopyInstall,
    CopyUninstall,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    ShareNameChanged(String),
    CopyInstall,
    CopyUninstall,
}

/// Process a panel message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::ShareNameChanged(name) => Event::ShareNameChanged(name),
        Message::CopyInstall => Event::CopyInstall,
        Message::CopyUninstall => Event::CopyUninstall,
    }
}

/// Render the installation panel.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = Column::new()
        .width(Length::Fill)
        .max_width(sizing::PAGE_MAX_WIDTH)
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(build_header(&ctx))
        .push(build_command_panel(&ctx))
        .push(build_tips_section(&ctx))
        .push(build_footer(&ctx));

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .into()
}

/// Build the page header: title on the left, release block on the right
/// once the metadata fetch has resolved.
fn build_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("page-title"))
        .size(typography::TITLE_LG)
        .width(Length::Fill);

    let mut header = Row::new().align_y(Vertical::Center).push(title);

    if let Some(release) = ctx.release {
        let version_line = Text::new(format!(
            "{} {}",
            ctx.i18n.tr("version-label"),
            release.tag
        ))
        .size(typography::CAPTION);
        let date_line = Text::new(format!(
            "{} {}",
            ctx.i18n.tr("date-label"),
            release.display_date()
        ))
        .size(typography::CAPTION);

        let release_block = Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Right)
            .push(version_line)
            .push(date_line);

        header = header.push(release_block);
    }

    header.into()
}

/// Build the main panel: description, share-name input, both command
/// rows, and the documentation pointer.
fn build_command_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let description = Text::new(ctx.i18n.tr("page-description")).size(typography::BODY);

    let share_label = Text::new(ctx.i18n.tr("share-name-label")).size(typography::BODY);
    let share_input = text_input(&ctx.i18n.tr("share-name-placeholder"), ctx.share_name)
        .on_input(Message::ShareNameChanged)
        .padding(spacing::XS)
        .size(typography::BODY);

    let install_label = Text::new(ctx.i18n.tr("install-label")).size(typography::BODY_LG);
    let install_row = build_command_row(ctx, ctx.install_command, Message::CopyInstall);

    let uninstall_label = Text::new(ctx.i18n.tr("uninstall-label")).size(typography::BODY_LG);
    let uninstall_row = build_command_row(ctx, ctx.uninstall_command, Message::CopyUninstall);

    let help_line = Row::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.i18n.tr("more-help")).size(typography::BODY_SM))
        .push(Text::new(ctx.i18n.tr("docs-link-label")).size(typography::BODY_SM))
        .push(Text::new(format!("({DOCS_URL})")).size(typography::BODY_SM));

    let content = Column::new()
        .spacing(spacing::MD)
        .push(description)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(share_label)
                .push(share_input),
        )
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(install_label)
                .push(install_row),
        )
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(uninstall_label)
                .push(uninstall_row),
        )
        .push(help_line);

    build_panel(content.into())
}

/// Build a command display row: the command in a monospace box plus its
/// copy button.
fn build_command_row<'a>(
    ctx: &ViewContext<'a>,
    command: &str,
    on_copy: Message,
) -> Element<'a, Message> {
    let command_text = Text::new(command.to_string())
        .size(typography::BODY_SM)
        .font(iced::Font::MONOSPACE);

    let command_box = Container::new(command_text)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(command_box_style);

    let copy_button = button(text(ctx.i18n.tr("copy-button")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .on_press(on_copy);

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(command_box)
        .push(copy_button)
        .into()
}

/// Build the tips section listing the installation prerequisites.
fn build_tips_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let header = Text::new(ctx.i18n.tr("tips-title")).size(typography::TITLE_SM);

    let content = Column::new()
        .spacing(spacing::XS)
        .push(header)
        .push(rule::horizontal(1))
        .push(build_tip_item(&ctx.i18n.tr("tip-requirements")))
        .push(build_tip_item(&ctx.i18n.tr("tip-permissions")))
        .push(build_tip_item(&ctx.i18n.tr("tip-shared-nodes")));

    build_panel(content.into())
}

/// Build a single tip line.
fn build_tip_item<'a>(tip: &str) -> Element<'a, Message> {
    Text::new(format!("• {tip}")).size(typography::BODY).into()
}

/// Build the copyright footer.
fn build_footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Container::new(Text::new(ctx.i18n.tr("copyright")).size(typography::CAPTION))
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

/// Wrap section content in the shared panel container style.
fn build_panel(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn command_box_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.extended_palette().background.base.color.into()),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    fn context<'a>(i18n: &'a I18n, release: Option<&'a ReleaseInfo>) -> ViewContext<'a> {
        ViewContext {
            i18n,
            release,
            share_name: "",
            install_command: "bash <(curl -fsSL https://install.example.com) -share yes",
            uninstall_command: "bash <(curl -fsSL https://install.example.com) uninstall",
        }
    }

    #[test]
    fn page_renders_without_release_info() {
        let i18n = I18n::default();
        let _element = view(context(&i18n, None));
    }

    #[test]
    fn page_renders_with_release_info() {
        let i18n = I18n::default();
        let release = ReleaseInfo {
            tag: "v1.4.2".into(),
            date: "2025-06-01".into(),
        };
        let _element = view(context(&i18n, Some(&release)));
    }

    #[test]
    fn share_name_input_emits_event() {
        let event = update(Message::ShareNameChanged("node1".into()));
        assert!(matches!(event, Event::ShareNameChanged(name) if name == "node1"));
    }

    #[test]
    fn copy_messages_map_to_events() {
        assert!(matches!(update(Message::CopyInstall), Event::CopyInstall));
        assert!(matches!(
            update(Message::CopyUninstall),
            Event::CopyUninstall
        ));
    }
}
