// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! A single settings pane with the language picker. When a restart is due,
//! the prompt is stacked on top of the pane as a modal.

use super::Message;
use crate::i18n::I18n;
use crate::language::LanguageOption;
use crate::restart::RestartPrompt;
use iced::widget::{button, center, column, container, opaque, pick_list, row, stack, text};
use iced::{Color, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub selection: LanguageOption,
    pub active_tag: Option<&'a str>,
    pub pending_restart: Option<RestartPrompt>,
    pub notice: Option<&'a str>,
}

/// Wrapper for LanguageOption to implement a localized Display for pick_list.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LanguageChoice {
    option: LanguageOption,
    label: String,
}

impl std::fmt::Display for LanguageChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let settings = view_settings(&ctx);

    match ctx.pending_restart {
        Some(prompt) => stack![settings, view_restart_prompt(ctx.i18n, prompt)].into(),
        None => settings,
    }
}

fn view_settings<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let options: Vec<LanguageChoice> = LanguageOption::ALL
        .iter()
        .map(|&option| LanguageChoice {
            option,
            label: i18n.tr(option.i18n_key()),
        })
        .collect();
    let selected = options
        .iter()
        .find(|choice| choice.option == ctx.selection)
        .cloned();

    let picker = pick_list(options, selected, |choice: LanguageChoice| {
        Message::LanguageSelected(choice.option)
    })
    .width(Length::Fill);

    let mut content = column![
        text(i18n.tr("settings-language-label")).size(20.0),
        picker,
        text(i18n.tr("settings-language-hint")).size(13.0),
    ]
    .spacing(12.0)
    .max_width(420.0);

    if let Some(tag) = ctx.active_tag {
        content = content
            .push(text(i18n.tr_with_args("settings-current-tag", &[("tag", tag)])).size(13.0));
    }

    if let Some(key) = ctx.notice {
        content = content.push(
            container(
                row![
                    text(i18n.tr(key)).size(13.0).width(Length::Fill),
                    button(text("×")).on_press(Message::DismissNotice),
                ]
                .spacing(8.0),
            )
            .padding(8.0)
            .style(container::rounded_box),
        );
    }

    container(content)
        .padding(24.0)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_restart_prompt(i18n: &I18n, prompt: RestartPrompt) -> Element<'_, Message> {
    let dialog = container(
        column![
            text(prompt.title(i18n)).size(18.0),
            text(prompt.message(i18n)),
            button(text(prompt.action(i18n))).on_press(Message::RestartAcknowledged),
        ]
        .spacing(12.0),
    )
    .padding(20.0)
    .max_width(360.0)
    .style(container::rounded_box);

    opaque(center(dialog).style(|_theme: &iced::Theme| container::Style {
        background: Some(
            Color {
                a: 0.6,
                ..Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    }))
}
