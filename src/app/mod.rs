// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct owns the string resolver and the language selector, and
//! translates messages into side effects: settings persistence, the restart
//! prompt and the delayed relaunch.

pub mod config;
mod message;
pub mod paths;
mod view;

pub use message::{Flags, Message};

use crate::i18n::I18n;
use crate::language::{self, LanguageOption};
use crate::restart::{self, RelaunchOutcome, RelaunchPlan, RestartPrompt};
use crate::selector::LanguageSelector;
use config::RestartConfig;
use iced::{window, Element, Task};
use std::fmt;
use std::io;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 320;

/// Source of the system locale identifier, read on every "follow system" apply.
type LocaleSource = fn() -> Option<String>;

/// Source of the path relaunched after the restart prompt.
type ExeSource = fn() -> io::Result<PathBuf>;

pub struct App {
    pub i18n: I18n,
    selector: LanguageSelector,
    selection: LanguageOption,
    active_tag: Option<&'static str>,
    restart_config: RestartConfig,
    pending_restart: Option<RestartPrompt>,
    /// i18n key of a warning shown above the picker.
    notice: Option<String>,
    system_locale: LocaleSource,
    current_exe: ExeSource,
    /// Set while the delayed relaunch is pending; further selections are ignored.
    relaunching: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("selection", &self.selection)
            .field("active_tag", &self.active_tag)
            .field("pending_restart", &self.pending_restart)
            .field("relaunching", &self.relaunching)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an Fn boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        (
            App::new(flags, LanguageSelector::new(), language::system_locale),
            Task::none(),
        )
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .run()
}

impl App {
    /// Loads the settings and silently applies the stored (or forced) language.
    fn new(flags: Flags, selector: LanguageSelector, system_locale: LocaleSource) -> Self {
        let (cfg, config_warning) = selector.load_config();
        let selection = flags
            .lang
            .or(cfg.general.language_option)
            .unwrap_or_default();

        let locale = system_locale();
        let mut app = App {
            i18n: I18n::new(locale.as_deref()),
            selector,
            selection,
            active_tag: None,
            restart_config: cfg.restart,
            pending_restart: None,
            notice: config_warning,
            system_locale,
            current_exe: std::env::current_exe,
            relaunching: false,
        };
        app.apply_selection(selection);
        app
    }

    fn apply_selection(&mut self, selection: LanguageOption) {
        let locale = match selection {
            LanguageOption::FollowSystem => (self.system_locale)(),
            _ => None,
        };
        let applied =
            self.selector
                .apply_with_locale(selection, locale.as_deref(), &mut self.i18n);
        self.selection = selection;
        self.active_tag = Some(applied.tag);
        self.pending_restart = applied.restart;
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::LanguageSelected(option) => {
                if self.relaunching {
                    tracing::debug!(?option, "ignoring language change while relaunching");
                } else if option != self.selection {
                    self.apply_selection(option);
                }
                Task::none()
            }
            Message::RestartAcknowledged => {
                self.pending_restart = None;
                match RelaunchPlan::for_exe(self.current_exe, &self.restart_config) {
                    Ok(plan) => {
                        self.relaunching = true;
                        Task::perform(restart::relaunch(plan), Message::RelaunchFinished)
                    }
                    Err(error) => {
                        tracing::warn!(%error, "skipping restart");
                        Task::none()
                    }
                }
            }
            Message::RelaunchFinished(outcome) => self.handle_relaunch_finished(outcome),
            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }
        }
    }

    fn handle_relaunch_finished(&mut self, outcome: RelaunchOutcome) -> Task<Message> {
        if outcome.should_exit() {
            return iced::exit();
        }
        self.relaunching = false;
        self.notice = Some("error-relaunch-spawn".to_string());
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            selection: self.selection,
            active_tag: self.active_tag,
            pending_restart: self.pending_restart,
            notice: self.notice.as_deref(),
        })
    }
}
