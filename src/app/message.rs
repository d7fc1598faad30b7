// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::language::LanguageOption;
use crate::restart::RelaunchOutcome;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A language was picked in the selector.
    LanguageSelected(LanguageOption),
    /// The user pressed the restart action of the prompt.
    RestartAcknowledged,
    /// The delayed relaunch attempt completed.
    RelaunchFinished(RelaunchOutcome),
    /// The warning banner was closed.
    DismissNotice,
}

/// Runtime flags passed from `main.rs` into the application.
#[derive(Debug, Default)]
pub struct Flags {
    /// Language option forced from the command line (`--lang`).
    pub lang: Option<LanguageOption>,
}
