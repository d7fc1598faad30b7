// SPDX-License-Identifier: MPL-2.0
//! `langswitch` switches a desktop utility's interface language at runtime.
//!
//! The user picks a language or follows the system region. The choice is
//! persisted, every UI string is resolved through a language-aware Fluent
//! resolver, and a second change within one run asks the user to restart so
//! the application relaunches itself.

pub mod app;
pub mod error;
pub mod i18n;
pub mod language;
pub mod restart;
pub mod selector;
