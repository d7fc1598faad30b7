// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Every UI string goes through [`fluent::I18n::tr`], which consults the
//! persisted language tag's bundle first and falls back to the locale
//! negotiated from the operating system.
//!
//! # Features
//!
//! - Fluent `.ftl` bundles embedded in the binary, one per language tag
//! - Language-aware lookup override, installed once per selector lifetime
//! - Fallback to the default locale when translations are missing

pub mod fluent;

pub use fluent::I18n;
