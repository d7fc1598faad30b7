// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and restart behavior.

// ==========================================================================
// Language Defaults
// ==========================================================================

/// Locale used when neither the persisted tag nor the system locale has a bundle.
pub const DEFAULT_LOCALE: &str = "en";

// ==========================================================================
// Restart Defaults
// ==========================================================================

/// Delay between acknowledging the restart prompt and spawning the new process.
pub const RESTART_DELAY_MS: u64 = 500;

/// Whether the running process exits even when the replacement failed to spawn.
pub const DEFAULT_EXIT_ON_SPAWN_FAILURE: bool = true;
