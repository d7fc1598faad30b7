// SPDX-License-Identifier: MPL-2.0
//! Restart prompt and self-relaunch.
//!
//! After the user acknowledges the prompt, the application waits
//! [`RESTART_DELAY_MS`], spawns its own executable with no arguments as an
//! independent process, and then exits. Relaunching is best effort: a
//! missing executable path skips the restart entirely, and a spawn failure
//! is logged before the configured exit policy applies.

use crate::app::config::{RestartConfig, RESTART_DELAY_MS};
use crate::error::RelaunchError;
use crate::i18n::I18n;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

/// Modal notice shown when a language change needs a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestartPrompt {
    pub title_key: &'static str,
    pub message_key: &'static str,
    pub action_key: &'static str,
}

impl RestartPrompt {
    pub const LANGUAGE_CHANGED: RestartPrompt = RestartPrompt {
        title_key: "restart-required-title",
        message_key: "restart-required-message",
        action_key: "restart-action",
    };

    pub fn title(&self, i18n: &I18n) -> String {
        i18n.tr(self.title_key)
    }

    pub fn message(&self, i18n: &I18n) -> String {
        i18n.tr(self.message_key)
    }

    pub fn action(&self, i18n: &I18n) -> String {
        i18n.tr(self.action_key)
    }
}

/// Everything needed to replace the running process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelaunchPlan {
    executable: PathBuf,
    delay: Duration,
    exit_on_spawn_failure: bool,
}

impl RelaunchPlan {
    pub fn new(executable: PathBuf, restart: &RestartConfig) -> Self {
        Self {
            executable,
            delay: Duration::from_millis(RESTART_DELAY_MS),
            exit_on_spawn_failure: restart.exit_on_spawn_failure,
        }
    }

    /// Plans a relaunch of the executable reported by `executable`,
    /// normally `std::env::current_exe`.
    pub fn for_exe(
        executable: impl FnOnce() -> io::Result<PathBuf>,
        restart: &RestartConfig,
    ) -> Result<Self, RelaunchError> {
        let executable =
            executable().map_err(|err| RelaunchError::ExecutableUnavailable(err.to_string()))?;
        Ok(Self::new(executable, restart))
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Starts the replacement process. The child is not waited on.
    pub fn spawn(&self) -> Result<u32, RelaunchError> {
        let child = Command::new(&self.executable).spawn().map_err(|err| {
            RelaunchError::SpawnFailed(format!("{}: {err}", self.executable.display()))
        })?;
        Ok(child.id())
    }
}

/// Result of a relaunch attempt.
#[derive(Debug, Clone)]
pub enum RelaunchOutcome {
    /// Replacement running with the given process id; the caller must exit.
    Spawned(u32),
    /// Spawn failed; `exit` tells the caller whether to exit anyway.
    Failed { error: RelaunchError, exit: bool },
}

impl RelaunchOutcome {
    pub fn should_exit(&self) -> bool {
        match self {
            RelaunchOutcome::Spawned(_) => true,
            RelaunchOutcome::Failed { exit, .. } => *exit,
        }
    }
}

/// Waits the plan's delay, then spawns the replacement process.
pub async fn relaunch(plan: RelaunchPlan) -> RelaunchOutcome {
    tokio::time::sleep(plan.delay()).await;
    run(&plan)
}

fn run(plan: &RelaunchPlan) -> RelaunchOutcome {
    match plan.spawn() {
        Ok(pid) => {
            tracing::info!(pid, executable = %plan.executable().display(), "relaunched application");
            RelaunchOutcome::Spawned(pid)
        }
        Err(error) => {
            tracing::error!(
                %error,
                exit_anyway = plan.exit_on_spawn_failure,
                "failed to relaunch application"
            );
            RelaunchOutcome::Failed {
                error,
                exit: plan.exit_on_spawn_failure,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restart_config(exit_on_spawn_failure: bool) -> RestartConfig {
        RestartConfig {
            exit_on_spawn_failure,
        }
    }

    #[test]
    fn plan_uses_fixed_delay() {
        let plan = RelaunchPlan::new(PathBuf::from("/bin/app"), &RestartConfig::default());
        assert_eq!(plan.delay(), Duration::from_millis(500));
        assert_eq!(plan.executable(), Path::new("/bin/app"));
    }

    #[test]
    fn current_exe_plan_points_at_test_binary() {
        let plan = RelaunchPlan::for_exe(std::env::current_exe, &RestartConfig::default())
            .expect("test binary path should be known");
        assert!(plan.executable().is_absolute());
    }

    #[test]
    fn unknown_executable_yields_no_plan() {
        let result = RelaunchPlan::for_exe(
            || Err(io::Error::new(io::ErrorKind::NotFound, "executable removed")),
            &RestartConfig::default(),
        );
        match result {
            Err(RelaunchError::ExecutableUnavailable(message)) => {
                assert!(message.contains("executable removed"))
            }
            other => panic!("expected ExecutableUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn spawn_failure_exits_by_default() {
        let plan = RelaunchPlan::new(
            PathBuf::from("/nonexistent/langswitch-binary"),
            &restart_config(true),
        );
        let outcome = run(&plan);
        assert!(matches!(
            outcome,
            RelaunchOutcome::Failed {
                error: RelaunchError::SpawnFailed(_),
                exit: true
            }
        ));
        assert!(outcome.should_exit());
    }

    #[test]
    fn spawn_failure_can_keep_process_running() {
        let plan = RelaunchPlan::new(
            PathBuf::from("/nonexistent/langswitch-binary"),
            &restart_config(false),
        );
        assert!(!run(&plan).should_exit());
    }

    #[cfg(unix)]
    #[test]
    fn spawned_outcome_requests_exit() {
        let plan = RelaunchPlan::new(PathBuf::from("true"), &RestartConfig::default());
        let outcome = run(&plan);
        assert!(matches!(outcome, RelaunchOutcome::Spawned(pid) if pid > 0));
        assert!(outcome.should_exit());
    }

    #[tokio::test]
    async fn relaunch_waits_before_spawning() {
        let plan = RelaunchPlan::new(
            PathBuf::from("/nonexistent/langswitch-binary"),
            &restart_config(false),
        );
        let started = std::time::Instant::now();
        let outcome = relaunch(plan).await;
        assert!(started.elapsed() >= Duration::from_millis(500));
        assert!(!outcome.should_exit());
    }

    #[test]
    fn prompt_text_is_localized() {
        let i18n = I18n::new(Some("en"));
        let prompt = RestartPrompt::LANGUAGE_CHANGED;
        assert_eq!(prompt.action(&i18n), "Restart");
        assert!(prompt.message(&i18n).contains("restart"));
        assert_eq!(prompt.title(&i18n), "Restart required");
    }
}
