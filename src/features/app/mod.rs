pub mod export;
pub mod lifecycle;
pub mod permissions;

use crate::tools::{
    exec::Shell,
    macros::{print_error, print_info, print_success, print_warning},
    types::AppConfig,
};
use anyhow::{Context, Result};
use export::ExportOutcome;

/// One app action bound to the package it targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppStrategy {
    ClearData(String),
    Kill(String),
    Grant(String),
    Revoke(String),
    Start(String),
    Restart(String),
    Detail(String),
    Export(String),
}

impl AppStrategy {
    /// Every app strategy in declared run order, applicable or not
    pub fn candidates(config: &AppConfig) -> Vec<AppStrategy> {
        vec![
            AppStrategy::ClearData(config.clear.clone()),
            AppStrategy::Kill(config.kill.clone()),
            AppStrategy::Grant(config.grant.clone()),
            AppStrategy::Revoke(config.revoke.clone()),
            AppStrategy::Start(config.start.clone()),
            AppStrategy::Restart(config.restart.clone()),
            AppStrategy::Detail(config.detail.clone()),
            AppStrategy::Export(config.export.clone()),
        ]
    }

    pub fn package(&self) -> &str {
        match self {
            AppStrategy::ClearData(package)
            | AppStrategy::Kill(package)
            | AppStrategy::Grant(package)
            | AppStrategy::Revoke(package)
            | AppStrategy::Start(package)
            | AppStrategy::Restart(package)
            | AppStrategy::Detail(package)
            | AppStrategy::Export(package) => package,
        }
    }

    pub fn applies(&self) -> bool {
        !self.package().is_empty()
    }

    pub async fn run<S: Shell>(&self, shell: &S) -> Result<()> {
        let package = self.package();
        match self {
            AppStrategy::ClearData(_) => lifecycle::clear(shell, package).await,
            AppStrategy::Kill(_) => lifecycle::kill(shell, package).await,
            AppStrategy::Grant(_) => {
                let outcome = permissions::grant(shell, package).await?;
                if outcome.all_applied() {
                    print_info(format!("Granted {} permissions to {}", outcome.succeeded(), package));
                } else {
                    print_warning(format!(
                        "some permissions may not have been granted ({} of {} failed)",
                        outcome.failed, outcome.attempted
                    ));
                }
                Ok(())
            }
            AppStrategy::Revoke(_) => {
                let outcome = permissions::revoke(shell, package).await?;
                if outcome.all_applied() {
                    print_info(format!("Revoked {} permissions from {}", outcome.succeeded(), package));
                } else {
                    print_warning(format!(
                        "some permissions may not have been revoked ({} of {} failed)",
                        outcome.failed, outcome.attempted
                    ));
                }
                Ok(())
            }
            AppStrategy::Start(_) => lifecycle::start(shell, package).await,
            AppStrategy::Restart(_) => lifecycle::restart(shell, package).await,
            AppStrategy::Detail(_) => lifecycle::open_detail(shell, package).await,
            AppStrategy::Export(_) => {
                let dir = std::env::current_dir().context("Failed to resolve current directory")?;
                match export::export_apk(shell, package, &dir).await? {
                    ExportOutcome::Saved(path) => {
                        print_success(format!("apk has been saved in {}", path.display()))
                    }
                    ExportOutcome::AlreadyExists(path) => {
                        print_error(format!("{} has exists", path.display()))
                    }
                    ExportOutcome::NotInstalled => {
                        print_info(format!("{} is not exists in phone", package))
                    }
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::exec::testing::FakeShell;

    #[test]
    fn test_candidates_follow_config() {
        let config = AppConfig {
            kill: "com.example.app".to_string(),
            export: "com.example.other".to_string(),
            ..Default::default()
        };
        let applicable: Vec<_> = AppStrategy::candidates(&config)
            .into_iter()
            .filter(AppStrategy::applies)
            .collect();
        assert_eq!(
            applicable,
            vec![
                AppStrategy::Kill("com.example.app".to_string()),
                AppStrategy::Export("com.example.other".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_config_runs_nothing() {
        assert!(!AppStrategy::candidates(&AppConfig::default())
            .iter()
            .any(AppStrategy::applies));
    }

    #[tokio::test]
    async fn test_detail_runs_settings_intent() {
        let shell = FakeShell::new();
        AppStrategy::Detail("com.example.app".to_string())
            .run(&shell)
            .await
            .unwrap();
        assert_eq!(shell.commands(), vec![lifecycle::detail_command("com.example.app")]);
    }

    #[tokio::test]
    async fn test_grant_failures_are_not_an_error() {
        let shell = FakeShell::new()
            .stdout("dumpsys package", "requested permissions:\n  android.permission.CAMERA\n")
            .stderr("pm grant", "java.lang.SecurityException: Permission denial\n");
        AppStrategy::Grant("com.example.app".to_string())
            .run(&shell)
            .await
            .unwrap();
        assert_eq!(shell.count("pm grant"), 1);
    }
}
