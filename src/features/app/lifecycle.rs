// App lifecycle commands
//
// Each one is a single canned command against the package manager or the
// activity manager:
//   adb shell pm clear <package>
//   adb shell am force-stop <package>
//   adb shell monkey -p <package> -c android.intent.category.LAUNCHER 1

use crate::tools::exec::Shell;
use anyhow::{Context, Result};

pub fn clear_command(package: &str) -> String {
    format!("adb shell pm clear {}", package)
}

pub fn kill_command(package: &str) -> String {
    format!("adb shell am force-stop {}", package)
}

pub fn start_command(package: &str) -> String {
    format!(
        "adb shell monkey -p {} -c android.intent.category.LAUNCHER 1",
        package
    )
}

pub fn detail_command(package: &str) -> String {
    format!(
        "adb shell am start -a android.settings.APPLICATION_DETAILS_SETTINGS package:{}",
        package
    )
}

pub async fn clear<S: Shell>(shell: &S, package: &str) -> Result<()> {
    shell
        .run(&clear_command(package))
        .await
        .with_context(|| format!("Failed to clear data of {}", package))?;
    Ok(())
}

pub async fn kill<S: Shell>(shell: &S, package: &str) -> Result<()> {
    shell
        .run(&kill_command(package))
        .await
        .with_context(|| format!("Failed to stop {}", package))?;
    Ok(())
}

pub async fn start<S: Shell>(shell: &S, package: &str) -> Result<()> {
    shell
        .run(&start_command(package))
        .await
        .with_context(|| format!("Failed to start {}", package))?;
    Ok(())
}

/// Kill then start; a failed kill skips the start
pub async fn restart<S: Shell>(shell: &S, package: &str) -> Result<()> {
    kill(shell, package).await?;
    start(shell, package).await
}

pub async fn open_detail<S: Shell>(shell: &S, package: &str) -> Result<()> {
    shell
        .run(&detail_command(package))
        .await
        .with_context(|| format!("Failed to open app details of {}", package))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::exec::testing::FakeShell;

    #[tokio::test]
    async fn test_restart_kills_then_starts() {
        let shell = FakeShell::new().stdout("monkey", "Events injected: 1\n");
        restart(&shell, "com.example.app").await.unwrap();
        assert_eq!(
            shell.commands(),
            vec![kill_command("com.example.app"), start_command("com.example.app")]
        );
    }

    #[tokio::test]
    async fn test_restart_fails_fast() {
        let shell = FakeShell::new().fail("force-stop");
        let err = restart(&shell, "com.example.app").await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to stop com.example.app");
        assert!(!shell.ran("monkey"));
    }

    #[tokio::test]
    async fn test_clear_reports_failure() {
        let shell = FakeShell::new().fail("pm clear");
        assert!(clear(&shell, "com.example.app").await.is_err());
    }

    #[test]
    fn test_detail_command() {
        assert_eq!(
            detail_command("com.example.app"),
            "adb shell am start -a android.settings.APPLICATION_DETAILS_SETTINGS package:com.example.app"
        );
    }
}
