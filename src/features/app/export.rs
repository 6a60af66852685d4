// Export an installed APK to the host
//
//   adb shell pm list packages <package>
//   adb shell pm path <package>
//   adb pull <apk path> <dir>/<package>.apk
//
// An existing local file is never overwritten.

use crate::tools::{exec::Shell, macros::print_output, shell_escape::quote, text};
use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Pulled to this path
    Saved(PathBuf),
    /// A file was already at this path, nothing was pulled
    AlreadyExists(PathBuf),
    /// The package is not installed on the device
    NotInstalled,
}

pub fn destination(dir: &Path, package: &str) -> PathBuf {
    dir.join(format!("{}.apk", package))
}

/// Device path of the base APK from `pm path` output
fn apk_path(output: &str) -> Option<&str> {
    text::lines(output)
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| line.strip_prefix("package:").unwrap_or(line))
        .filter(|path| !path.is_empty())
}

pub async fn export_apk<S: Shell>(shell: &S, package: &str, dir: &Path) -> Result<ExportOutcome> {
    let listing = shell
        .run(&format!("adb shell pm list packages {}", package))
        .await
        .context("Failed to list packages")?;

    if !text::lines(&listing).any(|line| line.contains(package)) {
        return Ok(ExportOutcome::NotInstalled);
    }

    let output = shell
        .run(&format!("adb shell pm path {}", package))
        .await
        .with_context(|| format!("Failed to resolve apk path of {}", package))?;
    let remote = apk_path(&output).ok_or_else(|| anyhow!("cannot find apk path"))?;

    let target = destination(dir, package);
    if target.exists() {
        return Ok(ExportOutcome::AlreadyExists(target));
    }

    let pulled = shell
        .run(&format!("adb pull {} {}", remote, quote(&target.to_string_lossy())))
        .await
        .with_context(|| format!("Failed to pull {}", remote))?;
    print_output(pulled);

    Ok(ExportOutcome::Saved(target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::exec::testing::FakeShell;

    fn device() -> FakeShell {
        FakeShell::new()
            .stdout("pm list packages", "package:com.example.app\npackage:com.example.app.debug\n")
            .stdout("pm path", "package:/data/app/~~x1/com.example.app-1/base.apk\n")
            .stdout("adb pull", "/data/app/~~x1/com.example.app-1/base.apk: 1 file pulled. 31.2 MB/s\n")
    }

    #[test]
    fn test_apk_path_takes_first_line() {
        let output = "package:/data/app/a/base.apk\npackage:/data/app/a/split_config.arm64_v8a.apk\n";
        assert_eq!(apk_path(output), Some("/data/app/a/base.apk"));
        assert_eq!(apk_path("\n"), None);
        assert_eq!(apk_path("package:\n"), None);
    }

    #[tokio::test]
    async fn test_export_pulls_into_dir() {
        let dir = tempfile::tempdir().unwrap();
        let shell = device();

        let outcome = export_apk(&shell, "com.example.app", dir.path()).await.unwrap();

        let expected = dir.path().join("com.example.app.apk");
        assert_eq!(outcome, ExportOutcome::Saved(expected.clone()));
        assert!(shell.ran(&format!(
            "adb pull /data/app/~~x1/com.example.app-1/base.apk '{}'",
            expected.display()
        )));
    }

    #[tokio::test]
    async fn test_export_twice_keeps_first_file() {
        let dir = tempfile::tempdir().unwrap();
        let shell = device();

        let first = export_apk(&shell, "com.example.app", dir.path()).await.unwrap();
        let ExportOutcome::Saved(path) = first else {
            panic!("expected first export to pull");
        };
        // stand in for the file adb would have written
        std::fs::write(&path, b"first").unwrap();

        let second = export_apk(&shell, "com.example.app", dir.path()).await.unwrap();

        assert_eq!(second, ExportOutcome::AlreadyExists(path.clone()));
        assert_eq!(shell.count("adb pull"), 1);
        assert_eq!(std::fs::read(&path).unwrap(), b"first");
    }

    #[tokio::test]
    async fn test_export_missing_package() {
        let dir = tempfile::tempdir().unwrap();
        let shell = FakeShell::new().stdout("pm list packages", "package:com.other.app\n");

        let outcome = export_apk(&shell, "com.example.app", dir.path()).await.unwrap();

        assert_eq!(outcome, ExportOutcome::NotInstalled);
        assert!(!shell.ran("pm path"));
    }

    #[tokio::test]
    async fn test_export_empty_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let shell = FakeShell::new()
            .stdout("pm list packages", "package:com.example.app\n")
            .stdout("pm path", "\n");

        let err = export_apk(&shell, "com.example.app", dir.path()).await.unwrap_err();
        assert_eq!(err.to_string(), "cannot find apk path");
    }
}
