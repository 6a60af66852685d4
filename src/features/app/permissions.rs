// Runtime permission grant/revoke
//
// Permissions come from the package dump:
//   adb shell dumpsys package <package>
// and are applied one by one with `pm grant` / `pm revoke`. Individual
// failures are best effort and never abort the batch.

use crate::tools::{
    exec::{ErrorPolicy, Shell},
    text,
};
use anyhow::{Context, Result};
use tracing::debug;

const REQUESTED_MARKER: &str = "requested permissions:";
const MISSING_GRANT_PERMISSION: &str =
    "Neither user 2000 nor current process has android.permission.GRANT_RUNTIME_PERMISSIONS";

fn is_missing_grant_permission(stderr: &str) -> bool {
    stderr.contains(MISSING_GRANT_PERMISSION)
}

fn dump_command(package: &str) -> String {
    format!("adb shell dumpsys package {}", package)
}

/// Permissions listed under `requested permissions:`.
///
/// The section is the run of `.permission.` lines right after the marker;
/// the first line without `.permission.` ends it.
pub fn requested_permissions(dump: &str) -> Vec<String> {
    let mut permissions = Vec::new();
    let mut in_section = false;

    for line in text::lines(dump) {
        if !line.contains(".permission.") {
            in_section = false;
        }
        if line.contains(REQUESTED_MARKER) {
            in_section = true;
            continue;
        }
        if in_section {
            permissions.push(line.replace(':', "").trim().to_string());
        }
    }

    permissions
}

/// Names of permissions currently reported as `granted=true`.
///
/// The name is whatever precedes the first colon on the line.
pub fn granted_permissions(dump: &str) -> Vec<String> {
    text::lines(dump)
        .filter(|line| line.contains("permission") && line.contains("granted=true"))
        .filter_map(|line| line.split(':').next())
        .map(|name| name.trim().to_string())
        .collect()
}

/// Result of a best-effort grant or revoke batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionOutcome {
    /// Permissions a command was issued for
    pub attempted: usize,
    /// Commands that wrote anything back; `pm grant`/`pm revoke` are silent on success
    pub failed: usize,
    /// At least one grant was refused because the shell user lacks GRANT_RUNTIME_PERMISSIONS
    pub missing_grant_permission: bool,
}

impl PermissionOutcome {
    pub fn succeeded(&self) -> usize {
        self.attempted - self.failed
    }

    pub fn all_applied(&self) -> bool {
        self.failed == 0
    }
}

async fn apply_each<S: Shell>(
    shell: &S,
    verb: &str,
    package: &str,
    permissions: &[String],
    policy: ErrorPolicy,
) -> PermissionOutcome {
    let mut outcome = PermissionOutcome {
        attempted: permissions.len(),
        ..Default::default()
    };

    for permission in permissions {
        let command = format!("adb shell pm {} {} {}", verb, package, permission);
        // a tolerant exec only errs on a spawn failure
        let output = match shell.exec(&command, policy).await {
            Ok(output) => output,
            Err(e) => e.to_string(),
        };
        if output.trim().is_empty() {
            continue;
        }

        debug!(%permission, output = %output.trim_end(), "pm {} failed", verb);
        outcome.failed += 1;
        if is_missing_grant_permission(&output) {
            outcome.missing_grant_permission = true;
        }
    }

    outcome
}

pub async fn grant<S: Shell>(shell: &S, package: &str) -> Result<PermissionOutcome> {
    let dump = shell
        .run(&dump_command(package))
        .await
        .with_context(|| format!("Failed to read package info of {}", package))?;

    let permissions = requested_permissions(&dump);
    let policy = ErrorPolicy::TOLERANT.expecting(is_missing_grant_permission);
    Ok(apply_each(shell, "grant", package, &permissions, policy).await)
}

pub async fn revoke<S: Shell>(shell: &S, package: &str) -> Result<PermissionOutcome> {
    let dump = shell
        .run(&dump_command(package))
        .await
        .with_context(|| format!("Failed to read package info of {}", package))?;

    let permissions = granted_permissions(&dump);
    Ok(apply_each(shell, "revoke", package, &permissions, ErrorPolicy::TOLERANT).await)
}
