// Activity and fragment inspection
//
// Reads the activity manager dump on the device:
// adb shell dumpsys activity activities

use crate::tools::{
    exec::Shell,
    macros::print_output,
    shell_escape::quote,
    types::LogConfig,
};
use anyhow::{anyhow, Context, Result};

const RESUMED_ACTIVITY: &str =
    "adb shell dumpsys activity activities | grep mResumedActivity | awk '{print $4}'";
// older releases only print ResumedActivity alongside topResumedActivity
const RESUMED_ACTIVITY_FALLBACK: &str =
    "adb shell dumpsys activity activities | grep ResumedActivity | grep -v top | awk '{print $4}'";
const ACTIVITY_HISTORY: &str = "adb shell dumpsys activity activities | grep -e 'Hist #' -e '* Hist'";

/// Foreground `package/activity` as reported by the activity manager
pub async fn current_activity<S: Shell>(shell: &S) -> Result<String> {
    let primary = match shell.run(RESUMED_ACTIVITY).await {
        Ok(output) => output,
        Err(e) if e.is_fatal() => return Err(e.into()),
        Err(_) => String::new(),
    };

    let activity = if primary.trim().is_empty() {
        shell
            .run(RESUMED_ACTIVITY_FALLBACK)
            .await
            .context("Failed to query resumed activity")?
    } else {
        primary
    };

    Ok(activity
        .strip_suffix("}\n")
        .unwrap_or(&activity)
        .to_string())
}

/// Package part of a `package/activity` string
pub fn package_of(activity: &str) -> &str {
    activity
        .split('/')
        .next()
        .unwrap_or_default()
        .trim()
        .trim_end_matches('}')
}

/// Activity history stack, top to bottom
pub async fn activity_history<S: Shell>(shell: &S) -> Result<String> {
    shell
        .run(ACTIVITY_HISTORY)
        .await
        .context("Failed to list activities")
}

fn fragments_command(package: &str) -> String {
    format!(
        r"adb shell dumpsys activity {} | grep -E '^\s*#\d' | grep -v -E 'ReportFragment|plan'",
        package
    )
}

fn filter_command(history: &str, filter: &str) -> String {
    format!("echo {} | grep {}", quote(history), quote(filter))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStrategy {
    CurrentActivity,
    AllActivities,
    AllFragments,
    SpecificActivity,
}

impl LogStrategy {
    /// Declared run order
    pub const ALL: [LogStrategy; 4] = [
        LogStrategy::CurrentActivity,
        LogStrategy::AllActivities,
        LogStrategy::AllFragments,
        LogStrategy::SpecificActivity,
    ];

    pub fn applies(self, config: &LogConfig) -> bool {
        match self {
            LogStrategy::CurrentActivity => config.current,
            LogStrategy::AllActivities => config.all,
            LogStrategy::AllFragments => config.fragment,
            LogStrategy::SpecificActivity => !config.print.is_empty(),
        }
    }

    /// `package` is the foreground package resolved by the dispatcher
    pub async fn run<S: Shell>(self, shell: &S, package: &str, config: &LogConfig) -> Result<()> {
        let output = match self {
            LogStrategy::CurrentActivity => current_activity(shell).await?,
            LogStrategy::AllActivities => activity_history(shell).await?,
            LogStrategy::AllFragments => {
                // `dumpsys activity` with no package argument dumps every process
                if package.is_empty() {
                    return Err(anyhow!("No foreground package to list fragments for"));
                }
                shell
                    .run(&fragments_command(package))
                    .await
                    .with_context(|| format!("No fragments found for {}", package))?
            }
            LogStrategy::SpecificActivity => {
                let history = activity_history(shell).await?;
                shell
                    .run(&filter_command(&history, &config.print))
                    .await
                    .with_context(|| format!("No activity matches '{}'", config.print))?
            }
        };

        print_output(output);
        Ok(())
    }
}
