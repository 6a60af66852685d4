// Flag dispatch
//
// Log and app strategies run every applicable entry in declared order.
// Keyword flags (action/info/screen/rotate) pick exactly one behavior or
// report the unknown keyword. A recoverable error is printed and the next
// strategy still runs; a fatal executor error ends the run.

use crate::features::{
    action::SettingsAction,
    activity::{self, LogStrategy},
    app::AppStrategy,
    device::info::InfoStrategy,
    rotation::RotationStrategy,
    screen::ScreenStrategy,
};
use crate::tools::{
    errors,
    exec::Shell,
    macros::print_error,
    types::{AppConfig, Keywords, LogConfig},
};
use anyhow::{Context, Result};
use tracing::{debug, info};

pub struct Dispatcher<S> {
    shell: S,
    log: LogConfig,
    app: AppConfig,
    keywords: Keywords,
}

/// Print a recoverable error; hand a fatal one back to the caller
fn report(result: Result<()>) -> Result<()> {
    match result {
        Err(err) if !errors::is_fatal(&err) => {
            print_error(format!("{:#}", err));
            Ok(())
        }
        other => other,
    }
}

fn unknown(kind: &str, value: &str) {
    print_error(format!("Unknown {} type: {}", kind, value));
}

impl<S: Shell> Dispatcher<S> {
    pub fn new(shell: S, log: LogConfig, app: AppConfig, keywords: Keywords) -> Self {
        Self {
            shell,
            log,
            app,
            keywords,
        }
    }

    #[cfg(test)]
    pub(crate) fn shell(&self) -> &S {
        &self.shell
    }

    pub async fn run(&self) -> Result<()> {
        if self.log.any() {
            let activity = activity::current_activity(&self.shell)
                .await
                .context("Error getting current activity")?;
            let package = activity::package_of(&activity);
            debug!(package, "resolved foreground package");
            self.run_log(package).await?;
        }

        self.run_app().await?;

        if let Some(keyword) = self.keywords.action.as_deref() {
            match SettingsAction::from_keyword(keyword) {
                Some(action) => action
                    .run(&self.shell)
                    .await
                    .context("Error executing action")?,
                None => unknown("action", keyword),
            }
        }

        if let Some(keyword) = self.keywords.info.as_deref() {
            match InfoStrategy::from_keyword(keyword) {
                Some(strategy) => report(strategy.run(&self.shell).await)?,
                None => unknown("info", keyword),
            }
        }

        if let Some(keyword) = self.keywords.screen.as_deref() {
            match ScreenStrategy::from_keyword(keyword) {
                Some(strategy) => report(strategy.run(&self.shell).await)?,
                None => unknown("screen", keyword),
            }
        }

        if let Some(keyword) = self.keywords.rotate.as_deref() {
            match RotationStrategy::from_keyword(keyword) {
                Some(strategy) => report(strategy.run(&self.shell).await)?,
                None => unknown("rotation", keyword),
            }
        }

        Ok(())
    }

    async fn run_log(&self, package: &str) -> Result<()> {
        for strategy in LogStrategy::ALL {
            if strategy.applies(&self.log) {
                info!(?strategy, "running log strategy");
                report(strategy.run(&self.shell, package, &self.log).await)?;
            }
        }
        Ok(())
    }

    async fn run_app(&self) -> Result<()> {
        for strategy in AppStrategy::candidates(&self.app) {
            if strategy.applies() {
                info!(?strategy, "running app strategy");
                report(strategy.run(&self.shell).await)?;
            }
        }
        Ok(())
    }
}
