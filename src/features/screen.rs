// Screenshot and screen recording
//
// Screenshots stream PNG bytes from `screencap` straight into a local file;
// recordings go through scrcpy without opening a window.

use crate::tools::{exec::Shell, macros::print_success};
use anyhow::{Context, Result};
use chrono::Local;

/// Local timestamp used in capture file names
pub fn timestamp() -> String {
    Local::now().format("%Y_%m_%d_%H_%M_%S").to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenStrategy {
    Screenshot,
    Record,
}

impl ScreenStrategy {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "png" => Some(ScreenStrategy::Screenshot),
            "mp4" => Some(ScreenStrategy::Record),
            _ => None,
        }
    }

    pub fn file_name(self, stamp: &str) -> String {
        match self {
            ScreenStrategy::Screenshot => format!("{}_screenshot.png", stamp),
            ScreenStrategy::Record => format!("{}_record.mp4", stamp),
        }
    }

    pub fn command(self, stamp: &str) -> String {
        let file = self.file_name(stamp);
        match self {
            ScreenStrategy::Screenshot => format!("adb exec-out screencap -p > {}", file),
            ScreenStrategy::Record => format!("scrcpy --no-window -Nr {}", file),
        }
    }

    pub async fn run<S: Shell>(self, shell: &S) -> Result<()> {
        let stamp = timestamp();
        shell
            .run(&self.command(&stamp))
            .await
            .with_context(|| format!("Failed to capture {}", self.file_name(&stamp)))?;
        print_success(format!("saved {}", self.file_name(&stamp)));
        Ok(())
    }
}
