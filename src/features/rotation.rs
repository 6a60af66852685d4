// Screen rotation through system settings
//
//   accelerometer_rotation 1|0  toggles auto-rotate
//   user_rotation 0..3          fixes the orientation

use crate::tools::exec::Shell;
use anyhow::{Context, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationStrategy {
    Enable,
    Disable,
    Portrait,
    Landscape,
    PortraitReverse,
    LandscapeReverse,
}

impl RotationStrategy {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "enable" => Some(RotationStrategy::Enable),
            "disable" => Some(RotationStrategy::Disable),
            "0" => Some(RotationStrategy::Portrait),
            "1" => Some(RotationStrategy::Landscape),
            "2" => Some(RotationStrategy::PortraitReverse),
            "3" => Some(RotationStrategy::LandscapeReverse),
            _ => None,
        }
    }

    pub fn command(self) -> &'static str {
        match self {
            RotationStrategy::Enable => "adb shell settings put system accelerometer_rotation 1",
            RotationStrategy::Disable => "adb shell settings put system accelerometer_rotation 0",
            RotationStrategy::Portrait => "adb shell settings put system user_rotation 0",
            RotationStrategy::Landscape => "adb shell settings put system user_rotation 1",
            RotationStrategy::PortraitReverse => "adb shell settings put system user_rotation 2",
            RotationStrategy::LandscapeReverse => "adb shell settings put system user_rotation 3",
        }
    }

    pub async fn run<S: Shell>(self, shell: &S) -> Result<()> {
        shell
            .run(self.command())
            .await
            .with_context(|| format!("Failed to apply rotation {:?}", self))?;
        Ok(())
    }
}
