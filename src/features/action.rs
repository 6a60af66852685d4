// Open a system settings screen
//
//   adb shell am start -a <intent action>

use crate::tools::exec::Shell;
use anyhow::{Context, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    Locale,
    Developer,
    Application,
    Notification,
    Bluetooth,
    Input,
    Display,
}

impl SettingsAction {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "locale" => Some(SettingsAction::Locale),
            "developer" => Some(SettingsAction::Developer),
            "application" => Some(SettingsAction::Application),
            "notification" => Some(SettingsAction::Notification),
            "bluetooth" => Some(SettingsAction::Bluetooth),
            "input" => Some(SettingsAction::Input),
            "display" => Some(SettingsAction::Display),
            _ => None,
        }
    }

    pub fn intent(self) -> &'static str {
        match self {
            SettingsAction::Locale => "android.settings.LOCALE_SETTINGS",
            SettingsAction::Developer => "android.settings.APPLICATION_DEVELOPMENT_SETTINGS",
            SettingsAction::Application => "android.settings.APPLICATION_SETTINGS",
            SettingsAction::Notification => "android.settings.ALL_APPS_NOTIFICATION_SETTINGS",
            SettingsAction::Bluetooth => "android.settings.BLUETOOTH_SETTINGS",
            SettingsAction::Input => "android.settings.INPUT_METHOD_SETTINGS",
            SettingsAction::Display => "android.settings.DISPLAY_SETTINGS",
        }
    }

    pub async fn run<S: Shell>(self, shell: &S) -> Result<()> {
        shell
            .run(&format!("adb shell am start -a {}", self.intent()))
            .await
            .with_context(|| format!("Failed to open {}", self.intent()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::exec::testing::FakeShell;

    #[tokio::test]
    async fn test_developer_settings() {
        let shell = FakeShell::new().stdout("am start", "Starting: Intent { act=android.settings.APPLICATION_DEVELOPMENT_SETTINGS }\n");
        SettingsAction::from_keyword("developer")
            .unwrap()
            .run(&shell)
            .await
            .unwrap();
        assert_eq!(
            shell.commands(),
            vec!["adb shell am start -a android.settings.APPLICATION_DEVELOPMENT_SETTINGS"]
        );
    }

    #[test]
    fn test_unknown_action() {
        assert_eq!(SettingsAction::from_keyword("wifi"), None);
    }
}
