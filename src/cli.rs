use crate::tools::types::{AppConfig, Keywords, LogConfig};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "rabbit")]
#[command(about = "Android ADB shortcuts - activities, app lifecycle, device info, screen capture", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Print current activity name
    #[arg(short, long)]
    pub current: bool,

    /// Print all activities, top to bottom
    #[arg(short, long)]
    pub all: bool,

    /// Print fragments of the foreground package
    #[arg(short, long)]
    pub fragment: bool,

    /// Print activities matching a filter
    #[arg(short, long, value_name = "FILTER")]
    pub print: Option<String>,

    /// Clear app data
    #[arg(long, value_name = "PACKAGE")]
    pub clear: Option<String>,

    /// Force stop app
    #[arg(long, value_name = "PACKAGE")]
    pub kill: Option<String>,

    /// Grant all requested permissions
    #[arg(long, value_name = "PACKAGE")]
    pub grant: Option<String>,

    /// Revoke all granted permissions
    #[arg(long, value_name = "PACKAGE")]
    pub revoke: Option<String>,

    /// Start app
    #[arg(long, value_name = "PACKAGE")]
    pub start: Option<String>,

    /// Restart app
    #[arg(long, value_name = "PACKAGE")]
    pub restart: Option<String>,

    /// Open app detail settings page
    #[arg(long, value_name = "PACKAGE")]
    pub detail: Option<String>,

    /// Export apk to the current directory
    #[arg(long, value_name = "PACKAGE")]
    pub export: Option<String>,

    /// Open a system settings page (locale|developer|application|notification|bluetooth|input|display)
    #[arg(long, value_name = "KEYWORD")]
    pub action: Option<String>,

    /// Print device info (device|cpu|memory|battery)
    #[arg(short, long, value_name = "KEYWORD")]
    pub info: Option<String>,

    /// Screenshot or record (png|mp4)
    #[arg(short, long, value_name = "KEYWORD")]
    pub screen: Option<String>,

    /// Screen rotation (enable|disable|0|1|2|3)
    #[arg(short, long, value_name = "KEYWORD")]
    pub rotate: Option<String>,

    /// Target device serial when several are attached
    #[arg(long)]
    pub serial: Option<String>,

    /// Log executed commands to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.is_empty())
}

impl Cli {
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            current: self.current,
            all: self.all,
            fragment: self.fragment,
            print: self.print.clone().unwrap_or_default(),
        }
    }

    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            clear: self.clear.clone().unwrap_or_default(),
            kill: self.kill.clone().unwrap_or_default(),
            grant: self.grant.clone().unwrap_or_default(),
            revoke: self.revoke.clone().unwrap_or_default(),
            start: self.start.clone().unwrap_or_default(),
            restart: self.restart.clone().unwrap_or_default(),
            detail: self.detail.clone().unwrap_or_default(),
            export: self.export.clone().unwrap_or_default(),
        }
    }

    /// Empty keyword values count as not given
    pub fn keywords(&self) -> Keywords {
        Keywords {
            action: non_empty(&self.action),
            info: non_empty(&self.info),
            screen: non_empty(&self.screen),
            rotate: non_empty(&self.rotate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from(["rabbit", "-c", "-a", "-p", "Main", "-i", "device", "-s", "png", "-r", "2"]).unwrap();
        let log = cli.log_config();
        assert!(log.current && log.all && !log.fragment);
        assert_eq!(log.print, "Main");

        let keywords = cli.keywords();
        assert_eq!(keywords.info.as_deref(), Some("device"));
        assert_eq!(keywords.screen.as_deref(), Some("png"));
        assert_eq!(keywords.rotate.as_deref(), Some("2"));
        assert_eq!(keywords.action, None);
    }

    #[test]
    fn test_app_flags() {
        let cli = Cli::try_parse_from(["rabbit", "--grant", "com.example.app", "--export", "com.example.other"]).unwrap();
        let app = cli.app_config();
        assert_eq!(app.grant, "com.example.app");
        assert_eq!(app.export, "com.example.other");
        assert_eq!(app.kill, "");
    }

    #[test]
    fn test_empty_keyword_is_absent() {
        let cli = Cli::try_parse_from(["rabbit", "--action", ""]).unwrap();
        assert_eq!(cli.keywords().action, None);
    }

    #[test]
    fn test_serial_and_verbose() {
        let cli = Cli::try_parse_from(["rabbit", "--serial", "emulator-5554", "-v", "-f"]).unwrap();
        assert_eq!(cli.serial.as_deref(), Some("emulator-5554"));
        assert!(cli.verbose);
        assert!(cli.log_config().fragment);
    }
}
