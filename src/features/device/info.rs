// Device information queries
//
// `device` composes several getprop/dumpsys reads into one summary; the
// other keywords print a single dump as-is.

use crate::features::device::version;
use crate::tools::{
    errors::ExecError,
    exec::{ErrorPolicy, Shell},
    macros::print_output,
    text,
};
use anyhow::{Context, Result};
use std::fmt;
use tracing::debug;

const MODEL: &str = "adb shell getprop ro.product.model";
const RELEASE: &str = "adb shell getprop ro.build.version.release";
const SDK: &str = "adb shell getprop ro.build.version.sdk";
const CODENAME: &str = "adb shell getprop ro.build.version.codename";
const DENSITY: &str = "adb shell wm density";
const DISPLAYS: &str = "adb shell dumpsys window displays";
const ANDROID_ID: &str = "adb shell settings get secure android_id";
const IP_ADDRESS: &str = "adb shell ifconfig | grep Mask";
const IMEI: &str = r#"adb shell "service call iphonesubinfo 1 s16 com.android.shell | cut -c 52-66 | tr -d '.[:space:]'""#;

/// Display density as reported by `wm density`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Density {
    pub physical: String,
    pub override_dpi: Option<String>,
    /// Effective dpi divided by the 160dpi baseline
    pub scale: f64,
}

fn scale_of(dpi: &str) -> f64 {
    dpi.parse::<f64>().map(|d| d / 160.0).unwrap_or_default()
}

/// Parse either `Physical density: N` or a physical line followed by an
/// `Override density: M` line; the override drives the scale.
pub fn parse_density(output: &str) -> Density {
    if !output.contains("Override density") {
        let physical = text::after_colon(output.trim()).unwrap_or_default().to_string();
        let scale = scale_of(&physical);
        return Density {
            physical,
            override_dpi: None,
            scale,
        };
    }

    let lines: Vec<&str> = text::lines(output).collect();
    let mut density = Density::default();
    if lines.len() >= 2 {
        density.physical = text::after_colon(lines[0]).unwrap_or_default().to_string();
        if let Some(value) = text::after_colon(lines[1]) {
            density.scale = scale_of(value);
            density.override_dpi = Some(value.to_string());
        }
    }
    density
}

/// Resolution segment of the first `init=` line, cut before `rng`
pub fn parse_display(dump: &str) -> String {
    text::lines(dump)
        .find(|line| line.contains("init="))
        .map(|line| {
            let line = line.trim();
            match line.find("rng") {
                Some(idx) => line[..idx].to_string(),
                None => line.to_string(),
            }
        })
        .unwrap_or_default()
}

/// Upper-cased codename; release builds report `REL`, which is hidden
pub fn normalize_codename(raw: &str) -> String {
    let codename = raw.trim().to_uppercase();
    if codename == "REL" {
        String::new()
    } else {
        codename
    }
}

/// `None` when the shell is not allowed to run ifconfig
pub fn parse_ip_address(output: &str) -> Option<String> {
    if output.contains("Permission denied") {
        return None;
    }
    Some(output.replace('\n', "").trim().to_string())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceInfo {
    pub model: String,
    pub imei: String,
    pub version: String,
    pub codename: String,
    pub display: String,
    pub density: Density,
    pub android_id: String,
    pub ip_address: Option<String>,
}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let override_line = self
            .density
            .override_dpi
            .as_ref()
            .map(|dpi| format!("Override density: {}dpi", dpi))
            .unwrap_or_default();

        writeln!(f, "model: {}", self.model)?;
        writeln!(f, "imei: {}", self.imei)?;
        writeln!(f, "version: {} {}", self.version, self.codename)?;
        writeln!(f, "display: {}", self.display)?;
        writeln!(f, "Physical density: {}dpi  {}", self.density.physical, override_line)?;
        writeln!(f, "density scale: {:.2}", self.density.scale)?;
        write!(f, "android_id: {}", self.android_id)?;
        if let Some(ip) = &self.ip_address {
            write!(f, "\nipAddress: {}", ip)?;
        }
        Ok(())
    }
}

/// Read one value; recoverable failures become an empty field
async fn query<S: Shell>(shell: &S, command: &str, policy: ErrorPolicy) -> Result<String, ExecError> {
    match shell.exec(command, policy).await {
        Err(e) if !e.is_fatal() => {
            debug!(command, error = %e, "device query failed");
            Ok(String::new())
        }
        result => result,
    }
}

pub async fn collect<S: Shell>(shell: &S) -> Result<DeviceInfo> {
    let strict = ErrorPolicy::STRICT;

    let model = query(shell, MODEL, strict).await?;
    let release = query(shell, RELEASE, strict).await?;
    let density = query(shell, DENSITY, strict).await?;
    let displays = query(shell, DISPLAYS, strict).await?;
    let android_id = query(shell, ANDROID_ID, strict).await?;
    let sdk = query(shell, SDK, strict).await?;
    let ip_address = query(shell, IP_ADDRESS, ErrorPolicy::TOLERANT).await?;
    let imei = query(shell, IMEI, strict).await?;
    let codename = query(shell, CODENAME, strict).await?;

    Ok(DeviceInfo {
        model: model.trim().to_string(),
        imei: imei.trim().to_string(),
        version: version::describe(&sdk, &release),
        codename: normalize_codename(&codename),
        display: parse_display(&displays),
        density: parse_density(density.trim()),
        android_id: android_id.trim().to_string(),
        ip_address: parse_ip_address(&ip_address),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoStrategy {
    Device,
    Cpu,
    Memory,
    Battery,
}

impl InfoStrategy {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "device" => Some(InfoStrategy::Device),
            "cpu" => Some(InfoStrategy::Cpu),
            "memory" => Some(InfoStrategy::Memory),
            "battery" => Some(InfoStrategy::Battery),
            _ => None,
        }
    }

    fn dump_command(self) -> Option<&'static str> {
        match self {
            InfoStrategy::Device => None,
            InfoStrategy::Cpu => Some("adb shell cat /proc/cpuinfo"),
            InfoStrategy::Memory => Some("adb shell cat /proc/meminfo"),
            InfoStrategy::Battery => Some("adb shell dumpsys battery"),
        }
    }

    pub async fn run<S: Shell>(self, shell: &S) -> Result<()> {
        let output = match self.dump_command() {
            Some(command) => shell
                .run(command)
                .await
                .with_context(|| format!("Failed to read {:?} info", self))?,
            None => collect(shell).await?.to_string(),
        };
        print_output(output);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::exec::testing::FakeShell;

    #[test]
    fn test_physical_density() {
        let density = parse_density("Physical density: 420");
        assert_eq!(density.physical, "420");
        assert_eq!(density.override_dpi, None);
        assert_eq!(density.scale, 2.625);
    }

    #[test]
    fn test_override_density() {
        let density = parse_density("Physical density: 420\nOverride density: 480");
        assert_eq!(density.physical, "420");
        assert_eq!(density.override_dpi.as_deref(), Some("480"));
        assert_eq!(density.scale, 3.0);
    }

    #[test]
    fn test_unparseable_density() {
        assert_eq!(parse_density("").scale, 0.0);
        assert_eq!(parse_density("Physical density: ?").scale, 0.0);
    }

    #[test]
    fn test_display_cut_before_rng() {
        let dump = "Display: mDisplayId=0\n  init=1080x2400 420dpi base=1080x2400 420dpi cur=1080x2400 app=1080x2274 rng=1080x1017-2274x2211\n  init=720x1280 320dpi\n";
        assert_eq!(
            parse_display(dump),
            "init=1080x2400 420dpi base=1080x2400 420dpi cur=1080x2400 app=1080x2274 "
        );
        assert_eq!(parse_display("nothing here"), "");
    }

    #[test]
    fn test_codename_rel_hidden() {
        assert_eq!(normalize_codename("REL\n"), "");
        assert_eq!(normalize_codename("rel"), "");
        assert_eq!(normalize_codename("Rel"), "");
        assert_eq!(normalize_codename("UpsideDownCake"), "UPSIDEDOWNCAKE");
    }

    #[test]
    fn test_ip_permission_denied_suppressed() {
        assert_eq!(parse_ip_address("ifconfig: ioctl 8927: Permission denied\n"), None);
        assert_eq!(
            parse_ip_address("  inet addr:192.168.1.20  Bcast:192.168.1.255  Mask:255.255.255.0\n").as_deref(),
            Some("inet addr:192.168.1.20  Bcast:192.168.1.255  Mask:255.255.255.0")
        );
    }

    #[test]
    fn test_info_keywords() {
        assert_eq!(InfoStrategy::from_keyword("battery"), Some(InfoStrategy::Battery));
        assert_eq!(InfoStrategy::from_keyword("gpu"), None);
    }

    fn device() -> FakeShell {
        FakeShell::new()
            .stdout("ro.product.model", "Pixel 7\n")
            .stdout("ro.build.version.release", "14\n")
            .stdout("ro.build.version.sdk", "34\n")
            .stdout("ro.build.version.codename", "REL\n")
            .stdout("wm density", "Physical density: 420\nOverride density: 480\n")
            .stdout("dumpsys window displays", "  init=1080x2400 420dpi cur=1080x2400 rng=1080x1017\n")
            .stdout("android_id", "3f2a9c0d11e4b5a6\n")
            .stderr("ifconfig", "ifconfig: Permission denied\n")
            .stdout("iphonesubinfo", "356938035643809\n")
    }

    #[tokio::test]
    async fn test_collect_device_info() {
        let info = collect(&device()).await.unwrap();

        assert_eq!(info.model, "Pixel 7");
        assert_eq!(info.version, "Android 14.0, U, API 34");
        assert_eq!(info.codename, "");
        assert_eq!(info.display, "init=1080x2400 420dpi cur=1080x2400 ");
        assert_eq!(info.android_id, "3f2a9c0d11e4b5a6");
        assert_eq!(info.imei, "356938035643809");
        assert_eq!(info.ip_address, None);

        let rendered = info.to_string();
        assert!(rendered.contains("Physical density: 420dpi  Override density: 480dpi"));
        assert!(rendered.contains("density scale: 3.00"));
        assert!(!rendered.contains("ipAddress"));
    }

    #[tokio::test]
    async fn test_collect_unknown_sdk_uses_release() {
        let shell = FakeShell::new()
            .stdout("ro.build.version.sdk", "99\n")
            .stdout("ro.build.version.release", "17\n")
            .stdout("ro.build.version.codename", "Baklava\n");
        let info = collect(&shell).await.unwrap();

        assert_eq!(info.version, "Android 17");
        assert!(info.to_string().contains("version: Android 17 BAKLAVA"));
    }

    #[tokio::test]
    async fn test_collect_stops_on_fatal() {
        let shell = FakeShell::new().stderr("ro.product.model", "error: no devices/emulators found\n");
        let err = collect(&shell).await.unwrap_err();
        assert!(crate::tools::errors::is_fatal(&err));
        assert_eq!(shell.commands().len(), 1);
    }

    #[tokio::test]
    async fn test_dump_keywords_print_raw() {
        let shell = FakeShell::new().stdout("dumpsys battery", "Current Battery Service state:\n  level: 87\n");
        InfoStrategy::Battery.run(&shell).await.unwrap();
        assert_eq!(shell.commands(), vec!["adb shell dumpsys battery"]);
    }
}
