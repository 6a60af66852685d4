/// Which activity/fragment listings were requested
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub current: bool,
    pub all: bool,
    pub fragment: bool,
    /// Activity filter; empty means not requested
    pub print: String,
}

impl LogConfig {
    pub fn any(&self) -> bool {
        self.current || self.all || self.fragment || !self.print.is_empty()
    }
}

/// One package name per app action; empty means not requested
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub clear: String,
    pub kill: String,
    pub grant: String,
    pub revoke: String,
    pub start: String,
    pub restart: String,
    pub detail: String,
    pub export: String,
}

/// Single-choice keyword flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keywords {
    pub action: Option<String>,
    pub info: Option<String>,
    pub screen: Option<String>,
    pub rotate: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_config_any() {
        assert!(!LogConfig::default().any());
        assert!(LogConfig { fragment: true, ..Default::default() }.any());
        assert!(LogConfig { print: "Main".into(), ..Default::default() }.any());
    }
}
