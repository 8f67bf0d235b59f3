// crates/lineage-cli/src/config.rs
//
// Local daemon identity and logging settings for the lineage CLI.
// Loaded from a TOML file or populated with defaults.

use serde::Deserialize;
use std::fs;
use std::io;

use lineage_core::RelayIdentity;

/// Runtime configuration for the CLI.
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Hostname this daemon stamps into provenance records.
    #[serde(default = "default_hostname")]
    pub hostname: String,

    /// Request-channel port.
    #[serde(default = "default_req")]
    pub req: i64,

    /// Publish-channel port. Omit when the daemon does not publish.
    #[serde(rename = "pub", default)]
    pub pub_port: Option<i64>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_hostname() -> String {
    "localhost".to_string()
}

fn default_req() -> i64 {
    10111
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            hostname: default_hostname(),
            req: default_req(),
            pub_port: None,
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    /// Load configuration, treating a missing file as "use defaults".
    ///
    /// Returns `Ok(None)` only when the file does not exist. A file that
    /// exists but cannot be read or parsed is an error.
    pub fn load_optional(path: &str) -> Result<Option<Self>, Box<dyn std::error::Error>> {
        let contents = match fs::read_to_string(expand_tilde(path)) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(Self::parse(&contents)?))
    }

    pub fn parse(contents: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: CliConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// The configured identity of the local daemon.
    pub fn identity(&self) -> RelayIdentity {
        RelayIdentity::new(self.hostname.clone(), self.req, self.pub_port)
    }
}

/// Expand a leading `~/` to the user's home directory.
pub fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest).display().to_string();
        }
    }
    path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let config = CliConfig::parse(
            r#"
            hostname = "kpfserver"
            req = 10112
            pub = 10140
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.identity(), RelayIdentity::new("kpfserver", 10112, Some(10140)));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CliConfig::parse("").unwrap();
        let defaults = CliConfig::default();

        assert_eq!(config.hostname, defaults.hostname);
        assert_eq!(config.req, defaults.req);
        assert_eq!(config.pub_port, None);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_bad_port_type_is_rejected() {
        assert!(CliConfig::parse(r#"req = "ten""#).is_err());
    }

    fn temp_path(label: &str) -> String {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("lineage_config_{}_{}.toml", label, std::process::id()));
        path.to_string_lossy().to_string()
    }

    #[test]
    fn test_load_optional_missing_file_is_none() {
        let loaded = CliConfig::load_optional("/nonexistent/lineage/config.toml").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_optional_malformed_file_is_error() {
        let path = temp_path("malformed");
        fs::write(&path, "req = \"ten\"\n").unwrap();
        let result = CliConfig::load_optional(&path);
        fs::remove_file(&path).ok();

        assert!(result.is_err(), "a broken config must not fall back to defaults");
    }

    #[test]
    fn test_load_optional_reads_existing_file() {
        let path = temp_path("valid");
        fs::write(&path, "hostname = \"kpfserver\"\nreq = 10112\n").unwrap();
        let loaded = CliConfig::load_optional(&path).unwrap();
        fs::remove_file(&path).ok();

        let config = loaded.expect("config file exists");
        assert_eq!(config.identity(), RelayIdentity::new("kpfserver", 10112, None));
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde("/etc/lineage.toml"), "/etc/lineage.toml");
        assert_eq!(expand_tilde("relative/~/x"), "relative/~/x");
    }
}
