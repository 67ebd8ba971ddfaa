use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub upstream: UpstreamSettings,
    #[serde(default)]
    pub cors: CorsSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Base URLs and call policy for the Users and Preferences services
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamSettings {
    pub users_base_url: String,
    pub prefs_base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub create_endpoint: CreateEndpoint,
}

/// Which creation endpoint the deployed Preferences service exposes.
///
/// Older deployments serve `POST /preferences`; newer ones mount the
/// collection at the service root and take `POST /`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreateEndpoint {
    #[default]
    Preferences,
    Root,
}

impl CreateEndpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            CreateEndpoint::Preferences => "preferences",
            CreateEndpoint::Root => "root",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:5000".to_string()]
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, then config/local.toml)
    /// 3. Environment variables (prefixed with PREFS__)
    /// 4. The bare variables recognized by earlier deployments
    ///    (USERS_BASE_URL, PREFS_BASE_URL, PORT and their aliases)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with PREFS__)
            // e.g., PREFS__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("PREFS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = apply_legacy_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    ///
    /// Recognizes the same environment variables as [`Settings::load`],
    /// including the bare legacy ones.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("PREFS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = apply_legacy_env_vars(settings)?;

        settings.try_deserialize()
    }
}

/// Apply the bare environment variables the service has historically
/// recognized, each with its older alias checked second.
fn apply_legacy_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let users_base = env::var("USERS_BASE_URL")
        .or_else(|_| env::var("USERS_SERVICE_BASE_URL"))
        .ok();
    let prefs_base = env::var("PREFS_BASE_URL")
        .or_else(|_| env::var("PREFERENCES_SERVICE_BASE_URL"))
        .ok();
    let port = env::var("PORT").ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(url) = users_base {
        builder = builder.set_override("upstream.users_base_url", url)?;
    }
    if let Some(url) = prefs_base {
        builder = builder.set_override("upstream.prefs_base_url", url)?;
    }
    if let Some(port) = port {
        builder = builder.set_override("server.port", port)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout() {
        assert_eq!(default_timeout_secs(), 5);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_default_cors_allows_local_frontend() {
        let cors = CorsSettings::default();
        assert_eq!(cors.allowed_origins, vec!["http://localhost:5000"]);
    }

    #[test]
    fn test_create_endpoint_default_and_names() {
        assert_eq!(CreateEndpoint::default(), CreateEndpoint::Preferences);
        assert_eq!(CreateEndpoint::Preferences.as_str(), "preferences");
        assert_eq!(CreateEndpoint::Root.as_str(), "root");
    }

    #[test]
    fn test_create_endpoint_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            ep: CreateEndpoint,
        }

        let w: Wrapper = serde_json::from_str(r#"{"ep": "root"}"#).unwrap();
        assert_eq!(w.ep, CreateEndpoint::Root);
    }

    // All legacy-variable assertions live in this one test so the env
    // mutation stays serialized.
    #[test]
    fn test_legacy_env_vars_override_settings() {
        use std::env;

        env::set_var("USERS_BASE_URL", "http://users-override:9001");
        env::set_var("PREFERENCES_SERVICE_BASE_URL", "http://prefs-alias:9002");
        env::set_var("PORT", "9100");

        let settings = Settings::load().unwrap();
        assert_eq!(
            settings.upstream.users_base_url,
            "http://users-override:9001"
        );
        assert_eq!(settings.upstream.prefs_base_url, "http://prefs-alias:9002");
        assert_eq!(settings.server.port, 9100);

        // The primary variable wins over its alias
        env::set_var("PREFS_BASE_URL", "http://prefs-primary:9003");
        let settings = Settings::load().unwrap();
        assert_eq!(
            settings.upstream.prefs_base_url,
            "http://prefs-primary:9003"
        );

        env::remove_var("USERS_BASE_URL");
        env::remove_var("PREFERENCES_SERVICE_BASE_URL");
        env::remove_var("PREFS_BASE_URL");
        env::remove_var("PORT");
    }

    #[test]
    fn test_load_from_custom_path() {
        let path = std::env::temp_dir().join("prefs-composite-test-config.toml");
        std::fs::write(
            &path,
            r#"
[server]
host = "127.0.0.1"
port = 8099
workers = 2

[upstream]
users_base_url = "http://users.test"
prefs_base_url = "http://prefs.test"
create_endpoint = "root"

[logging]
level = "debug"
format = "pretty"
"#,
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        // Fields with a bare-variable override are asserted only in the
        // serialized env test above; this one may run concurrently.
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.workers, Some(2));
        assert_eq!(settings.upstream.timeout_secs, 5);
        assert_eq!(settings.upstream.create_endpoint, CreateEndpoint::Root);
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.logging.format, "pretty");
    }
}
