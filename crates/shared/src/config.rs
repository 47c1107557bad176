//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Reporting pipeline configuration.
    #[serde(default)]
    pub reporting: ReportingConfig,
    /// PDF renderer configuration.
    #[serde(default)]
    pub renderer: RendererConfig,
}

/// Reporting pipeline configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportingConfig {
    /// Default timezone name used when a request does not specify one.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_timezone() -> String {
    "IST".to_string()
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

/// PDF renderer configuration.
///
/// The renderer launches one headless-Chromium process per report, so both
/// timeouts bound a single request, not a shared pool.
#[derive(Debug, Clone, Deserialize)]
pub struct RendererConfig {
    /// Maximum time to wait for the browser process to start, in seconds.
    #[serde(default = "default_launch_timeout")]
    pub launch_timeout_secs: u64,
    /// Maximum time for the whole launch-load-print cycle, in seconds.
    #[serde(default = "default_render_timeout")]
    pub render_timeout_secs: u64,
    /// Explicit path to a Chromium binary. Auto-detected when absent.
    #[serde(default)]
    pub chrome_path: Option<String>,
}

fn default_launch_timeout() -> u64 {
    20
}

fn default_render_timeout() -> u64 {
    40
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            launch_timeout_secs: default_launch_timeout(),
            render_timeout_secs: default_render_timeout(),
            chrome_path: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("WEIGHBRIDGE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporting_defaults() {
        let config = ReportingConfig::default();
        assert_eq!(config.timezone, "IST");
    }

    #[test]
    fn test_renderer_defaults() {
        let config = RendererConfig::default();
        assert_eq!(config.launch_timeout_secs, 20);
        assert_eq!(config.render_timeout_secs, 40);
        assert!(config.chrome_path.is_none());
    }
}
