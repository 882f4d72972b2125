//! Client configuration

use std::path::PathBuf;

/// Backend the client talks to, resolved once from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Forward every operation to a remote TapTable server
    Remote,
    /// Serve every operation from the local demo store
    Demo,
}

/// Client configuration
///
/// # Environment variables
///
/// All fields can be set through the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | TAPTABLE_API_URL | (unset) | Remote backend base URL |
/// | TAPTABLE_DEMO | false | Force demo mode even when a base URL is set |
/// | TAPTABLE_DATA_DIR | .taptable | Directory for the demo store and session files |
/// | TAPTABLE_TIMEOUT_SECS | 30 | HTTP request timeout in seconds |
///
/// Demo mode is the default whenever no base URL is configured.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Remote backend base URL (e.g., "https://api.taptable.app");
    /// trailing slashes are stripped before use
    pub base_url: Option<String>,

    /// Force demo mode even when a base URL is present
    pub force_demo: bool,

    /// Directory holding the demo store and the persisted session token
    pub data_dir: PathBuf,

    /// HTTP request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Load configuration from environment variables, with defaults for
    /// anything unset.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("TAPTABLE_API_URL")
                .ok()
                .filter(|url| !url.is_empty()),
            force_demo: std::env::var("TAPTABLE_DEMO")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            data_dir: std::env::var("TAPTABLE_DATA_DIR")
                .unwrap_or_else(|_| ".taptable".into())
                .into(),
            timeout: std::env::var("TAPTABLE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Configuration for a remote backend.
    pub fn remote(base_url: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.base_url = Some(base_url.into());
        config.force_demo = false;
        config
    }

    /// Configuration for the local demo backend.
    pub fn demo() -> Self {
        let mut config = Self::from_env();
        config.base_url = None;
        config.force_demo = true;
        config
    }

    /// Set the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Resolve the operating mode: demo when forced or when no base URL
    /// is configured.
    pub fn mode(&self) -> Mode {
        if self.force_demo || self.base_url.is_none() {
            Mode::Demo
        } else {
            Mode::Remote
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ClientConfig {
        ClientConfig {
            base_url: None,
            force_demo: false,
            data_dir: ".taptable".into(),
            timeout: 30,
        }
    }

    #[test]
    fn test_demo_is_the_default_without_a_base_url() {
        assert_eq!(base().mode(), Mode::Demo);
    }

    #[test]
    fn test_base_url_selects_remote() {
        let config = ClientConfig {
            base_url: Some("http://localhost:5000".into()),
            ..base()
        };
        assert_eq!(config.mode(), Mode::Remote);
    }

    #[test]
    fn test_force_demo_wins_over_base_url() {
        let config = ClientConfig {
            base_url: Some("http://localhost:5000".into()),
            force_demo: true,
            ..base()
        };
        assert_eq!(config.mode(), Mode::Demo);
    }
}
