//! Server settings loaded via OrthoConfig.
//!
//! Values layer CLI flags over `SIGNUP_*` environment variables over
//! configuration files, falling back to the defaults below.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Configuration values controlling the HTTP listener and logging.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SIGNUP")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Emit human-readable log lines instead of JSON.
    #[ortho_config(default = false)]
    pub pretty_logs: bool,
}

impl ServerSettings {
    /// Return the configured interface, falling back to the default.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to the default.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("signup")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("SIGNUP_HOST", None::<String>),
            ("SIGNUP_PORT", None::<String>),
            ("SIGNUP_PRETTY_LOGS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port(), DEFAULT_PORT);
        assert!(!settings.pretty_logs);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("SIGNUP_HOST", Some("127.0.0.1".to_owned())),
            ("SIGNUP_PORT", Some("3000".to_owned())),
            ("SIGNUP_PRETTY_LOGS", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), "127.0.0.1");
        assert_eq!(settings.port(), 3000);
        assert!(settings.pretty_logs);
    }
}
