//! Listener settings loaded via OrthoConfig.
//!
//! Values come from CLI flags (`--host`, `--port`), `TRACKER_*` environment
//! variables, or a configuration file, in that order of precedence.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Where the HTTP listener binds.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TRACKER")]
pub struct ServerSettings {
    /// Interface or host name to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 3000)]
    pub port: u16,
}

impl ServerSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Resolve host and port into the first matching socket address.
    ///
    /// # Errors
    /// Returns [`io::Error`] when the host does not resolve.
    pub fn bind_addr(&self) -> io::Result<SocketAddr> {
        (self.host(), self.port())
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| io::Error::other(format!("no address for host {}", self.host())))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for listener settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from(args: &[&str]) -> ServerSettings {
        let argv = std::iter::once("exercise-tracker")
            .chain(args.iter().copied())
            .map(OsString::from);
        ServerSettings::load_from_iter(argv).expect("config should load")
    }

    #[rstest]
    fn defaults_bind_all_interfaces_on_port_3000() {
        let _guard = lock_env([
            ("TRACKER_HOST", None::<String>),
            ("TRACKER_PORT", None::<String>),
        ]);

        let settings = load_from(&[]);
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port(), 3000);
        assert_eq!(
            settings.bind_addr().expect("resolves"),
            "0.0.0.0:3000".parse().expect("valid address")
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("TRACKER_HOST", Some("127.0.0.1".to_owned())),
            ("TRACKER_PORT", Some("8081".to_owned())),
        ]);

        let settings = load_from(&[]);
        assert_eq!(settings.host(), "127.0.0.1");
        assert_eq!(settings.port(), 8081);
    }

    #[rstest]
    fn cli_flags_take_precedence_over_environment() {
        let _guard = lock_env([
            ("TRACKER_HOST", None::<String>),
            ("TRACKER_PORT", Some("8081".to_owned())),
        ]);

        let settings = load_from(&["--port", "9090"]);
        assert_eq!(settings.port(), 9090);
    }
}
