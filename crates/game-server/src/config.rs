//! Configuration for the game TCP server.
//!
//! Defaults can be overridden via environment variables (and, in the
//! binary, by command-line flags on top of those):
//!
//! - `GAME_BIND_ADDR`          (default: "0.0.0.0")
//! - `GAME_PORT`               (default: "9100")
//! - `GAME_MAX_CLIENTS`        (default: "1024")
//! - `GAME_DEFAULT_BOARD_SIZE` (default: "3")
//! - `GAME_EXPORT_DIR`         (default: unset, move-log export disabled)

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use game_core::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// IP address / interface to bind to (e.g. "0.0.0.0" or "127.0.0.1").
    pub bind_addr: String,

    /// TCP port to listen on.
    pub port: u16,

    /// Maximum number of simultaneously connected clients.
    pub max_clients: usize,

    /// Board size for rooms created by a join that names none.
    pub default_board_size: usize,

    /// Directory for finished-round move logs. `None` disables export.
    pub export_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: "0.0.0.0".to_string(),
            port: 9100,
            max_clients: 1024,
            default_board_size: 3,
            export_dir: None,
        }
    }
}

impl Config {
    /// Construct a `Config` from environment variables, falling back
    /// to the defaults.
    pub fn from_env() -> Result<Self> {
        let defaults = Config::default();

        let config = Config {
            bind_addr: env::var("GAME_BIND_ADDR").unwrap_or(defaults.bind_addr),
            port: read_env_or_default("GAME_PORT", defaults.port)?,
            max_clients: read_env_or_default("GAME_MAX_CLIENTS", defaults.max_clients)?,
            default_board_size: read_env_or_default(
                "GAME_DEFAULT_BOARD_SIZE",
                defaults.default_board_size,
            )?,
            export_dir: env::var_os("GAME_EXPORT_DIR").map(PathBuf::from),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.default_board_size) {
            bail!(
                "default board size {} outside {}..={}",
                self.default_board_size,
                MIN_BOARD_SIZE,
                MAX_BOARD_SIZE
            );
        }
        if self.max_clients == 0 {
            bail!("max_clients must be at least 1");
        }
        Ok(())
    }

    /// Convenience: `addr:port` socket string.
    pub fn socket_addr_string(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn read_env_or_default<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .with_context(|| format!("invalid value {:?} for {}", val, key)),
        Err(_) => Ok(default),
    }
}
