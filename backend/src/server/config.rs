//! Environment-driven server settings.
//!
//! Values are read through [`mockable::Env`] so parsing can be tested
//! without touching the process environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use mockable::Env;

use backend::outbound::persistence::PoolConfig;

const PORT_ENV: &str = "PORT";
const HOST_ENV: &str = "HOST";
const DATABASE_URL_ENV: &str = "DATABASE_URL";
const POOL_MAX_SIZE_ENV: &str = "DATABASE_POOL_MAX_SIZE";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Errors raised while reading server settings.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is missing or empty.
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
    /// A variable is present but cannot be parsed.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Validated settings for binding the listener and reaching the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    pub pool_max_size: u32,
}

impl ServerSettings {
    /// Read settings from `env`.
    ///
    /// `PORT` falls back to 3000 and `HOST` to `0.0.0.0`. `DATABASE_URL` is
    /// required.
    pub fn from_env<E: Env>(env: &E) -> Result<Self, ConfigError> {
        let port = parse_or(env, PORT_ENV, DEFAULT_PORT, "a TCP port between 0 and 65535")?;
        let host = parse_or(env, HOST_ENV, DEFAULT_HOST, "an IPv4 or IPv6 address")?;
        let pool_max_size = parse_or(
            env,
            POOL_MAX_SIZE_ENV,
            DEFAULT_POOL_MAX_SIZE,
            "a positive integer",
        )?;
        if pool_max_size == 0 {
            return Err(ConfigError::InvalidEnv {
                name: POOL_MAX_SIZE_ENV,
                value: "0".to_owned(),
                expected: "a positive integer",
            });
        }
        let database_url = read(env, DATABASE_URL_ENV).ok_or(ConfigError::MissingEnv {
            name: DATABASE_URL_ENV,
        })?;

        Ok(Self {
            bind_addr: SocketAddr::new(host, port),
            database_url,
            pool_max_size,
        })
    }

    /// Pool configuration derived from these settings.
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig::new(self.database_url.clone()).with_max_size(self.pool_max_size)
    }
}

// Empty values count as unset.
fn read<E: Env>(env: &E, name: &str) -> Option<String> {
    env.string(name)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn parse_or<E, T>(
    env: &E,
    name: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    E: Env,
    T: std::str::FromStr,
{
    match read(env, name) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnv {
            name,
            value,
            expected,
        }),
    }
}
