//! Runtime configuration: CLI arguments, env-var overrides, and defaults.

use clap::{Parser, ValueEnum};

// constants (used as defaults)
/// Default upstream Invidious instance origin.
///
/// Any public instance works as long as it serves the stock markup and the
/// `/api/v1` JSON surface. Override via `--instance` or `RELAY_INSTANCE`.
pub const DEFAULT_INSTANCE: &str = "https://yewtu.be";

/// Default listen port for the relay itself.
pub const DEFAULT_PORT: u16 = 3000;

/// Default listen address. Bind to `0.0.0.0` for container deployments.
pub const DEFAULT_BIND: &str = "127.0.0.1";

/// Default User-Agent sent on outbound requests to the instance.
pub const DEFAULT_USER_AGENT: &str = concat!("invidious_relay/", env!("CARGO_PKG_VERSION"));

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Clone, Debug, ValueEnum)]
#[allow(missing_docs)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable colored output.
    Plain,
    /// One JSON object per line, for log shippers.
    Json,
}

/// Runtime configuration for the relay.
///
/// Parsed from the command line; every networking-relevant option can also be
/// supplied through an environment variable (loaded from `.env` by the
/// binary), so containerized deployments need no arguments at all.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "invidious_relay",
    about = "Relays an Invidious instance's pages and API as a simplified JSON contract"
)]
pub struct Config {
    /// Origin of the upstream Invidious instance (scheme + host, no path)
    #[arg(long, env = "RELAY_INSTANCE", default_value = DEFAULT_INSTANCE)]
    pub instance: String,

    /// Port the relay listens on
    #[arg(long, env = "RELAY_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address the relay binds to
    #[arg(long, env = "RELAY_BIND", default_value = DEFAULT_BIND)]
    pub bind: String,

    /// User-Agent header for outbound requests to the instance
    #[arg(long, env = "RELAY_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format (plain, json)
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            instance: DEFAULT_INSTANCE.to_string(),
            port: DEFAULT_PORT,
            bind: DEFAULT_BIND.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
