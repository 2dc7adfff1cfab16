//! # Application Configuration
//!
//! Loads the settings for the seeding and reporting run from environment
//! variables, with defaults where appropriate.
//!
//! ## Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `SEED_SAMPLE_DATA`: Insert the built-in sample records before reporting (default: true)
//! - `INVALID_RECORD_POLICY`: `abort` or `skip` when a sample record fails validation (default: "abort")
//! - `REPORT_PRETTY`: Pretty-print the JSON report (default: true)

use std::env;
use std::fmt;
use std::str::FromStr;

use eyre::{Result, WrapErr, eyre};
use tracing::Level;

/// What to do when a record is rejected by validation (malformed time,
/// inverted interval, empty required name, dangling reference).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidRecordPolicy {
    /// Stop at the first rejected record and report its error.
    #[default]
    Abort,
    /// Log a warning, count the record as rejected and continue.
    Skip,
}

impl FromStr for InvalidRecordPolicy {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            other => Err(eyre!("unknown invalid record policy '{other}'")),
        }
    }
}

impl fmt::Display for InvalidRecordPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Abort => f.write_str("abort"),
            Self::Skip => f.write_str("skip"),
        }
    }
}

/// Configuration for a schoolbook run
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL database connection string
    pub database_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// Whether to insert the sample records before building the report
    pub seed_sample_data: bool,

    /// Caller-side handling of records that fail validation
    pub invalid_record_policy: InvalidRecordPolicy,

    /// Pretty-print the report
    pub report_pretty: bool,
}

impl AppConfig {
    /// Creates a new AppConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The DATABASE_URL environment variable is not set
    /// - A boolean or policy variable holds an unrecognized value
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. `from_env`
    /// passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").ok_or_else(|| eyre!("DATABASE_URL environment variable must be set"))?;

        let log_level = match lookup("LOG_LEVEL")
            .unwrap_or_else(|| "info".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        let seed_sample_data = parse_bool(&lookup, "SEED_SAMPLE_DATA", true)?;
        let report_pretty = parse_bool(&lookup, "REPORT_PRETTY", true)?;

        let invalid_record_policy = match lookup("INVALID_RECORD_POLICY") {
            Some(value) => value
                .parse()
                .wrap_err("Invalid INVALID_RECORD_POLICY value")?,
            None => InvalidRecordPolicy::default(),
        };

        Ok(Self {
            database_url,
            log_level,
            seed_sample_data,
            invalid_record_policy,
            report_pretty,
        })
    }
}

fn parse_bool<F>(lookup: &F, key: &str, default: bool) -> Result<bool>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(eyre!("Invalid {key} value '{other}'")),
        },
    }
}
