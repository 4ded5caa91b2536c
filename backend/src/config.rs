//! Environment-driven server configuration.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{FixedOffset, Local, Offset};

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Directory holding the attendance document
    pub data_dir: PathBuf,
    /// UTC offset applied to calendar dates and time-of-day rendering
    pub utc_offset: FixedOffset,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("PORT must be a number")?;
        let data_dir = env::var("ATTENDANCE_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));
        let utc_offset = match env::var("ATTENDANCE_UTC_OFFSET_MINUTES") {
            Ok(raw) => parse_offset_minutes(&raw)?,
            // Fall back to the host's offset at startup
            Err(_) => Local::now().offset().fix(),
        };

        Ok(Self {
            host,
            port,
            data_dir,
            utc_offset,
        })
    }
}

fn parse_offset_minutes(raw: &str) -> Result<FixedOffset> {
    let minutes: i32 = raw
        .parse()
        .context("ATTENDANCE_UTC_OFFSET_MINUTES must be a whole number of minutes")?;
    FixedOffset::east_opt(minutes * 60)
        .context("ATTENDANCE_UTC_OFFSET_MINUTES is out of range")
}
