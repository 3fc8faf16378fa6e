use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Bounded item counts for each rendered region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub ticker: usize,
    /// Tab-controlled latest grid
    pub latest: usize,
    /// Per-section and per-type grids
    pub section: usize,
    pub archive: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            ticker: 10,
            latest: 9,
            section: 6,
            archive: 12,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Directory holding the raw feed files served under /data
    pub data_dir: PathBuf,
    /// Live feed location (URL or path)
    pub live_feed: String,
    /// Archive feed location (URL or path)
    pub archive_feed: String,
    pub hero_interval: Duration,
    pub limits: Limits,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let data_dir = PathBuf::from(env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string()));
        let defaults = Limits::default();

        Self {
            port: parse_var("PORT").unwrap_or(8080),
            live_feed: env::var("LIVE_FEED")
                .unwrap_or_else(|_| data_dir.join("live.json").display().to_string()),
            archive_feed: env::var("ARCHIVE_FEED")
                .unwrap_or_else(|_| data_dir.join("archive.json").display().to_string()),
            data_dir,
            hero_interval: Duration::from_millis(parse_var("HERO_ROTATE_MS").unwrap_or(7000)),
            limits: Limits {
                ticker: parse_var("TICKER_LIMIT").unwrap_or(defaults.ticker),
                latest: parse_var("LATEST_LIMIT").unwrap_or(defaults.latest),
                section: parse_var("SECTION_LIMIT").unwrap_or(defaults.section),
                archive: parse_var("ARCHIVE_LIMIT").unwrap_or(defaults.archive),
            },
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}
