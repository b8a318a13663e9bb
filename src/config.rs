use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
/// Log levels as defined in log2 crate
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Formats the collected links can be written in
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}

/// This struct is supposed to receive all program arguments while CrawlerConfig
/// describes only the crawler
#[derive(Parser, Debug, Serialize, Deserialize)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Starting URL, only links on its host are followed
    #[arg(short, long)]
    pub url: String,
    /// Output format for the collected links
    #[arg(short, long, default_value = "json", value_enum)]
    pub format: OutputFormat,
    /// Maximum number of links to collect (0 - no limit)
    #[arg(short, long, default_value = "100")]
    pub limit: usize,
    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "debug", value_enum)]
    pub log_level: LogLevel,
    /// Timeout for a single page request in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,
    /// Write logs to this file instead of stdout
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn new() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.url.trim().is_empty() {
            anyhow::bail!("url must not be empty");
        }
        if self.timeout == Some(0) {
            anyhow::bail!("timeout must be greater than 0");
        }
        Ok(())
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        write!(f, "{}", s)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, clap::Error> {
        Config::try_parse_from(std::iter::once("site-crawler").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let cfg = parse(&["--url", "https://example.com"]).unwrap();
        assert_eq!(cfg.url, "https://example.com");
        assert_eq!(cfg.format, OutputFormat::Json);
        assert_eq!(cfg.limit, 100);
        assert_eq!(cfg.log_level, LogLevel::Debug);
        assert_eq!(cfg.timeout, None);
        assert_eq!(cfg.log_file, None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_all_arguments() {
        let cfg = parse(&[
            "-u", "https://example.com", "--format", "csv", "--limit", "0",
            "--log-level", "warn", "--timeout", "5", "--log-file", "log/crawl.txt",
        ]).unwrap();
        assert_eq!(cfg.format, OutputFormat::Csv);
        assert_eq!(cfg.limit, 0);
        assert_eq!(cfg.log_level, LogLevel::Warn);
        assert_eq!(cfg.timeout, Some(5));
        assert_eq!(cfg.log_file, Some(PathBuf::from("log/crawl.txt")));
    }

    #[test]
    fn test_url_is_required() {
        assert!(parse(&["--limit", "5"]).is_err());
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(parse(&["--url", "https://example.com", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_validate() {
        let mut cfg = parse(&["--url", "  "]).unwrap();
        assert!(cfg.validate().is_err());
        cfg.url = "https://example.com".to_string();
        cfg.timeout = Some(0);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_display_matches_cli_values() {
        assert_eq!(LogLevel::Trace.to_string(), "trace");
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
    }
}
