use log2::*;
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Instant;

use site_crawler::{config, crawler, output};

/// Indicates start time of a project, lazily initialized
pub static START_TIME: once_cell::sync::Lazy<Instant> = once_cell::sync::Lazy::new(Instant::now);

#[tokio::main]
async fn main() -> Result<()> {
    let _ = *START_TIME;
    let cfg = config::Config::new();
    cfg.validate()?;
    // results go to stdout, so keep logs out of it when a log file is given
    let log_target = match &cfg.log_file {
        Some(path) => open(&path.to_string_lossy()).tee(false),
        None => stdout(),
    };
    let _log2 = log_target
        .module(true) // include module name
        .module_with_line(true) // include line number from module
        .module_filter(|module| module.starts_with("site_crawler")) // include only modules having this pattern
        .compress(false) // compress output
        .level(cfg.log_level.to_string()) // level of logging (trace - error)
        .start();

    let crawler_config = match crawler::CrawlerConfig::from_seed(&cfg.url) {
        Ok(crawler_config) => crawler_config,
        Err(e) => {
            error!("Invalid source URL {}: {}", cfg.url, e);
            return Err(e).with_context(|| format!("Invalid source URL '{}'", cfg.url));
        }
    };

    let mut crawler_config = crawler_config.with_limit(cfg.limit);
    if let Some(timeout) = cfg.timeout {
        crawler_config = crawler_config.with_request_timeout(timeout);
    }

    let links = crawler::crawl(Arc::new(crawler_config)).await?;
    info!("Collected {} links in {:?}", links.len(), START_TIME.elapsed());

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    output::write_links(&links, cfg.format, &mut handle)?;

    Ok(())
}
