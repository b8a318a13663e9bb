use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use anyhow::{anyhow, Context, Result};
use log2::*;
use reqwest::Client;

use super::config::{CrawlerConfig, CrawlerConfigRef};
use super::scrape::{extract_hrefs, fetch_page, is_same_host};
use super::state::{LinkStore, LinkStoreRef};
use super::wait_group::{WaitGroup, WorkGuard};

/// Everything a traversal task shares with its siblings
struct TaskContext {
    store: LinkStoreRef,
    client: Client,
    /// Host of the starting URL, links to other hosts are never followed
    host: String,
    wait_group: WaitGroup,
    request_timeout: Option<Duration>,
}

type TaskFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Collect every link reachable from `seed` without leaving its host.
///
/// `limit` caps the number of collected links (0 = no limit). The cap is a soft one:
/// a task stops scanning its page once the cap is hit, but tasks already past the
/// check still insert what they found, so the result may slightly exceed it.
///
/// `seed` is part of the result exactly as given. Fails only when `seed` itself is
/// not a usable URL.
pub async fn traverse(seed: &str, limit: usize) -> Result<Vec<String>> {
    let config = CrawlerConfig::from_seed(seed)
        .with_context(|| format!("Invalid seed URL '{}'", seed))?;

    crawl(Arc::new(config.with_limit(limit))).await
}

pub async fn crawl(crawler_cfg_ref: CrawlerConfigRef) -> Result<Vec<String>> {
    let starting_url = &crawler_cfg_ref.starting_url;
    let host = starting_url
        .host_str()
        .ok_or_else(|| anyhow!("Seed URL '{}' has no host", starting_url))?
        .to_string();

    let ctx = Arc::new(TaskContext {
        store: Arc::new(LinkStore::new(crawler_cfg_ref.limit)),
        client: Client::new(),
        host,
        wait_group: WaitGroup::new(),
        request_timeout: crawler_cfg_ref.request_timeout(),
    });

    let seed = crawler_cfg_ref.seed.clone();
    ctx.store.insert(seed.clone()).await;

    info!("Crawling {} (host: {}, limit: {})", seed, ctx.host, ctx.store.limit());
    let guard = ctx.wait_group.add();
    tokio::spawn(scrape_task(Arc::clone(&ctx), seed, guard));

    ctx.wait_group.wait().await;

    let links = ctx.store.snapshot().await;
    info!("Crawling completed. Total links found: {}", links.len());
    Ok(links)
}

/// Fetch `url`, record new same-host links and spawn a task for each of them.
/// Holding `guard` keeps the crawl alive until this task is done.
fn scrape_task(ctx: Arc<TaskContext>, url: String, guard: WorkGuard) -> TaskFuture {
    Box::pin(async move {
        let _guard = guard;

        if ctx.store.is_limit_reached().await {
            trace!("Limit reached, skipping {}", url);
            return;
        }

        debug!("Downloading page {}", url);
        let body = match fetch_page(&url, &ctx.client, ctx.request_timeout).await {
            Ok(body) => body,
            Err(e) => {
                error!("Failed to download page {}: {}", url, e);
                return;
            }
        };

        let hrefs = match extract_hrefs(&body) {
            Ok(hrefs) => hrefs,
            Err(e) => {
                error!("Failed to parse page {}: {}", url, e);
                return;
            }
        };

        for href in hrefs {
            if ctx.store.is_limit_reached().await {
                trace!("Limit reached, ignoring remaining links on {}", url);
                break;
            }
            if ctx.store.contains(&href).await {
                continue;
            }

            match is_same_host(&href, &ctx.host) {
                Ok(true) => {
                    ctx.store.insert(href.clone()).await;
                    let guard = ctx.wait_group.add();
                    tokio::spawn(scrape_task(Arc::clone(&ctx), href, guard));
                }
                Ok(false) => {
                    debug!("Skipped link outside {}: {}", ctx.host, href);
                }
                Err(e) => {
                    error!("Failed to parse URL '{}' found on {}: {}", href, url, e);
                }
            }
        }
    })
}
