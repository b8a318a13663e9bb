pub mod state;
pub mod config;
pub mod scrape;
pub mod runner;
pub mod wait_group;


pub use state::{LinkStore, LinkStoreRef};
pub use config::{CrawlerConfig, CrawlerConfigRef};
pub use scrape::{extract_hrefs, fetch_page, is_same_host};
pub use runner::{crawl, traverse};
pub use wait_group::{WaitGroup, WorkGuard};
