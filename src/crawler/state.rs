use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Set of links discovered during one crawl run.
///
/// Doubles as the dedup mechanism and as the limit signal for traversal tasks.
/// Every operation goes through a single lock, so inserts are never lost even
/// when many tasks write at once.
pub struct LinkStore {
    links: RwLock<HashSet<String>>,
    /// Soft cap on the number of stored links, 0 means unlimited
    limit: usize,
}

impl LinkStore {
    pub fn new(limit: usize) -> Self {
        Self {
            links: RwLock::new(HashSet::new()),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Adds `link` to the set. Inserting a known link changes nothing.
    pub async fn insert(&self, link: impl Into<String>) {
        self.links.write().await.insert(link.into());
    }

    pub async fn contains(&self, link: &str) -> bool {
        self.links.read().await.contains(link)
    }

    pub async fn size(&self) -> usize {
        self.links.read().await.len()
    }

    /// True once the store holds at least `limit` links.
    /// The answer may be stale by the time the caller acts on it.
    pub async fn is_limit_reached(&self) -> bool {
        if self.limit == 0 {
            return false;
        }
        self.size().await >= self.limit
    }

    /// All links stored so far, in no particular order.
    pub async fn snapshot(&self) -> Vec<String> {
        self.links.read().await.iter().cloned().collect()
    }
}

pub type LinkStoreRef = Arc<LinkStore>;
