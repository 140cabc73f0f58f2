use crate::config::Config;
use crate::ports::FetchPort;
use log::warn;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;
use url::Url;

pub struct UrlCheckerService<F>
where
    F: FetchPort + Clone + Send + Sync + 'static,
{
    pub fetcher: F,
    pub config: Config,
}

impl<F> UrlCheckerService<F>
where
    F: FetchPort + Clone + Send + Sync + 'static,
{
    pub fn new(fetcher: F, config: Config) -> Self {
        Self { fetcher, config }
    }

    /// Resolves a whole batch: one entry per distinct input link, holding the
    /// status code of the first response obtained for it, or 0 if the link is
    /// invalid or every attempt failed. Returns only after every fetch task
    /// has finished.
    pub async fn check(&self, links: Vec<String>) -> HashMap<String, u16> {
        // Seed every entry at 0 before any task runs; fetch tasks only ever
        // overwrite their own key.
        let mut codes = HashMap::with_capacity(links.len());
        let mut to_fetch = Vec::with_capacity(links.len());
        for link in links {
            codes.insert(link.clone(), 0u16);
            if valid_link(&link) {
                to_fetch.push(link);
            }
        }

        let codes = Arc::new(Mutex::new(codes));
        let limiter = Arc::new(Semaphore::new(self.config.parallel_limit));
        let mut handles = Vec::with_capacity(to_fetch.len());

        for link in to_fetch {
            // Admission: a permit is taken before the task is spawned and
            // held until it finishes, capping in-flight fetches.
            let permit = limiter
                .clone()
                .acquire_owned()
                .await
                .expect("admission semaphore closed");
            let fetcher = self.fetcher.clone();
            let codes = codes.clone();
            let attempts = self.config.attempts_count;
            handles.push(tokio::spawn(async move {
                let _permit = permit;
                if let Some(code) = fetch_status_code(&fetcher, &link, attempts).await {
                    codes.lock().unwrap().insert(link, code);
                }
            }));
        }

        for handle in handles {
            if let Err(e) = handle.await {
                warn!("fetch task failed: {}", e);
            }
        }

        let result = codes.lock().unwrap().clone();
        result
    }
}

/// A link is fetchable only if it parses as an absolute URL with a host.
/// Anything else is reported and left at status 0.
fn valid_link(link: &str) -> bool {
    match Url::parse(link) {
        Ok(url) if url.has_host() => true,
        _ => {
            warn!("invalid URL: {:?}", link);
            false
        }
    }
}

/// Sequential attempts against one link. The first response of any status
/// ends the loop; transport errors are logged and retried with no delay.
async fn fetch_status_code<F: FetchPort>(fetcher: &F, link: &str, attempts: usize) -> Option<u16> {
    for _ in 0..attempts {
        match fetcher.get_status(link).await {
            Ok(code) => return Some(code),
            Err(e) => warn!("request error for {}: {}", link, e),
        }
    }
    None
}
