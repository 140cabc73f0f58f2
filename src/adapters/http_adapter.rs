use crate::ports::{BoxError, FetchPort};
use async_trait::async_trait;
use std::time::Duration;

/// Production transport. Every call builds its own client with keep-alive
/// disabled, so no connection outlives a single attempt.
#[derive(Clone)]
pub struct ReqwestFetchAdapter {
    pub timeout: Duration,
}

#[async_trait]
impl FetchPort for ReqwestFetchAdapter {
    async fn get_status(&self, link: &str) -> Result<u16, BoxError> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .pool_idle_timeout(self.timeout)
            .timeout(self.timeout)
            .build()?;
        let response = client.get(link).send().await?;
        // The body is dropped unread; only the status matters.
        Ok(response.status().as_u16())
    }
}
