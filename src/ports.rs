use async_trait::async_trait;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// One GET attempt against one link. Returns the status code of whatever
/// response the server produced; transport failures (DNS, connect, timeout)
/// surface as Err.
#[async_trait]
pub trait FetchPort: Send + Sync {
    async fn get_status(&self, link: &str) -> Result<u16, BoxError>;
}
