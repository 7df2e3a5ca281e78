use crate::domain::http::{HttpRequest, HttpResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 持久化儲存（桌面版的 localStorage）
pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn remove_file(&self, path: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Executes one HTTP round-trip. Non-2xx statuses are returned as data;
/// only failures to get any response are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}
