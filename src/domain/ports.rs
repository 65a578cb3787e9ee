use crate::utils::error::Result;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base(&self) -> &str;
    fn output_path(&self) -> &str;
    fn limit(&self) -> Option<usize>;
    fn max_concurrent(&self) -> usize;
    fn request_delay(&self) -> Duration;
}
