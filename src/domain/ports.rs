use crate::domain::model::UserHairData;
use crate::utils::error::Result;
use std::time::Duration;

/// 鍵值式的文件存儲，對應瀏覽器的 localStorage
pub trait Storage: Send + Sync {
    /// 文件不存在時返回 `Ok(None)`
    fn read_file(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = Result<Option<Vec<u8>>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn default_hair(&self) -> UserHairData;
    fn storage_path(&self) -> &str;
    fn analysis_delay(&self) -> Duration;
    fn record_history(&self) -> bool;
    fn history_limit(&self) -> usize;
}
