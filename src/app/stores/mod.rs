//! Persisted client state, one JSON document per store key.

pub mod hairstyle_store;
pub mod user_store;

pub use hairstyle_store::HairstyleStore;
pub use user_store::UserStore;

use crate::domain::ports::Storage;
use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// 讀取 JSON 文件，不存在時返回預設狀態
pub(crate) async fn load_document<S, T>(storage: &S, key: &str) -> Result<T>
where
    S: Storage,
    T: DeserializeOwned + Default,
{
    match storage.read_file(key).await? {
        Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
        None => Ok(T::default()),
    }
}

pub(crate) async fn save_document<S, T>(storage: &S, key: &str, value: &T) -> Result<()>
where
    S: Storage,
    T: Serialize,
{
    let bytes = serde_json::to_vec_pretty(value)?;
    storage.write_file(key, &bytes).await
}
