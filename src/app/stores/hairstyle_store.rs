use super::{load_document, save_document};
use crate::domain::model::{FormulaRecord, Hairstyle, HairstyleState};
use crate::domain::ports::Storage;
use crate::utils::error::Result;

pub const HAIRSTYLE_STORAGE_KEY: &str = "hairstyle-storage.json";
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// 收藏的髮型與配方歷史
pub struct HairstyleStore<S: Storage> {
    storage: S,
    history_limit: usize,
}

impl<S: Storage> HairstyleStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_history_limit(storage, DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_history_limit(storage: S, history_limit: usize) -> Self {
        Self {
            storage,
            history_limit,
        }
    }

    pub async fn load(&self) -> Result<HairstyleState> {
        load_document(&self.storage, HAIRSTYLE_STORAGE_KEY).await
    }

    async fn save(&self, state: &HairstyleState) -> Result<()> {
        save_document(&self.storage, HAIRSTYLE_STORAGE_KEY, state).await
    }

    /// 已收藏時返回 `false`
    pub async fn add_favorite(&self, hairstyle: Hairstyle) -> Result<bool> {
        let mut state = self.load().await?;
        if state.favorites.iter().any(|h| h.id == hairstyle.id) {
            return Ok(false);
        }

        tracing::info!("⭐ Added favorite: {}", hairstyle.name);
        state.favorites.push(hairstyle);
        self.save(&state).await?;
        Ok(true)
    }

    pub async fn remove_favorite(&self, id: u32) -> Result<bool> {
        let mut state = self.load().await?;
        let before = state.favorites.len();
        state.favorites.retain(|h| h.id != id);

        if state.favorites.len() == before {
            return Ok(false);
        }
        self.save(&state).await?;
        Ok(true)
    }

    pub async fn is_favorite(&self, id: u32) -> Result<bool> {
        Ok(self.load().await?.favorites.iter().any(|h| h.id == id))
    }

    pub async fn favorites(&self) -> Result<Vec<Hairstyle>> {
        Ok(self.load().await?.favorites)
    }

    /// 最新的記錄在前，超出上限的舊記錄會被丟棄
    pub async fn add_to_history(&self, record: FormulaRecord) -> Result<()> {
        let mut state = self.load().await?;
        state.history.insert(0, record);
        state.history.truncate(self.history_limit);
        self.save(&state).await
    }

    pub async fn history(&self) -> Result<Vec<FormulaRecord>> {
        Ok(self.load().await?.history)
    }

    /// 返回被清除的記錄數
    pub async fn clear_history(&self) -> Result<usize> {
        let mut state = self.load().await?;
        let cleared = state.history.len();
        state.history.clear();
        self.save(&state).await?;
        Ok(cleared)
    }
}
