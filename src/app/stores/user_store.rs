use super::{load_document, save_document};
use crate::domain::model::{UserInfo, UserPatch, UserState};
use crate::domain::ports::Storage;
use crate::utils::error::{Result, ShapeError};
use crate::utils::validation::validate_non_empty_string;

pub const USER_STORAGE_KEY: &str = "user-storage.json";

/// 登入狀態與用戶資料
pub struct UserStore<S: Storage> {
    storage: S,
}

impl<S: Storage> UserStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub async fn load(&self) -> Result<UserState> {
        load_document(&self.storage, USER_STORAGE_KEY).await
    }

    async fn save(&self, state: &UserState) -> Result<()> {
        save_document(&self.storage, USER_STORAGE_KEY, state).await
    }

    pub async fn login(&self, user: UserInfo, token: String) -> Result<UserState> {
        validate_non_empty_string("nickname", &user.nickname)?;

        tracing::info!("👤 User '{}' logged in", user.nickname);
        let state = UserState {
            is_logged_in: true,
            user: Some(user),
            token: Some(token),
        };
        self.save(&state).await?;
        Ok(state)
    }

    pub async fn logout(&self) -> Result<()> {
        let state = self.load().await?;
        if let Some(user) = &state.user {
            tracing::info!("👋 User '{}' logged out", user.nickname);
        }
        self.save(&UserState::default()).await
    }

    /// 未登入時不做任何修改，返回 `None`
    pub async fn update_user(&self, patch: UserPatch) -> Result<Option<UserInfo>> {
        let mut state = self.load().await?;
        let Some(user) = state.user.as_mut() else {
            tracing::warn!("Ignoring profile update: no user is logged in");
            return Ok(None);
        };

        if let Some(nickname) = patch.nickname {
            validate_non_empty_string("nickname", &nickname)?;
            user.nickname = nickname;
        }
        if let Some(avatar) = patch.avatar {
            user.avatar = avatar;
        }
        if let Some(phone) = patch.phone {
            user.phone = Some(phone);
        }
        if let Some(gender) = patch.gender {
            user.gender = Some(gender);
        }

        let updated = user.clone();
        self.save(&state).await?;
        Ok(Some(updated))
    }

    pub async fn set_face_shape(&self, face_shape: &str) -> Result<Option<UserInfo>> {
        let mut state = self.load().await?;
        let Some(user) = state.user.as_mut() else {
            return Ok(None);
        };

        user.face_shape = Some(face_shape.to_string());
        let updated = user.clone();
        self.save(&state).await?;
        Ok(Some(updated))
    }

    pub async fn current(&self) -> Result<Option<UserInfo>> {
        let state = self.load().await?;
        Ok(if state.is_logged_in { state.user } else { None })
    }

    pub async fn require_user(&self) -> Result<UserInfo> {
        self.current().await?.ok_or_else(|| ShapeError::SessionError {
            message: "no user is logged in".to_string(),
        })
    }
}
