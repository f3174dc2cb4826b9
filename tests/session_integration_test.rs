use anyhow::Result;
use shapesense::core::catalog::require_hairstyle;
use shapesense::domain::model::{Gender, UserInfo, UserPatch};
use shapesense::{HairstyleStore, LocalStorage, ShapeError, UserStore};
use tempfile::TempDir;

fn storage_for(temp_dir: &TempDir) -> LocalStorage {
    LocalStorage::new(temp_dir.path().to_str().unwrap().to_string())
}

#[tokio::test]
async fn test_login_update_logout_round_trip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = UserStore::new(storage_for(&temp_dir));

    let mut user = UserInfo::new("小型");
    user.gender = Some(Gender::Other);
    store.login(user, "session-token".to_string()).await?;

    // 重新打開存儲，模擬下一次啟動
    let reopened = UserStore::new(storage_for(&temp_dir));
    let state = reopened.load().await?;
    assert!(state.is_logged_in);
    assert_eq!(state.token.as_deref(), Some("session-token"));

    let updated = reopened
        .update_user(UserPatch {
            nickname: Some("型识用户".to_string()),
            avatar: Some("avatar.png".to_string()),
            ..Default::default()
        })
        .await?
        .expect("user should be logged in");
    assert_eq!(updated.nickname, "型识用户");
    assert_eq!(updated.gender, Some(Gender::Other));

    reopened.set_face_shape("heart").await?;
    assert_eq!(
        reopened.require_user().await?.face_shape.as_deref(),
        Some("heart")
    );

    reopened.logout().await?;
    assert!(matches!(
        reopened.require_user().await,
        Err(ShapeError::SessionError { .. })
    ));

    Ok(())
}

#[tokio::test]
async fn test_corrupted_document_reports_serialization_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    tokio::fs::write(temp_dir.path().join("user-storage.json"), b"{not json").await?;

    let store = UserStore::new(storage_for(&temp_dir));
    let err = store.load().await.unwrap_err();

    assert!(matches!(err, ShapeError::SerializationError(_)));
    assert!(err.recovery_suggestion().contains("remove the file"));

    Ok(())
}

#[tokio::test]
async fn test_favorites_persist_across_instances() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = HairstyleStore::new(storage_for(&temp_dir));

    store.add_favorite(require_hairstyle(4)?).await?;
    store.add_favorite(require_hairstyle(14)?).await?;

    let reopened = HairstyleStore::new(storage_for(&temp_dir));
    let names: Vec<String> = reopened
        .favorites()
        .await?
        .into_iter()
        .map(|style| style.name)
        .collect();
    assert_eq!(names, vec!["波浪卷发".to_string(), "羊毛卷".to_string()]);

    assert!(reopened.remove_favorite(4).await?);
    assert!(!reopened.is_favorite(4).await?);
    assert!(reopened.is_favorite(14).await?);

    Ok(())
}
