use super::*;

/// Tests marking a notification as read, twice.
///
/// Verifies that marking is idempotent.
///
/// Expected: Ok(Some) with read = true both times
#[tokio::test]
async fn marks_notification_read() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_notification(db).await?;

    let repo = NotificationRepository::new(db);

    let first = repo.mark_read(existing.id).await?.unwrap();
    assert!(first.read);

    let second = repo.mark_read(existing.id).await?.unwrap();
    assert!(second.read);
    assert_eq!(second.updated_at, first.updated_at);

    Ok(())
}

/// Tests marking a missing notification.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationRepository::new(db);

    assert!(repo.mark_read(99).await?.is_none());

    Ok(())
}
