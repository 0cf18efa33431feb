use super::*;

/// Tests creating a notification.
///
/// Expected: Ok with an unread notification of the requested type
#[tokio::test]
async fn creates_unread_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationRepository::new(db);
    let notification = repo
        .create(CreateNotificationParams {
            title: "Pemeriksaan Kesehatan".to_string(),
            message: "Jadwal pemeriksaan rutin besok".to_string(),
            notification_type: NotificationType::Warning,
            user_id: None,
        })
        .await?;

    assert!(notification.id > 0);
    assert!(!notification.read);
    assert_eq!(notification.notification_type, NotificationType::Warning);

    Ok(())
}

/// Tests deleting a notification.
///
/// Expected: Ok(true) once, then Ok(false)
#[tokio::test]
async fn deletes_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_notification(db).await?;

    let repo = NotificationRepository::new(db);

    assert!(repo.delete(existing.id).await?);
    assert!(!repo.delete(existing.id).await?);

    Ok(())
}
