use super::*;

/// Tests the result cap and ordering.
///
/// Verifies that only the newest `limit` notifications are returned, newest first.
///
/// Expected: Ok with 3 of 5 notifications, descending ids
#[tokio::test]
async fn returns_newest_up_to_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..5 {
        ids.push(factory::create_notification(db).await?.id);
    }

    let repo = NotificationRepository::new(db);
    let notifications = repo.get_recent(None, 3).await?;

    let returned: Vec<i32> = notifications.iter().map(|n| n.id).collect();
    assert_eq!(returned, vec![ids[4], ids[3], ids[2]]);

    Ok(())
}

/// Tests filtering by addressed user.
///
/// Expected: Ok with only the notification for that user
#[tokio::test]
async fn filters_by_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let addressed = factory::notification::NotificationFactory::new(db)
        .user_id(7)
        .build()
        .await?;
    factory::create_notification(db).await?;

    let repo = NotificationRepository::new(db);
    let notifications = repo.get_recent(Some(7), 50).await?;

    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].id, addressed.id);

    Ok(())
}
