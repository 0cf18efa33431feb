use super::*;

/// Tests filtering by user and action.
///
/// Expected: Ok with only the matching entry
#[tokio::test]
async fn filters_by_user_and_action() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ActivityLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ActivityLogRepository::new(db);
    let target = repo.create(entry(1, ActivityAction::Delete)).await?;
    repo.create(entry(1, ActivityAction::Create)).await?;
    repo.create(entry(2, ActivityAction::Delete)).await?;

    let (logs, total) = repo
        .get_paginated(
            &ActivityLogFilter {
                user_id: Some(1),
                action: Some(ActivityAction::Delete),
                ..Default::default()
            },
            PageRequest { page: 1, limit: 20 },
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(logs[0].id, target.id);

    Ok(())
}

/// Tests the inclusive date range.
///
/// Verifies that a window around now includes today's entries and a window ending
/// yesterday excludes them.
///
/// Expected: Ok with both entries, then none
#[tokio::test]
async fn filters_by_date_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ActivityLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ActivityLogRepository::new(db);
    repo.create(entry(1, ActivityAction::Login)).await?;
    repo.create(entry(1, ActivityAction::Logout)).await?;

    let now = Utc::now();
    let page = PageRequest { page: 1, limit: 20 };

    let (_, total) = repo
        .get_paginated(
            &ActivityLogFilter {
                start: Some(now - Duration::hours(1)),
                end: Some(now + Duration::hours(1)),
                ..Default::default()
            },
            page,
        )
        .await?;
    assert_eq!(total, 2);

    let (_, total) = repo
        .get_paginated(
            &ActivityLogFilter {
                end: Some(now - Duration::days(1)),
                ..Default::default()
            },
            page,
        )
        .await?;
    assert_eq!(total, 0);

    Ok(())
}

/// Tests newest-first ordering.
///
/// Expected: Ok with the logout entry before the login entry
#[tokio::test]
async fn orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ActivityLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ActivityLogRepository::new(db);
    repo.create(entry(1, ActivityAction::Login)).await?;
    repo.create(entry(1, ActivityAction::Logout)).await?;

    let (logs, _) = repo
        .get_paginated(&ActivityLogFilter::default(), PageRequest { page: 1, limit: 20 })
        .await?;

    assert_eq!(logs[0].action, ActivityAction::Logout);
    assert_eq!(logs[1].action, ActivityAction::Login);

    Ok(())
}
