use super::*;

/// Tests appending an activity log entry.
///
/// Verifies that the actor's name and origin are copied onto the entry.
///
/// Expected: Ok with all fields stored
#[tokio::test]
async fn appends_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ActivityLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ActivityLogRepository::new(db);
    let log = repo.create(entry(3, ActivityAction::Create)).await?;

    assert!(log.id > 0);
    assert_eq!(log.user_id, 3);
    assert_eq!(log.user_name, "Operator 3");
    assert_eq!(log.entity, "soldier");
    assert_eq!(log.entity_id.as_deref(), Some("1"));
    assert_eq!(log.ip_address.as_deref(), Some("10.0.0.1"));

    Ok(())
}
