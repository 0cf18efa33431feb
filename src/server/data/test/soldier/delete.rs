use super::*;

/// Tests deleting a soldier.
///
/// Verifies that the deleted record is returned and can no longer be found.
///
/// Expected: Ok(Some) then find_by_id returns Ok(None)
#[tokio::test]
async fn deletes_soldier() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Soldier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_soldier(db).await?;

    let repo = SoldierRepository::new(db);
    let deleted = repo.delete(existing.id).await?.unwrap();

    assert_eq!(deleted.id, existing.id);
    assert!(repo.find_by_id(existing.id).await?.is_none());

    Ok(())
}

/// Tests deleting a missing soldier.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_soldier() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Soldier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SoldierRepository::new(db);

    assert!(repo.delete(1).await?.is_none());

    Ok(())
}
