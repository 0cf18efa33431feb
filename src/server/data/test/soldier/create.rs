use super::*;

/// Tests creating a soldier record.
///
/// Verifies that the repository inserts the soldier and returns it with a generated id
/// and matching timestamps.
///
/// Expected: Ok with the stored fields
#[tokio::test]
async fn creates_soldier() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Soldier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SoldierRepository::new(db);
    let soldier = repo.create(create_params("52100001")).await?;

    assert!(soldier.id > 0);
    assert_eq!(soldier.nrp, "52100001");
    assert_eq!(soldier.rank, Rank::Kapten);
    assert_eq!(soldier.created_at, soldier.updated_at);

    let found = repo.find_by_id(soldier.id).await?;
    assert_eq!(found, Some(soldier));

    Ok(())
}

/// Tests the NRP uniqueness constraint.
///
/// Verifies that inserting a second soldier with an existing NRP fails and leaves
/// exactly one record in the table.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_nrp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Soldier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SoldierRepository::new(db);
    repo.create(create_params("52100001")).await?;

    let result = repo.create(create_params("52100001")).await;

    assert!(result.is_err());
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
