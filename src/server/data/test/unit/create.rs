use super::*;

/// Tests creating a unit with no assigned soldiers.
///
/// Expected: Ok with a personnel count of 0
#[tokio::test]
async fn creates_unit_with_zero_personnel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Unit)
        .with_table(entity::prelude::Soldier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UnitRepository::new(db);
    let unit = repo.create(create_params("Skadron Udara 3", "SKU3")).await?;

    assert!(unit.id > 0);
    assert_eq!(unit.code, "SKU3");
    assert_eq!(unit.personnel_count, 0);
    assert_eq!(unit.location.latitude, -7.6156);

    Ok(())
}

/// Tests that soldiers assigned before the unit existed are counted.
///
/// Expected: Ok with a personnel count matching the pre-existing soldiers
#[tokio::test]
async fn counts_soldiers_assigned_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Unit)
        .with_table(entity::prelude::Soldier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::soldier::create_soldier_in_unit(db, "Skadron Udara 3").await?;
    factory::soldier::create_soldier_in_unit(db, "Skadron Udara 3").await?;

    let repo = UnitRepository::new(db);
    let unit = repo.create(create_params("Skadron Udara 3", "SKU3")).await?;

    assert_eq!(unit.personnel_count, 2);

    Ok(())
}

/// Tests the unit code uniqueness constraint.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Unit)
        .with_table(entity::prelude::Soldier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UnitRepository::new(db);
    repo.create(create_params("Skadron Udara 3", "SKU3")).await?;

    let result = repo.create(create_params("Skadron Udara 14", "SKU3")).await;

    assert!(result.is_err());

    Ok(())
}
