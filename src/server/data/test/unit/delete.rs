use super::*;

/// Tests that deleting a unit leaves its soldiers in place.
///
/// Expected: Ok(Some) with the pre-deletion count, soldier keeps the unit name
#[tokio::test]
async fn deletes_unit_and_detaches_soldiers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Unit)
        .with_table(entity::prelude::Soldier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let unit = factory::unit::UnitFactory::new(db)
        .name("Skadron Udara 3")
        .build()
        .await?;
    let soldier = factory::soldier::create_soldier_in_unit(db, "Skadron Udara 3").await?;

    let repo = UnitRepository::new(db);
    let deleted = repo.delete(unit.id).await?.unwrap();

    assert_eq!(deleted.personnel_count, 1);
    assert!(repo.find_by_id(unit.id).await?.is_none());

    let soldier = SoldierRepository::new(db)
        .find_by_id(soldier.id)
        .await?
        .unwrap();
    assert_eq!(soldier.unit, "Skadron Udara 3");

    Ok(())
}

/// Tests deleting a missing unit.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_unit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Unit)
        .with_table(entity::prelude::Soldier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UnitRepository::new(db);

    assert!(repo.delete(1).await?.is_none());

    Ok(())
}
