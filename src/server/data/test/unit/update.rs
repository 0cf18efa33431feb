use super::*;

/// Tests that renaming a unit reassigns its soldiers.
///
/// Verifies that every soldier referencing the old name now references the new one,
/// soldiers of other units are untouched, and the personnel count is preserved.
///
/// Expected: Ok(Some) with the new name and unchanged count
#[tokio::test]
async fn rename_propagates_to_soldiers() -> Result<(), DbErr> {
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
    let member = factory::soldier::create_soldier_in_unit(db, "Skadron Udara 3").await?;
    factory::soldier::create_soldier_in_unit(db, "Skadron Udara 3").await?;
    let outsider = factory::soldier::create_soldier_in_unit(db, "Skadron Udara 14").await?;

    let repo = UnitRepository::new(db);
    let updated = repo
        .update(UpdateUnitParams {
            id: unit.id,
            name: Some("Skadron Udara 3 Baru".to_string()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Skadron Udara 3 Baru");
    assert_eq!(updated.personnel_count, 2);

    let soldiers = SoldierRepository::new(db);
    let member = soldiers.find_by_id(member.id).await?.unwrap();
    assert_eq!(member.unit, "Skadron Udara 3 Baru");
    let outsider = soldiers.find_by_id(outsider.id).await?.unwrap();
    assert_eq!(outsider.unit, "Skadron Udara 14");
    assert_eq!(repo.personnel_count("Skadron Udara 3").await?, 0);

    Ok(())
}

/// Tests renaming one of two units that share a name.
///
/// Verifies that soldiers stay with the remaining unit of the old name.
///
/// Expected: Ok(Some) with the new name, soldiers keep the old name
#[tokio::test]
async fn rename_of_shared_name_keeps_soldiers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Unit)
        .with_table(entity::prelude::Soldier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let renamed = factory::unit::UnitFactory::new(db)
        .name("Skadron Teknik 042")
        .build()
        .await?;
    factory::unit::UnitFactory::new(db)
        .name("Skadron Teknik 042")
        .build()
        .await?;
    let member = factory::soldier::create_soldier_in_unit(db, "Skadron Teknik 042").await?;

    let repo = UnitRepository::new(db);
    let updated = repo
        .update(UpdateUnitParams {
            id: renamed.id,
            name: Some("Skadron Teknik 043".to_string()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Skadron Teknik 043");
    assert_eq!(updated.personnel_count, 0);

    let member = SoldierRepository::new(db).find_by_id(member.id).await?.unwrap();
    assert_eq!(member.unit, "Skadron Teknik 042");
    assert_eq!(repo.personnel_count("Skadron Teknik 042").await?, 1);

    Ok(())
}

/// Tests updating fields other than the name.
///
/// Expected: Ok(Some) with the new location and commander, soldiers untouched
#[tokio::test]
async fn updates_location_and_commander() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Unit)
        .with_table(entity::prelude::Soldier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let unit = factory::create_unit(db).await?;

    let repo = UnitRepository::new(db);
    let updated = repo
        .update(UpdateUnitParams {
            id: unit.id,
            location: Some(Location {
                latitude: -7.9,
                longitude: 112.7,
            }),
            commander: Some("Kolonel Pnb Hadi".to_string()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, unit.name);
    assert_eq!(updated.location.latitude, -7.9);
    assert_eq!(updated.location.longitude, 112.7);
    assert_eq!(updated.commander.as_deref(), Some("Kolonel Pnb Hadi"));

    Ok(())
}

/// Tests that a failed update leaves soldiers on the old name.
///
/// Verifies the rename and the code change commit together: a duplicate code aborts
/// the whole update.
///
/// Expected: Err, and soldiers still reference the old name
#[tokio::test]
async fn failed_update_keeps_soldier_assignments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Unit)
        .with_table(entity::prelude::Soldier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let unit = factory::unit::UnitFactory::new(db)
        .name("Skadron Udara 3")
        .code("SKU3")
        .build()
        .await?;
    factory::unit::UnitFactory::new(db).code("SKU14").build().await?;
    factory::soldier::create_soldier_in_unit(db, "Skadron Udara 3").await?;

    let repo = UnitRepository::new(db);
    let result = repo
        .update(UpdateUnitParams {
            id: unit.id,
            name: Some("Skadron Udara 3 Baru".to_string()),
            code: Some("SKU14".to_string()),
            ..Default::default()
        })
        .await;

    assert!(result.is_err());
    assert_eq!(repo.personnel_count("Skadron Udara 3").await?, 1);

    Ok(())
}

/// Tests updating a missing unit.
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
    let result = repo
        .update(UpdateUnitParams {
            id: 404,
            base: Some("Malang".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
