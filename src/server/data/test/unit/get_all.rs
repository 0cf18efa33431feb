use super::*;

/// Tests that each listed unit carries its own live personnel count.
///
/// Verifies the grouped count query against a mix of assigned and unassigned soldiers.
///
/// Expected: Ok with counts 3 and 0, newest unit first
#[tokio::test]
async fn lists_units_with_personnel_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Unit)
        .with_table(entity::prelude::Soldier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let staffed = factory::unit::UnitFactory::new(db)
        .name("Skadron Udara 3")
        .build()
        .await?;
    let empty = factory::unit::UnitFactory::new(db)
        .name("Skadron Udara 14")
        .build()
        .await?;
    for _ in 0..3 {
        factory::soldier::create_soldier_in_unit(db, "Skadron Udara 3").await?;
    }
    factory::soldier::create_soldier_in_unit(db, "Unassigned").await?;

    let repo = UnitRepository::new(db);
    let units = repo.get_all(&UnitFilter::default()).await?;

    assert_eq!(units.len(), 2);
    assert_eq!(units[0].id, empty.id);
    assert_eq!(units[0].personnel_count, 0);
    assert_eq!(units[1].id, staffed.id);
    assert_eq!(units[1].personnel_count, 3);

    Ok(())
}

/// Tests the type and base filters.
///
/// Expected: Ok with only the unit matching both
#[tokio::test]
async fn filters_by_type_and_base() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Unit)
        .with_table(entity::prelude::Soldier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::unit::UnitFactory::new(db)
        .unit_type(UnitType::Rumkit)
        .base("Malang")
        .build()
        .await?;
    factory::unit::UnitFactory::new(db)
        .unit_type(UnitType::Rumkit)
        .base("Jakarta")
        .build()
        .await?;
    factory::unit::UnitFactory::new(db)
        .unit_type(UnitType::Lanud)
        .base("Malang")
        .build()
        .await?;

    let repo = UnitRepository::new(db);
    let units = repo
        .get_all(&UnitFilter {
            unit_type: Some(UnitType::Rumkit),
            base: Some("Malang".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(units.len(), 1);
    assert_eq!(units[0].id, target.id);

    Ok(())
}

/// Tests searching by unit code.
///
/// Expected: Ok with only the unit whose code contains the term
#[tokio::test]
async fn searches_name_and_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Unit)
        .with_table(entity::prelude::Soldier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::unit::UnitFactory::new(db)
        .name("Lanud Iswahjudi")
        .code("LIW")
        .build()
        .await?;
    factory::unit::UnitFactory::new(db)
        .name("Lanud Halim Perdanakusuma")
        .code("LHP")
        .build()
        .await?;

    let repo = UnitRepository::new(db);
    let units = repo
        .get_all(&UnitFilter {
            search: Some("liw".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(units.len(), 1);
    assert_eq!(units[0].id, target.id);

    Ok(())
}
