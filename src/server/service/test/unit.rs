use entity::sea_orm_active_enums::{ActivityAction, Corps, Rank, UnitType};
use test_utils::{builder::TestBuilder, factory};

use super::{actor, audit_trail};
use crate::server::{
    error::AppError,
    model::{
        soldier::UpdateSoldierParams,
        unit::{CreateUnitParams, Location, UnitFilter, UpdateUnitParams},
    },
    service::{soldier::SoldierService, unit::UnitService},
};

fn params(name: &str, code: &str) -> CreateUnitParams {
    CreateUnitParams {
        name: name.to_string(),
        code: code.to_string(),
        unit_type: UnitType::SkadronUdara,
        base: "Iswahjudi".to_string(),
        location: Location {
            latitude: -7.6156,
            longitude: 111.4337,
        },
        commander: Some("Letkol Pnb Arief".to_string()),
    }
}

/// Tests that a duplicate unit code is rejected.
///
/// Expected: Err(AppError::Conflict("Unit code already exists"))
#[tokio::test]
async fn duplicate_code_yields_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let operator = factory::create_user(db).await?;

    let service = UnitService::new(db);
    service
        .create(&actor(&operator), params("Skadron Udara 3", "SKU3"))
        .await?;

    let result = service
        .create(&actor(&operator), params("Skadron Udara 3 Cadangan", "SKU3"))
        .await;

    assert!(
        matches!(result, Err(AppError::Conflict(ref msg)) if msg == "Unit code already exists")
    );
    assert_eq!(audit_trail(db).await?.len(), 1);

    Ok(())
}

/// Tests that personnel counts follow soldier changes on the next read.
///
/// Verifies the count after creating soldiers, moving one away and deleting another.
///
/// Expected: counts 2, then 1, then 0
#[tokio::test]
async fn personnel_count_matches_live_soldiers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let operator = factory::create_user(db).await?;
    let actor = actor(&operator);

    let units = UnitService::new(db);
    let soldiers = SoldierService::new(db);

    let unit = units
        .create(&actor, params("Skadron Udara 3", "SKU3"))
        .await?;
    let first = factory::soldier::create_soldier_in_unit(db, "Skadron Udara 3").await?;
    let second = factory::soldier::create_soldier_in_unit(db, "Skadron Udara 3").await?;

    assert_eq!(units.get_by_id(unit.id).await?.personnel_count, 2);

    soldiers
        .update(
            &actor,
            UpdateSoldierParams {
                id: first.id,
                unit: Some("Skadron Udara 14".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(units.get_by_id(unit.id).await?.personnel_count, 1);

    soldiers.delete(&actor, second.id).await?;
    let listed = units.get_all(&UnitFilter::default()).await?;
    assert_eq!(listed[0].personnel_count, 0);

    Ok(())
}

/// Tests that a rename moves soldiers to the new name and is audited once.
///
/// Expected: count preserved under the new name, one `update` entry
#[tokio::test]
async fn rename_keeps_personnel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let operator = factory::create_user(db).await?;

    let unit = factory::unit::UnitFactory::new(db)
        .name("Skadron Udara 3")
        .build()
        .await?;
    factory::soldier::create_soldier_in_unit(db, "Skadron Udara 3").await?;

    let updated = UnitService::new(db)
        .update(
            &actor(&operator),
            UpdateUnitParams {
                id: unit.id,
                name: Some("Skadron Udara 3 Baru".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.personnel_count, 1);

    let trail = audit_trail(db).await?;
    assert_eq!(trail.len(), 1);
    assert_eq!(trail[0].action, ActivityAction::Update);
    assert_eq!(
        trail[0].details.as_deref(),
        Some("Updated unit: Skadron Udara 3 Baru")
    );

    Ok(())
}

/// Tests that deleting a unit is audited and leaves its soldiers in place.
///
/// Expected: one `delete` entry, soldier still present
#[tokio::test]
async fn delete_detaches_soldiers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let operator = factory::create_user(db).await?;

    let unit = factory::unit::UnitFactory::new(db)
        .name("Skadron Udara 3")
        .build()
        .await?;
    let soldier = factory::soldier::create_soldier_in_unit(db, "Skadron Udara 3").await?;

    UnitService::new(db).delete(&actor(&operator), unit.id).await?;

    let soldier = SoldierService::new(db).get_by_id(soldier.id).await?;
    assert_eq!(soldier.unit, "Skadron Udara 3");

    let trail = audit_trail(db).await?;
    assert_eq!(trail.len(), 1);
    assert_eq!(trail[0].action, ActivityAction::Delete);

    Ok(())
}

/// Tests the unit map.
///
/// Verifies that only medical-corps soldiers of each unit are listed as doctors.
///
/// Expected: one doctor for the hospital, none for the squadron
#[tokio::test]
async fn locations_list_medical_staff_per_unit() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hospital = factory::unit::UnitFactory::new(db)
        .name("Rumkit Lanud Halim")
        .unit_type(UnitType::Rumkit)
        .build()
        .await?;
    let squadron = factory::unit::UnitFactory::new(db)
        .name("Skadron Udara 3")
        .build()
        .await?;
    factory::soldier::SoldierFactory::new(db)
        .name("dr. Sari")
        .rank(Rank::Mayor)
        .corps(Corps::Kesehatan)
        .specialization("Penyakit Dalam")
        .unit("Rumkit Lanud Halim")
        .build()
        .await?;
    factory::soldier::SoldierFactory::new(db)
        .corps(Corps::Teknik)
        .unit("Rumkit Lanud Halim")
        .build()
        .await?;
    factory::soldier::create_soldier_in_unit(db, "Skadron Udara 3").await?;

    let locations = UnitService::new(db).locations().await?;

    let hospital = locations
        .iter()
        .find(|l| l.unit.id == hospital.id)
        .unwrap();
    assert_eq!(hospital.unit.personnel_count, 2);
    assert_eq!(hospital.doctors.len(), 1);
    assert_eq!(hospital.doctors[0].name, "dr. Sari");
    assert_eq!(hospital.doctors[0].rank, Rank::Mayor);
    assert_eq!(
        hospital.doctors[0].specialization.as_deref(),
        Some("Penyakit Dalam")
    );

    let squadron = locations
        .iter()
        .find(|l| l.unit.id == squadron.id)
        .unwrap();
    assert_eq!(squadron.unit.personnel_count, 1);
    assert!(squadron.doctors.is_empty());

    Ok(())
}
