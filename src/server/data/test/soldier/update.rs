use chrono::NaiveDate;
use entity::sea_orm_active_enums::BloodType;

use super::*;

/// Tests a partial update.
///
/// Verifies that only the provided fields change and that `updated_at` is refreshed.
///
/// Expected: Ok(Some) with the new rank and the original name
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Soldier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_soldier(db).await?;

    let repo = SoldierRepository::new(db);
    let updated = repo
        .update(UpdateSoldierParams {
            id: existing.id,
            rank: Some(Rank::Mayor),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.rank, Rank::Mayor);
    assert_eq!(updated.name, existing.name);
    assert_eq!(updated.nrp, existing.nrp);
    assert!(updated.updated_at >= existing.updated_at);

    Ok(())
}

/// Tests clearing the specialization with an empty string.
///
/// Expected: Ok(Some) with no specialization
#[tokio::test]
async fn clears_specialization() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Soldier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::soldier::SoldierFactory::new(db)
        .specialization("Bedah")
        .build()
        .await?;

    let repo = SoldierRepository::new(db);
    let updated = repo
        .update(UpdateSoldierParams {
            id: existing.id,
            specialization: Some(String::new()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.specialization, None);

    Ok(())
}

/// Tests clearing the checkup date and blood type.
///
/// Verifies that an explicit clear removes the stored values while other fields stay put.
///
/// Expected: Ok(Some) with neither a checkup date nor a blood type
#[tokio::test]
async fn clears_checkup_and_blood_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Soldier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::soldier::SoldierFactory::new(db)
        .last_checkup(NaiveDate::from_ymd_opt(2024, 2, 20).unwrap())
        .blood_type(BloodType::APositive)
        .build()
        .await?;

    let repo = SoldierRepository::new(db);
    let updated = repo
        .update(UpdateSoldierParams {
            id: existing.id,
            last_checkup: Some(None),
            blood_type: Some(None),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.last_checkup, None);
    assert_eq!(updated.blood_type, None);
    assert_eq!(updated.name, existing.name);

    Ok(())
}

/// Tests updating a missing soldier.
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
    let result = repo
        .update(UpdateSoldierParams {
            id: 404,
            name: Some("Nobody".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
