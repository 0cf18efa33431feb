use super::*;

/// Tests selecting soldiers of one corps.
///
/// Verifies that only soldiers of the requested corps are returned, ordered by name.
///
/// Expected: Ok with the two medical soldiers in name order
#[tokio::test]
async fn returns_only_requested_corps() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Soldier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::soldier::SoldierFactory::new(db)
        .name("dr. Sari")
        .corps(Corps::Kesehatan)
        .build()
        .await?;
    factory::soldier::SoldierFactory::new(db)
        .name("dr. Andi")
        .corps(Corps::Kesehatan)
        .build()
        .await?;
    factory::soldier::SoldierFactory::new(db)
        .corps(Corps::Teknik)
        .build()
        .await?;

    let repo = SoldierRepository::new(db);
    let doctors = repo.get_by_corps(Corps::Kesehatan).await?;

    let names: Vec<&str> = doctors.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["dr. Andi", "dr. Sari"]);

    Ok(())
}
