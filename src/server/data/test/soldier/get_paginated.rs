use super::*;

/// Tests pagination metadata over a larger collection.
///
/// Verifies that 25 soldiers with a page size of 10 yield 10 items on the first page,
/// 5 on the last, and a total of 25.
///
/// Expected: Ok((10 items, 25)) then Ok((5 items, 25))
#[tokio::test]
async fn paginates_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Soldier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..25 {
        factory::create_soldier(db).await?;
    }

    let repo = SoldierRepository::new(db);
    let filter = SoldierFilter::default();

    let (first, total) = repo
        .get_paginated(&filter, PageRequest { page: 1, limit: 10 })
        .await?;
    assert_eq!(first.len(), 10);
    assert_eq!(total, 25);

    let (last, total) = repo
        .get_paginated(&filter, PageRequest { page: 3, limit: 10 })
        .await?;
    assert_eq!(last.len(), 5);
    assert_eq!(total, 25);

    Ok(())
}

/// Tests newest-first ordering.
///
/// Verifies that the most recently created soldier is listed first.
///
/// Expected: Ok with descending ids
#[tokio::test]
async fn orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Soldier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let older = factory::create_soldier(db).await?;
    let newer = factory::create_soldier(db).await?;

    let repo = SoldierRepository::new(db);
    let (soldiers, _) = repo
        .get_paginated(&SoldierFilter::default(), PageRequest { page: 1, limit: 10 })
        .await?;

    assert_eq!(soldiers[0].id, newer.id);
    assert_eq!(soldiers[1].id, older.id);

    Ok(())
}

/// Tests the free-text search filter.
///
/// Verifies that search matches a substring of the name regardless of case, and a
/// substring of the NRP.
///
/// Expected: Ok with only the matching soldier
#[tokio::test]
async fn filters_by_search_on_name_and_nrp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Soldier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let budi = factory::soldier::SoldierFactory::new(db)
        .name("Budi Santoso")
        .nrp("52100001")
        .build()
        .await?;
    factory::soldier::SoldierFactory::new(db)
        .name("Agus Wibowo")
        .nrp("52200002")
        .build()
        .await?;

    let repo = SoldierRepository::new(db);
    let page = PageRequest { page: 1, limit: 10 };

    let by_name = SoldierFilter {
        search: Some("budi".to_string()),
        ..Default::default()
    };
    let (soldiers, total) = repo.get_paginated(&by_name, page).await?;
    assert_eq!(total, 1);
    assert_eq!(soldiers[0].id, budi.id);

    let by_nrp = SoldierFilter {
        search: Some("10000".to_string()),
        ..Default::default()
    };
    let (soldiers, total) = repo.get_paginated(&by_nrp, page).await?;
    assert_eq!(total, 1);
    assert_eq!(soldiers[0].id, budi.id);

    Ok(())
}

/// Tests that LIKE wildcards in the search text match literally.
///
/// Verifies that `_` and `%` only find records that contain those characters.
///
/// Expected: Ok with no match for the wildcards, then only the soldier with an underscore
#[tokio::test]
async fn search_treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Soldier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::soldier::SoldierFactory::new(db)
        .name("Budi Santoso")
        .build()
        .await?;
    let underscored = factory::soldier::SoldierFactory::new(db)
        .name("Rudi_Hartono")
        .build()
        .await?;

    let repo = SoldierRepository::new(db);
    let page = PageRequest { page: 1, limit: 10 };
    let search = |text: &str| SoldierFilter {
        search: Some(text.to_string()),
        ..Default::default()
    };

    let (_, total) = repo.get_paginated(&search("%"), page).await?;
    assert_eq!(total, 0);

    let (soldiers, total) = repo.get_paginated(&search("_"), page).await?;
    assert_eq!(total, 1);
    assert_eq!(soldiers[0].id, underscored.id);

    let (soldiers, total) = repo.get_paginated(&search("i_h"), page).await?;
    assert_eq!(total, 1);
    assert_eq!(soldiers[0].id, underscored.id);

    Ok(())
}

/// Tests combining rank and unit filters.
///
/// Verifies that both exact-match filters apply together.
///
/// Expected: Ok with only the soldier matching both
#[tokio::test]
async fn filters_by_rank_and_unit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Soldier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::soldier::SoldierFactory::new(db)
        .rank(Rank::Mayor)
        .unit("Skadron Udara 3")
        .build()
        .await?;
    factory::soldier::SoldierFactory::new(db)
        .rank(Rank::Mayor)
        .unit("Skadron Udara 14")
        .build()
        .await?;
    factory::soldier::SoldierFactory::new(db)
        .rank(Rank::Kapten)
        .unit("Skadron Udara 3")
        .build()
        .await?;

    let repo = SoldierRepository::new(db);
    let filter = SoldierFilter {
        rank: Some(Rank::Mayor),
        unit: Some("Skadron Udara 3".to_string()),
        ..Default::default()
    };
    let (soldiers, total) = repo
        .get_paginated(&filter, PageRequest { page: 1, limit: 10 })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(soldiers[0].id, target.id);

    Ok(())
}

/// Tests requesting a page past the end.
///
/// Expected: Ok with no items and the full total
#[tokio::test]
async fn returns_empty_page_beyond_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Soldier)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_soldier(db).await?;

    let repo = SoldierRepository::new(db);
    let (soldiers, total) = repo
        .get_paginated(&SoldierFilter::default(), PageRequest { page: 5, limit: 10 })
        .await?;

    assert!(soldiers.is_empty());
    assert_eq!(total, 1);

    Ok(())
}
