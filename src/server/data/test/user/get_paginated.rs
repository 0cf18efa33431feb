use super::*;

/// Tests the role filter.
///
/// Expected: Ok with only admins
#[tokio::test]
async fn filters_by_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .role(Role::Admin)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .role(Role::User)
        .build()
        .await?;
    factory::user::create_super_admin(db).await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo
        .get_paginated(
            &UserFilter {
                role: Some(Role::Admin),
                ..Default::default()
            },
            PageRequest { page: 1, limit: 10 },
        )
        .await?;

    assert_eq!(total, 1);
    assert!(users.iter().all(|u| u.role == Role::Admin));

    Ok(())
}

/// Tests searching by name or email.
///
/// Expected: Ok with the user whose email contains the term
#[tokio::test]
async fn searches_name_and_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::user::UserFactory::new(db)
        .name("Operator Pusat")
        .email("pusat@tni-au.example")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .name("Siti Rahma")
        .email("siti@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let page = PageRequest { page: 1, limit: 10 };

    let (users, _) = repo
        .get_paginated(
            &UserFilter {
                search: Some("TNI-AU".to_string()),
                ..Default::default()
            },
            page,
        )
        .await?;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, target.id);

    let (users, _) = repo
        .get_paginated(
            &UserFilter {
                search: Some("pusat".to_string()),
                ..Default::default()
            },
            page,
        )
        .await?;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, target.id);

    Ok(())
}

/// Tests page size handling.
///
/// Expected: Ok with 2 of 3 users on the first page
#[tokio::test]
async fn limits_page_size() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_user(db).await?;
    }

    let repo = UserRepository::new(db);
    let (users, total) = repo
        .get_paginated(&UserFilter::default(), PageRequest { page: 1, limit: 2 })
        .await?;

    assert_eq!(users.len(), 2);
    assert_eq!(total, 3);

    Ok(())
}
