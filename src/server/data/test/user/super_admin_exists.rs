use super::*;

/// Tests detecting an existing super admin.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_super_admin_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_super_admin(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.super_admin_exists().await?);

    Ok(())
}

/// Tests that admins and regular users do not count as super admins.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_with_only_lower_roles() -> Result<(), DbErr> {
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

    let repo = UserRepository::new(db);

    assert!(!repo.super_admin_exists().await?);

    Ok(())
}
