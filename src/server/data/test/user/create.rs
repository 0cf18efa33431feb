use super::*;

/// Tests creating a user.
///
/// Expected: Ok with the stored role and active flag
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(create_params("siti@example.com")).await?;

    assert!(user.id > 0);
    assert_eq!(user.role, Role::Admin);
    assert!(user.active);
    assert!(user.password_hash.starts_with("$argon2"));

    Ok(())
}

/// Tests the email uniqueness constraint.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_params("siti@example.com")).await?;

    let result = repo.create(create_params("siti@example.com")).await;

    assert!(result.is_err());

    Ok(())
}
