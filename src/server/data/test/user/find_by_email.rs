use super::*;

/// Tests finding a user by email.
///
/// Expected: Ok(Some) for a known address, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .email("siti@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_email("siti@example.com").await?.unwrap();
    assert_eq!(found.id, existing.id);
    assert!(repo.find_by_email("nobody@example.com").await?.is_none());

    Ok(())
}
