use super::*;

/// Tests toggling the active flag.
///
/// Expected: Ok(Some) with the flag flipped and other fields unchanged
#[tokio::test]
async fn updates_active_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(UpdateUserParams {
            id: existing.id,
            active: Some(false),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert!(!updated.active);
    assert_eq!(updated.email, existing.email);
    assert_eq!(updated.password_hash, existing.password_hash);

    Ok(())
}

/// Tests replacing the password hash.
///
/// Expected: Ok(Some) with the new hash stored
#[tokio::test]
async fn replaces_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;
    let new_hash = factory::helpers::hash_password("baru123");

    let repo = UserRepository::new(db);
    let updated = repo
        .update(UpdateUserParams {
            id: existing.id,
            password_hash: Some(new_hash.clone()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.password_hash, new_hash);

    Ok(())
}

/// Tests deleting a user.
///
/// Expected: Ok(Some) then the user is gone
#[tokio::test]
async fn deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.delete(existing.id).await?.is_some());
    assert!(repo.find_by_id(existing.id).await?.is_none());
    assert!(repo.delete(existing.id).await?.is_none());

    Ok(())
}
