use super::*;

/// Tests consuming a verification token.
///
/// Verifies that the user becomes verified and the token is cleared.
///
/// Expected: Ok(true)
#[tokio::test]
async fn verifies_user_and_clears_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).verification_token("abc").build().await?;

    let verified = UserRepository::new(db).mark_verified("abc").await?;

    assert!(verified);
    let db_user = entity::prelude::User::find_by_id(user.id).one(db).await?.unwrap();
    assert!(db_user.is_verified);
    assert!(db_user.verification_token.is_none());

    Ok(())
}

/// Tests consuming the same token twice.
///
/// The second attempt finds no user holding the token and leaves the user verified.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn second_use_of_token_returns_false() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).verification_token("once").build().await?;
    let repo = UserRepository::new(db);

    assert!(repo.mark_verified("once").await?);
    assert!(!repo.mark_verified("once").await?);

    let db_user = entity::prelude::User::find_by_id(user.id).one(db).await?.unwrap();
    assert!(db_user.is_verified);

    Ok(())
}

/// Tests that an unknown token changes nothing.
///
/// Expected: Ok(false)
#[tokio::test]
async fn unknown_token_returns_false() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).verification_token("real").build().await?;

    assert!(!UserRepository::new(db).mark_verified("fake").await?);

    let db_user = entity::prelude::User::find_by_id(user.id).one(db).await?.unwrap();
    assert!(!db_user.is_verified);
    assert_eq!(db_user.verification_token.as_deref(), Some("real"));

    Ok(())
}
