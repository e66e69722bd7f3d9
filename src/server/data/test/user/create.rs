use super::*;

/// Tests creating a user from registration data.
///
/// Verifies that the new user is unverified and holds the verification token.
///
/// Expected: Ok with unverified user
#[tokio::test]
async fn creates_unverified_user_with_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hash".to_string(),
            verification_token: "token123".to_string(),
        })
        .await?;

    assert_eq!(user.username, "alice");
    assert!(!user.is_verified);
    assert_eq!(user.verification_token.as_deref(), Some("token123"));
    assert!(user.reset_token.is_none());

    let found = repo.find_by_email("alice@example.com").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests the unique constraint on email.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).email("taken@example.com").build().await?;

    let result = UserRepository::new(db)
        .create(CreateUserParam {
            username: "bob".to_string(),
            email: "taken@example.com".to_string(),
            password_hash: "hash".to_string(),
            verification_token: "token".to_string(),
        })
        .await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests looking up a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_id(999).await?.is_none());
    assert!(repo.find_by_email("nobody@example.com").await?.is_none());

    Ok(())
}
