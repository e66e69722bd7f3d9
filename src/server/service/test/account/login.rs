use super::*;

/// Tests logging in with a wrong password.
///
/// Expected: Err(InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_inventory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    verified_user(db, "a@x.com", "right").await?;

    let mailer = MemoryMailer::new();
    let urls = urls();
    let result = AccountService::new(db, &mailer, &urls)
        .login(login_param("a@x.com", "wrong"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AccountErr(AccountError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in with an unknown email.
///
/// Expected: Err(InvalidCredentials), same as a wrong password
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_inventory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mailer = MemoryMailer::new();
    let urls = urls();
    let result = AccountService::new(db, &mailer, &urls)
        .login(login_param("nobody@x.com", "pw"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AccountErr(AccountError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests that an unverified account with a wrong password reports bad credentials.
///
/// The verification state is only revealed once the password matched.
///
/// Expected: Err(InvalidCredentials)
#[tokio::test]
async fn wrong_password_on_unverified_account_is_invalid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_inventory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    UserFactory::new(db)
        .email("u@x.com")
        .password_hash(credential::hash_password("right")?)
        .build()
        .await?;

    let mailer = MemoryMailer::new();
    let urls = urls();
    let result = AccountService::new(db, &mailer, &urls)
        .login(login_param("u@x.com", "wrong"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AccountErr(AccountError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests a successful login.
///
/// Expected: Ok with the user's inventory
#[tokio::test]
async fn returns_profile_with_inventory() -> Result<(), AppError> {
    let test = TestBuilder::new().with_inventory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = verified_user(db, "a@x.com", "pw").await?;
    factory::create_customizations(db, &[1, 2]).await?;
    factory::create_user_customization(db, user.id, 1, true).await?;
    factory::create_user_customization(db, user.id, 2, false).await?;

    let mailer = MemoryMailer::new();
    let urls = urls();
    let profile = AccountService::new(db, &mailer, &urls)
        .login(login_param("a@x.com", "pw"))
        .await?;

    assert_eq!(profile.user.id, user.id);
    assert_eq!(profile.inventory.items.len(), 2);
    assert_eq!(profile.inventory.equipped_ids(), vec![1]);

    Ok(())
}
