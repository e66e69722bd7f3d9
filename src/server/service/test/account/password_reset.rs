use super::*;

/// Tests requesting a reset for known and unknown emails.
///
/// Only the known email gets a token and a message; both calls succeed.
///
/// Expected: Ok(true) for the known email, Ok(false) for the unknown one
#[tokio::test]
async fn issues_token_only_for_known_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = verified_user(db, "a@x.com", "pw").await?;

    let mailer = MemoryMailer::new();
    let urls = urls();
    let service = AccountService::new(db, &mailer, &urls);

    assert!(!service.forgot_password("nobody@x.com").await?);
    assert!(mailer.sent().is_empty());

    assert!(service.forgot_password("A@X.com").await?);
    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0]
        .html
        .contains("https://play.example.com/reset-password?token="));

    let db_user = entity::prelude::User::find_by_id(user.id).one(db).await?.unwrap();
    assert_eq!(db_user.reset_token, mailer.last_token());
    assert!(db_user.reset_token_expires.unwrap() > Utc::now());

    Ok(())
}

/// Tests that a mail failure is not reported to the caller.
///
/// Expected: Ok(false)
#[tokio::test]
async fn mail_failure_is_swallowed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    verified_user(db, "a@x.com", "pw").await?;

    let mailer = MemoryMailer::failing();
    let urls = urls();

    let issued = AccountService::new(db, &mailer, &urls)
        .forgot_password("a@x.com")
        .await?;

    assert!(!issued);

    Ok(())
}

/// Tests resetting the password with the emailed token.
///
/// The new password works, the old one does not and the token cannot be reused.
///
/// Expected: Ok, then Err(InvalidOrExpiredToken) on reuse
#[tokio::test]
async fn resets_password_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_inventory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    verified_user(db, "a@x.com", "old").await?;

    let mailer = MemoryMailer::new();
    let urls = urls();
    let service = AccountService::new(db, &mailer, &urls);

    service.forgot_password("a@x.com").await?;
    let token = mailer.last_token().unwrap();

    service
        .reset_password(ResetPasswordParam {
            token: token.clone(),
            new_password: "new".to_string(),
        })
        .await?;

    assert!(service.login(login_param("a@x.com", "new")).await.is_ok());
    assert!(service.login(login_param("a@x.com", "old")).await.is_err());

    let reuse = service
        .reset_password(ResetPasswordParam {
            token,
            new_password: "again".to_string(),
        })
        .await;
    assert!(matches!(
        reuse,
        Err(AppError::AccountErr(AccountError::InvalidOrExpiredToken))
    ));

    Ok(())
}

/// Tests an expired reset token whose string still matches.
///
/// Expected: Err(InvalidOrExpiredToken) with the password unchanged
#[tokio::test]
async fn rejects_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = UserFactory::new(db)
        .password_hash("stored")
        .reset_token("expired", Utc::now() - Duration::minutes(1))
        .build()
        .await?;

    let mailer = MemoryMailer::new();
    let urls = urls();
    let result = AccountService::new(db, &mailer, &urls)
        .reset_password(ResetPasswordParam {
            token: "expired".to_string(),
            new_password: "new".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AccountErr(AccountError::InvalidOrExpiredToken))
    ));
    let db_user = entity::prelude::User::find_by_id(user.id).one(db).await?.unwrap();
    assert_eq!(db_user.password_hash, "stored");

    Ok(())
}

/// Tests an unknown reset token.
///
/// Expected: Err(InvalidOrExpiredToken)
#[tokio::test]
async fn rejects_unknown_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mailer = MemoryMailer::new();
    let urls = urls();
    let result = AccountService::new(db, &mailer, &urls)
        .reset_password(ResetPasswordParam {
            token: "nope".to_string(),
            new_password: "new".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AccountErr(AccountError::InvalidOrExpiredToken))
    ));

    Ok(())
}
