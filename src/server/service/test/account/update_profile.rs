use super::*;

fn new_password_patch(current: Option<&str>, new: &str) -> UpdateProfileParam {
    UpdateProfileParam {
        current_password: current.map(str::to_string),
        new_password: Some(new.to_string()),
        ..Default::default()
    }
}

/// Tests changing the password with a wrong current password.
///
/// Expected: Err(IncorrectPassword) with the stored hash unchanged
#[tokio::test]
async fn wrong_current_password_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = verified_user(db, "a@x.com", "right").await?;

    let mailer = MemoryMailer::new();
    let urls = urls();
    let result = AccountService::new(db, &mailer, &urls)
        .update_profile(user.id, new_password_patch(Some("wrong"), "x"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AccountErr(AccountError::IncorrectPassword))
    ));
    let db_user = entity::prelude::User::find_by_id(user.id).one(db).await?.unwrap();
    assert_eq!(db_user.password_hash, user.password_hash);

    Ok(())
}

/// Tests changing the password without the current password.
///
/// Expected: Err(IncorrectPassword)
#[tokio::test]
async fn missing_current_password_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = verified_user(db, "a@x.com", "right").await?;

    let mailer = MemoryMailer::new();
    let urls = urls();
    let result = AccountService::new(db, &mailer, &urls)
        .update_profile(user.id, new_password_patch(None, "x"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AccountErr(AccountError::IncorrectPassword))
    ));

    Ok(())
}

/// Tests changing username and password together.
///
/// Expected: Ok with the new password accepted by login
#[tokio::test]
async fn updates_username_and_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_inventory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = verified_user(db, "a@x.com", "right").await?;

    let mailer = MemoryMailer::new();
    let urls = urls();
    let service = AccountService::new(db, &mailer, &urls);

    let mut patch = new_password_patch(Some("right"), "better");
    patch.username = Some("renamed".to_string());
    let updated = service.update_profile(user.id, patch).await?;

    assert_eq!(updated.username, "renamed");
    assert_eq!(updated.email, "a@x.com");
    assert!(service.login(login_param("a@x.com", "better")).await.is_ok());

    Ok(())
}

/// Tests an empty patch.
///
/// Expected: Err(NoDataProvided)
#[tokio::test]
async fn empty_patch_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let mailer = MemoryMailer::new();
    let urls = urls();
    let result = AccountService::new(db, &mailer, &urls)
        .update_profile(user.id, UpdateProfileParam::default())
        .await;

    assert!(matches!(
        result,
        Err(AppError::AccountErr(AccountError::NoDataProvided))
    ));

    Ok(())
}

/// Tests moving to an email owned by another account.
///
/// Expected: Err(EmailAlreadyInUse)
#[tokio::test]
async fn email_of_other_account_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    UserFactory::new(db).email("taken@x.com").build().await?;

    let mailer = MemoryMailer::new();
    let urls = urls();
    let result = AccountService::new(db, &mailer, &urls)
        .update_profile(
            user.id,
            UpdateProfileParam {
                email: Some("taken@x.com".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AccountErr(AccountError::EmailAlreadyInUse))
    ));

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn unknown_user_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mailer = MemoryMailer::new();
    let urls = urls();
    let result = AccountService::new(db, &mailer, &urls)
        .update_profile(
            77,
            UpdateProfileParam {
                username: Some("ghost".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
