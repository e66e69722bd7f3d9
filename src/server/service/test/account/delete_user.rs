use super::*;

/// Tests deleting a registered user.
///
/// Every owned customization, quest and star row goes with the user; other users keep
/// theirs.
///
/// Expected: Ok(true), then Ok(false) for the same id
#[tokio::test]
async fn deletes_user_and_owned_rows() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_catalog(db).await?;

    let mailer = MemoryMailer::new();
    let urls = urls();
    let service = AccountService::new(db, &mailer, &urls);

    let alice = service
        .register(register_param("alice", "a@x.com", "pw"))
        .await?;
    let bob = service
        .register(register_param("bob", "b@x.com", "pw"))
        .await?;
    crate::server::data::star::StarRepository::new(db)
        .create(alice.user.id, 1)
        .await?;

    assert!(service.delete_user(alice.user.id).await?);
    assert!(!service.delete_user(alice.user.id).await?);

    assert_eq!(entity::prelude::User::find().count(db).await?, 1);
    assert_eq!(entity::prelude::UserStar::find().count(db).await?, 0);
    let remaining = entity::prelude::UserCustomization::find().all(db).await?;
    assert_eq!(remaining.len(), 3);
    assert!(remaining.iter().all(|row| row.user_id == bob.user.id));
    let quests = entity::prelude::UserQuest::find().all(db).await?;
    assert!(quests.iter().all(|row| row.user_id == bob.user.id));

    Ok(())
}
