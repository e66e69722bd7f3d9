use super::*;

/// Tests changing the status of an assigned quest.
///
/// Expected: Ok(true) with the new status stored
#[tokio::test]
async fn updates_status_of_assigned_quest() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let quests = vec![crate::server::model::quest::Quest::from_entity(
        factory::create_quest(db, 5).await?,
    )];
    let repo = UserQuestRepository::new(db);
    repo.assign(user.id, &quests).await?;

    let updated = repo
        .update_status(UpdateQuestStatusParam {
            user_id: user.id,
            quest_id: 5,
            status: 2,
        })
        .await?;

    assert!(updated);
    assert_eq!(repo.get_for_user(user.id).await?[0].status, 2);

    Ok(())
}

/// Tests changing the status of a quest the user does not have.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_false_for_unassigned_quest() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_quest(db, 5).await?;

    let updated = UserQuestRepository::new(db)
        .update_status(UpdateQuestStatusParam {
            user_id: user.id,
            quest_id: 5,
            status: 1,
        })
        .await?;

    assert!(!updated);

    Ok(())
}
