use super::*;

/// Tests assigning the catalog to a user.
///
/// Verifies one row per quest with status 0 and copies of the catalog texts.
///
/// Expected: Ok(2) with both quests listed in id order
#[tokio::test]
async fn assigns_catalog_with_copied_texts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    QuestFactory::new(db, 2)
        .description("Find the sword")
        .log_text("Started")
        .build()
        .await?;
    factory::create_quest(db, 1).await?;

    let quests = QuestRepository::new(db).get_all().await?;
    let repo = UserQuestRepository::new(db);
    let assigned = repo.assign(user.id, &quests).await?;

    assert_eq!(assigned, 2);
    let user_quests = repo.get_for_user(user.id).await?;
    assert_eq!(user_quests.len(), 2);
    assert_eq!(user_quests[0].quest.id, 1);
    assert_eq!(user_quests[1].quest.id, 2);
    assert!(user_quests.iter().all(|q| q.status == 0));
    assert_eq!(user_quests[1].user_description, "Find the sword");
    assert_eq!(user_quests[1].user_log_text, "Started");

    Ok(())
}

/// Tests assigning the catalog twice.
///
/// Existing rows are kept and no duplicates are created.
///
/// Expected: Ok(0) on the second call
#[tokio::test]
async fn second_assignment_adds_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_quests(db, &[1, 2, 3]).await?;

    let quests = QuestRepository::new(db).get_all().await?;
    let repo = UserQuestRepository::new(db);

    assert_eq!(repo.assign(user.id, &quests).await?, 3);
    assert_eq!(repo.assign(user.id, &quests).await?, 0);
    assert_eq!(repo.get_for_user(user.id).await?.len(), 3);

    Ok(())
}
