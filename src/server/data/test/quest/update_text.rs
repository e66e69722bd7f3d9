use super::*;

/// Tests overwriting the user's copy of the quest texts.
///
/// The catalog keeps its original text.
///
/// Expected: Ok(true)
#[tokio::test]
async fn updates_user_copy_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_quest(db, 1).await?;
    let quests = QuestRepository::new(db).get_all().await?;
    let repo = UserQuestRepository::new(db);
    repo.assign(user.id, &quests).await?;

    let updated = repo
        .update_text(
            user.id,
            1,
            QuestTextParam {
                description: "My notes".to_string(),
                log_text: "Day one".to_string(),
            },
        )
        .await?;

    assert!(updated);
    let user_quest = &repo.get_for_user(user.id).await?[0];
    assert_eq!(user_quest.user_description, "My notes");
    assert_eq!(user_quest.user_log_text, "Day one");
    assert_eq!(user_quest.quest.description, "Description 1");

    Ok(())
}

/// Tests editing the catalog text of a quest.
///
/// Copies already assigned to users keep their text.
///
/// Expected: Ok(Some) with the new catalog text
#[tokio::test]
async fn updates_catalog_without_touching_user_copies() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_quest(db, 1).await?;
    let quest_repo = QuestRepository::new(db);
    let user_quest_repo = UserQuestRepository::new(db);
    user_quest_repo
        .assign(user.id, &quest_repo.get_all().await?)
        .await?;

    let quest = quest_repo
        .update_text(
            1,
            QuestTextParam {
                description: "New description".to_string(),
                log_text: "New log".to_string(),
            },
        )
        .await?
        .unwrap();

    assert_eq!(quest.description, "New description");
    let user_quest = &user_quest_repo.get_for_user(user.id).await?[0];
    assert_eq!(user_quest.quest.description, "New description");
    assert_eq!(user_quest.user_description, "Description 1");

    Ok(())
}

/// Tests editing a quest that is not in the catalog.
///
/// Expected: Ok(None)
#[tokio::test]
async fn catalog_update_returns_none_for_unknown_quest() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = QuestRepository::new(db)
        .update_text(
            404,
            QuestTextParam {
                description: String::new(),
                log_text: String::new(),
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
