use super::*;

/// Tests awarding a star twice for the same quest.
///
/// Expected: Ok(true) then Ok(false), one star
#[tokio::test]
async fn second_star_for_same_quest_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_quest(db, 1).await?;
    let repo = StarRepository::new(db);

    assert!(repo.create(user.id, 1).await?);
    assert!(!repo.create(user.id, 1).await?);
    assert_eq!(repo.get_for_user(user.id).await?.len(), 1);

    Ok(())
}

/// Tests listing and deleting the stars of one user.
///
/// Expected: Ok with stars in quest order and other users unaffected
#[tokio::test]
async fn lists_and_deletes_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_quests(db, &[1, 2]).await?;
    let repo = StarRepository::new(db);
    repo.create(user.id, 2).await?;
    repo.create(user.id, 1).await?;
    repo.create(other.id, 1).await?;

    let stars = repo.get_for_user(user.id).await?;
    assert_eq!(
        stars.iter().map(|s| s.quest_id).collect::<Vec<_>>(),
        vec![1, 2]
    );
    assert_ne!(stars[0].id, stars[1].id);

    assert_eq!(repo.delete_by_user(user.id).await?, 2);
    assert!(repo.get_for_user(user.id).await?.is_empty());
    assert_eq!(repo.get_for_user(other.id).await?.len(), 1);

    Ok(())
}
