use super::*;

/// Tests clearing every equipped flag of a user.
///
/// Expected: Ok with the other user's equipped item untouched
#[tokio::test]
async fn unequip_all_is_scoped_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_inventory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_customizations(db, &[1, 2]).await?;
    factory::create_user_customization(db, user.id, 1, true).await?;
    factory::create_user_customization(db, user.id, 2, true).await?;
    factory::create_user_customization(db, other.id, 1, true).await?;

    let repo = UserCustomizationRepository::new(db);
    repo.unequip_all(user.id).await?;

    assert!(repo.get_inventory(user.id).await?.equipped_ids().is_empty());
    assert_eq!(repo.get_inventory(other.id).await?.equipped_ids(), vec![1]);

    Ok(())
}

/// Tests equipping a list containing ids the user does not own.
///
/// Only owned items are flagged; foreign ids are ignored.
///
/// Expected: Ok(1)
#[tokio::test]
async fn equip_ignores_items_not_owned() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_inventory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_customizations(db, &[1, 2]).await?;
    factory::create_user_customization(db, user.id, 1, false).await?;
    factory::create_user_customization(db, other.id, 2, false).await?;

    let repo = UserCustomizationRepository::new(db);
    let equipped = repo.equip(user.id, &[1, 2, 99]).await?;

    assert_eq!(equipped, 1);
    assert_eq!(repo.get_inventory(user.id).await?.equipped_ids(), vec![1]);
    assert!(repo.get_inventory(other.id).await?.equipped_ids().is_empty());

    Ok(())
}

/// Tests equipping an empty list.
///
/// Expected: Ok(0) without touching any row
#[tokio::test]
async fn equip_empty_list_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_inventory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_customization(db, 1).await?;
    factory::create_user_customization(db, user.id, 1, true).await?;

    let repo = UserCustomizationRepository::new(db);

    assert_eq!(repo.equip(user.id, &[]).await?, 0);
    assert_eq!(repo.get_inventory(user.id).await?.equipped_ids(), vec![1]);

    Ok(())
}
