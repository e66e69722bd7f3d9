use super::*;

/// Tests reading the joined inventory of a user.
///
/// Verifies that owned items come back in catalog order with their equipped flag and
/// that other users' items are not included.
///
/// Expected: Ok with the user's two items
#[tokio::test]
async fn joins_catalog_in_catalog_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_inventory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_customizations(db, &[1, 2, 3]).await?;
    factory::create_user_customization(db, user.id, 3, true).await?;
    factory::create_user_customization(db, user.id, 1, false).await?;
    factory::create_user_customization(db, other.id, 2, true).await?;

    let inventory = UserCustomizationRepository::new(db)
        .get_inventory(user.id)
        .await?;

    assert_eq!(inventory.items.len(), 2);
    assert_eq!(inventory.items[0].customization.id, 1);
    assert!(!inventory.items[0].equipped);
    assert_eq!(inventory.items[1].customization.id, 3);
    assert!(inventory.items[1].equipped);
    assert_eq!(inventory.equipped_ids(), vec![3]);

    Ok(())
}

/// Tests the inventory of a user who owns nothing.
///
/// Expected: Ok with an empty inventory
#[tokio::test]
async fn empty_for_user_without_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_inventory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let inventory = UserCustomizationRepository::new(db)
        .get_inventory(user.id)
        .await?;

    assert!(inventory.items.is_empty());

    Ok(())
}
