use super::*;

/// Tests fetching catalog items by id.
///
/// Verifies that unknown ids are skipped and results come back in id order.
///
/// Expected: Ok with the existing items only
#[tokio::test]
async fn returns_existing_items_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_inventory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_customizations(db, &[3, 1, 2]).await?;

    let items = CustomizationRepository::new(db)
        .get_by_ids(&[2, 99, 1])
        .await?;

    assert_eq!(items.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2]);

    Ok(())
}

/// Tests an empty id list.
///
/// Expected: Ok with no items
#[tokio::test]
async fn empty_ids_return_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_inventory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_customization(db, 1).await?;

    let items = CustomizationRepository::new(db).get_by_ids(&[]).await?;

    assert!(items.is_empty());

    Ok(())
}
