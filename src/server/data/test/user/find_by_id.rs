use super::*;

/// Tests finding an existing user.
///
/// Expected: Ok(Some) with matching id and username
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_access_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let created = factory::create_user(db).await?;

    let user = UserRepository::new(db).find_by_id(created.id).await?;

    let user = user.unwrap();
    assert_eq!(user.id, created.id);
    assert_eq!(user.username, created.username);

    Ok(())
}

/// Tests an unknown id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_access_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db).find_by_id(999).await?;

    assert_eq!(user, None);

    Ok(())
}
