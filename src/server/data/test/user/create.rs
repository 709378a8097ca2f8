use super::*;

/// Tests creating a user.
///
/// Expected: Ok with the user stored under the given username
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_access_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = UserRepository::new(db);

    let user = repo
        .create(CreateUserParam {
            username: "team_alpha".to_string(),
        })
        .await?;

    assert_eq!(user.username, "team_alpha");
    let stored = repo.find_by_id(user.id).await?;
    assert_eq!(stored, Some(user));

    Ok(())
}

/// Tests usernames are unique.
///
/// Expected: Err on the second insert with the same username
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_access_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = UserRepository::new(db);

    repo.create(CreateUserParam {
        username: "team_alpha".to_string(),
    })
    .await?;
    let result = repo
        .create(CreateUserParam {
            username: "team_alpha".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
