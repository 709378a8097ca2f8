use super::*;
use test_utils::factory::user::UserFactory;

/// Tests users are listed by username.
///
/// Expected: Ok with every user in alphabetical order
#[tokio::test]
async fn returns_users_sorted_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_access_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    UserFactory::new(db).username("charlie").build().await?;
    UserFactory::new(db).username("alpha").build().await?;
    UserFactory::new(db).username("bravo").build().await?;

    let users = UserRepository::new(db).get_all().await?;

    let names: Vec<_> = users.iter().map(|user| user.username.as_str()).collect();
    assert_eq!(names, vec!["alpha", "bravo", "charlie"]);

    Ok(())
}

/// Tests an empty user table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_access_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let users = UserRepository::new(db).get_all().await?;

    assert!(users.is_empty());

    Ok(())
}
