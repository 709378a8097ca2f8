use super::*;

/// Tests recording a takeoff and a landing.
///
/// Expected: Ok with the in-air flag and timestamp stored as given
#[tokio::test]
async fn records_takeoff_and_landing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_access_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let repo = TakeoffOrLandingRepository::new(db);

    let takeoff = repo.create(user.id, at(0), true).await?;
    let landing = repo.create(user.id, at(60), false).await?;

    assert!(takeoff.uas_in_air);
    assert_eq!(takeoff.timestamp, at(0));
    assert!(!landing.uas_in_air);
    assert_eq!(landing.user_id, user.id);

    Ok(())
}
