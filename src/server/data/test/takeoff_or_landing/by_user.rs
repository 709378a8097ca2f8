use super::*;

/// Tests events come back in timestamp order for the requested user only.
///
/// Expected: Ok with the user's events sorted ascending
#[tokio::test]
async fn returns_user_events_sorted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_access_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_takeoff_or_landing(db, user.id, at(100), false).await?;
    factory::create_takeoff_or_landing(db, user.id, at(0), true).await?;
    factory::create_flight(db, other.id, at(10), at(20)).await?;

    let events = TakeoffOrLandingRepository::new(db).by_user(user.id).await?;

    let seen: Vec<_> = events
        .iter()
        .map(|event| (event.timestamp, event.uas_in_air))
        .collect();
    assert_eq!(seen, vec![(at(0), true), (at(100), false)]);

    Ok(())
}
