use super::*;

/// Tests the latest log is returned.
///
/// Expected: Ok with the log having the greatest timestamp
#[tokio::test]
async fn returns_latest_log() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_access_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::create_uas_telemetry_series(db, user.id, &[at(20), at(40), at(10)]).await?;

    let last = AccessLogRepository::<UasTelemetry>::new(db)
        .last_for_user(user.id, None, None)
        .await?;

    assert_eq!(last.map(|log| log.timestamp), Some(at(40)));

    Ok(())
}

/// Tests the end bound is exclusive when picking the latest log.
///
/// Expected: Ok with the latest log strictly before the end bound
#[tokio::test]
async fn respects_bounds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_access_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::create_uas_telemetry_series(db, user.id, &[at(10), at(20), at(30)]).await?;

    let last = AccessLogRepository::<UasTelemetry>::new(db)
        .last_for_user(user.id, Some(at(0)), Some(at(30)))
        .await?;

    assert_eq!(last.map(|log| log.timestamp), Some(at(20)));

    Ok(())
}

/// Tests no log in range.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_no_logs_in_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_access_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::create_uas_telemetry(db, user.id, at(50)).await?;

    let last = AccessLogRepository::<UasTelemetry>::new(db)
        .last_for_user(user.id, Some(at(0)), Some(at(50)))
        .await?;

    assert_eq!(last, None);

    Ok(())
}
