use super::*;

/// Tests logs are returned in ascending timestamp order.
///
/// Verifies that logs inserted out of order come back sorted by timestamp.
///
/// Expected: Ok with logs sorted ascending
#[tokio::test]
async fn returns_logs_sorted_by_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_access_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::create_uas_telemetry_series(db, user.id, &[at(30), at(10), at(20)]).await?;

    let logs = AccessLogRepository::<UasTelemetry>::new(db)
        .by_user(user.id, None, None)
        .await?;

    let timestamps: Vec<_> = logs.iter().map(|log| log.timestamp).collect();
    assert_eq!(timestamps, vec![at(10), at(20), at(30)]);
    assert!(logs.iter().all(|log| log.user_id == user.id));

    Ok(())
}

/// Tests start bound is inclusive and end bound is exclusive.
///
/// Expected: Ok with logs in `[start, end)` only
#[tokio::test]
async fn applies_half_open_bounds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_access_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::create_uas_telemetry_series(db, user.id, &[at(0), at(10), at(20), at(30)]).await?;

    let logs = AccessLogRepository::<UasTelemetry>::new(db)
        .by_user(user.id, Some(at(10)), Some(at(30)))
        .await?;

    let timestamps: Vec<_> = logs.iter().map(|log| log.timestamp).collect();
    assert_eq!(timestamps, vec![at(10), at(20)]);

    Ok(())
}

/// Tests each bound can be given on its own.
///
/// Expected: Ok with only the lower or only the upper bound applied
#[tokio::test]
async fn applies_single_bounds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_access_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::create_uas_telemetry_series(db, user.id, &[at(0), at(10), at(20)]).await?;
    let repo = AccessLogRepository::<UasTelemetry>::new(db);

    let from = repo.by_user(user.id, Some(at(10)), None).await?;
    let until = repo.by_user(user.id, None, Some(at(10))).await?;

    assert_eq!(from.len(), 2);
    assert_eq!(from[0].timestamp, at(10));
    assert_eq!(until.len(), 1);
    assert_eq!(until[0].timestamp, at(0));

    Ok(())
}

/// Tests logs of other users are excluded.
///
/// Expected: Ok with only the requested user's logs
#[tokio::test]
async fn excludes_other_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_access_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_uas_telemetry(db, user.id, at(5)).await?;
    factory::create_uas_telemetry_series(db, other.id, &[at(1), at(6)]).await?;

    let logs = AccessLogRepository::<UasTelemetry>::new(db)
        .by_user(user.id, None, None)
        .await?;

    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].timestamp, at(5));

    Ok(())
}

/// Tests each access-log table is queried independently.
///
/// Verifies that telemetry and server info logs for the same user do not mix.
///
/// Expected: Ok with only rows from the queried table
#[tokio::test]
async fn queries_only_its_own_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_access_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::create_uas_telemetry(db, user.id, at(1)).await?;
    factory::create_server_info_access_log(db, user.id, at(2)).await?;
    factory::create_server_info_access_log(db, user.id, at(3)).await?;

    let telemetry = AccessLogRepository::<UasTelemetry>::new(db)
        .by_user(user.id, None, None)
        .await?;
    let server_info = AccessLogRepository::<ServerInfoAccessLog>::new(db)
        .by_user(user.id, None, None)
        .await?;

    assert_eq!(telemetry.len(), 1);
    assert_eq!(server_info.len(), 2);
    assert_eq!(server_info[1].timestamp, at(3));

    Ok(())
}

/// Tests a user with no logs.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_no_logs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_access_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let logs = AccessLogRepository::<UasTelemetry>::new(db)
        .by_user(user.id, None, None)
        .await?;

    assert!(logs.is_empty());

    Ok(())
}

/// Tests logs sharing a timestamp are ordered by id.
///
/// Expected: Ok with equal-timestamp logs in insertion order
#[tokio::test]
async fn breaks_timestamp_ties_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_access_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let first = factory::create_uas_telemetry(db, user.id, at(5)).await?;
    let second = factory::create_uas_telemetry(db, user.id, at(5)).await?;

    let logs = AccessLogRepository::<UasTelemetry>::new(db)
        .by_user(user.id, None, None)
        .await?;

    let ids: Vec<_> = logs.iter().map(|log| log.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
