use super::*;

/// Tests logs are partitioned per period, in period order.
///
/// Expected: Ok with one list per period holding that period's logs
#[tokio::test]
async fn partitions_logs_by_period() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_access_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::create_uas_telemetry_series(db, user.id, &[at(5), at(15), at(25), at(35)]).await?;

    let periods = [
        TimePeriod::bounded(at(20), at(40)).unwrap(),
        TimePeriod::bounded(at(0), at(10)).unwrap(),
    ];
    let logs = AccessLogRepository::<UasTelemetry>::new(db)
        .by_time_period(user.id, &periods)
        .await?;

    assert_eq!(logs.len(), 2);
    let first: Vec<_> = logs[0].iter().map(|log| log.timestamp).collect();
    let second: Vec<_> = logs[1].iter().map(|log| log.timestamp).collect();
    assert_eq!(first, vec![at(25), at(35)]);
    assert_eq!(second, vec![at(5)]);

    Ok(())
}

/// Tests overlapping periods return the shared log in both lists.
///
/// Expected: Ok with the overlapping log duplicated
#[tokio::test]
async fn overlapping_periods_duplicate_logs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_access_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::create_uas_telemetry(db, user.id, at(15)).await?;

    let periods = [
        TimePeriod::bounded(at(0), at(20)).unwrap(),
        TimePeriod::bounded(at(10), at(30)).unwrap(),
    ];
    let logs = AccessLogRepository::<UasTelemetry>::new(db)
        .by_time_period(user.id, &periods)
        .await?;

    assert_eq!(logs[0].len(), 1);
    assert_eq!(logs[1].len(), 1);
    assert_eq!(logs[0][0].id, logs[1][0].id);

    Ok(())
}

/// Tests an open period has no upper bound.
///
/// Expected: Ok with every log at or after the period start
#[tokio::test]
async fn open_period_has_no_upper_bound() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_access_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::create_uas_telemetry_series(db, user.id, &[at(5), at(500), at(50_000)]).await?;

    let logs = AccessLogRepository::<UasTelemetry>::new(db)
        .by_time_period(user.id, &[TimePeriod::unbounded(at(10))])
        .await?;

    assert_eq!(logs[0].len(), 2);

    Ok(())
}

/// Tests no periods.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_no_periods() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_access_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let logs = AccessLogRepository::<UasTelemetry>::new(db)
        .by_time_period(user.id, &[])
        .await?;

    assert!(logs.is_empty());

    Ok(())
}

/// Tests a log on the shared boundary of touching periods.
///
/// Expected: Ok with the boundary log only in the later period
#[tokio::test]
async fn boundary_log_belongs_to_later_period() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_access_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::create_uas_telemetry(db, user.id, at(10)).await?;

    let periods = [
        TimePeriod::bounded(at(0), at(10)).unwrap(),
        TimePeriod::bounded(at(10), at(20)).unwrap(),
    ];
    let logs = AccessLogRepository::<UasTelemetry>::new(db)
        .by_time_period(user.id, &periods)
        .await?;

    assert!(logs[0].is_empty());
    assert_eq!(logs[1].len(), 1);

    Ok(())
}
