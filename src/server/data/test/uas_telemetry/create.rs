use super::*;
use crate::server::data::access_log::AccessLogRepository;

/// Tests storing a telemetry upload.
///
/// Verifies that position and heading are persisted and the row is visible through the
/// access-log query layer.
///
/// Expected: Ok with stored values matching the upload
#[tokio::test]
async fn stores_telemetry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_access_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let telemetry = Telemetry::new(38.145, -76.428, 120.5, 270.0).unwrap();

    let stored = UasTelemetryRepository::new(db)
        .create(
            NewAccessLog {
                user_id: user.id,
                timestamp: at(30),
            },
            &telemetry,
        )
        .await?;

    assert_eq!(stored.user_id, user.id);
    assert_eq!(stored.timestamp, at(30));
    assert_eq!(stored.telemetry, telemetry);

    let logs = AccessLogRepository::<entity::prelude::UasTelemetry>::new(db)
        .by_user(user.id, None, None)
        .await?;
    assert_eq!(logs, vec![stored.access_log()]);

    Ok(())
}

/// Tests the owning user must exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_access_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let telemetry = Telemetry::new(0.0, 0.0, 0.0, 0.0).unwrap();

    let result = UasTelemetryRepository::new(db)
        .create(
            NewAccessLog {
                user_id: 999,
                timestamp: at(0),
            },
            &telemetry,
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
