use super::*;

/// Tests recording a server info request.
///
/// Expected: Ok with the log stored for the user at the given instant
#[tokio::test]
async fn records_access() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_access_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let log = ServerInfoAccessLogRepository::new(db)
        .create(NewAccessLog {
            user_id: user.id,
            timestamp: at(12),
        })
        .await?;

    assert_eq!(log.user_id, user.id);
    assert_eq!(log.timestamp, at(12));
    assert!(log.id > 0);

    Ok(())
}
