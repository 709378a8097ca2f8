use interop::server::{
    config::Config, error::AppError, service::report::ReportService, startup,
    util::clock::SystemClock,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_logging(&config);

    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Computing telemetry rate report");

    let report = ReportService::new(&db, &SystemClock)
        .telemetry_rates()
        .await?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
