use serde::{Deserialize, Serialize};

/// Gap statistics in seconds, or the reason they are undefined.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RatesDto {
    pub max_gap: Option<f64>,
    pub avg_gap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_data: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserRatesDto {
    pub user_id: i32,
    pub username: String,
    /// Number of flight periods the rates were computed over.
    pub flights: usize,
    pub telemetry: RatesDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RateReportDto {
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub users: Vec<UserRatesDto>,
}
