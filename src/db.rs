#![allow(dead_code)]
use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{FromRow, Pool, Sqlite};
use std::str::FromStr;

use crate::error::{CropMindError, CropMindResult};

pub type DbPool = Pool<Sqlite>;

pub async fn init_pool_with_options(opts: SqliteConnectOptions) -> CropMindResult<DbPool> {
    // connect_lazy_with returns the pool immediately. It does not validate connection.
    Ok(SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect_lazy_with(opts))
}

pub async fn init_pool(database_url: &str) -> CropMindResult<DbPool> {
    let opts = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| CropMindError::Internal(format!("Invalid DB URL: {}", e)))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);

    init_pool_with_options(opts).await
}

pub async fn init_database(pool: &DbPool) -> CropMindResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

#[derive(Debug, FromRow)]
pub struct Farmer {
    pub id: i64,
    pub email: String,
    pub password: String,
}

/// Password-free projection for the admin listing.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct FarmerSummary {
    pub id: i64,
    pub email: String,
}

// Wire keys keep the short feature names the measurement forms submit.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct CropRecommendation {
    pub id: i64,
    pub farmer_email: String,
    pub crop_name: String,
    #[serde(rename = "N")]
    pub nitrogen: Option<f64>,
    #[serde(rename = "P")]
    pub phosphorus: Option<f64>,
    #[serde(rename = "K")]
    pub potassium: Option<f64>,
    #[serde(rename = "Temperature")]
    pub temperature: Option<f64>,
    #[serde(rename = "Humidity")]
    pub humidity: Option<f64>,
    #[serde(rename = "PH")]
    pub ph: Option<f64>,
    #[serde(rename = "Rainfall")]
    pub rainfall: Option<f64>,
}
