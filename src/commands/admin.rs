use crate::db::{CropRecommendation, DbPool, FarmerSummary};
use crate::error::CropMindResult;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AdminDataResponse {
    pub success: bool,
    pub farmers: Vec<FarmerSummary>,
    pub recommendations: Vec<CropRecommendation>,
}

/// Full dump of both tables. Passwords are never included.
pub async fn admin_data(State(pool): State<DbPool>) -> CropMindResult<Json<AdminDataResponse>> {
    let farmers: Vec<FarmerSummary> = sqlx::query_as("SELECT id, email FROM farmers ORDER BY id")
        .fetch_all(&pool)
        .await?;

    let recommendations: Vec<CropRecommendation> = sqlx::query_as(
        "SELECT id, farmer_email, crop_name, nitrogen, phosphorus, potassium, \
         temperature, humidity, ph, rainfall \
         FROM crop_recommendations ORDER BY id DESC",
    )
    .fetch_all(&pool)
    .await?;

    Ok(Json(AdminDataResponse {
        success: true,
        farmers,
        recommendations,
    }))
}
