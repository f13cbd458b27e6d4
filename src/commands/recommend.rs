use crate::error::{CropMindResult, ValidatedJson};
use crate::predictor::{FeatureRow, MODEL_ACCURACY};
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

// Wire keys are the short names the measurement form submits; the
// struct keeps the readable ones.
#[derive(Debug, Deserialize)]
pub struct CropRecommendationRequest {
    #[serde(rename = "N")]
    pub nitrogen: f64,
    #[serde(rename = "P")]
    pub phosphorus: f64,
    #[serde(rename = "K")]
    pub potassium: f64,
    #[serde(rename = "Temperature")]
    pub temperature: f64,
    #[serde(rename = "Humidity")]
    pub humidity: f64,
    #[serde(rename = "PH")]
    pub ph: f64,
    #[serde(rename = "Rainfall")]
    pub rainfall: f64,
    pub farmer_email: String,
}

impl CropRecommendationRequest {
    /// Feature order must match the order the model was trained with.
    pub fn feature_row(&self) -> FeatureRow {
        [
            self.nitrogen,
            self.phosphorus,
            self.potassium,
            self.temperature,
            self.humidity,
            self.ph,
            self.rainfall,
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct CropRecommendationResponse {
    pub success: bool,
    pub recommended_crop: String,
    pub model_accuracy: f64,
    pub message: String,
}

pub async fn recommend_crop(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CropRecommendationRequest>,
) -> CropMindResult<Json<CropRecommendationResponse>> {
    let features = payload.feature_row();

    let crop = match state.predictor.as_deref() {
        Some(predictor) => predictor.predict(&features),
        #[cfg(feature = "rule-fallback")]
        None => crate::predictor::rule_based_recommendation(&features),
        #[cfg(not(feature = "rule-fallback"))]
        None => return Err(crate::error::CropMindError::ModelUnavailable),
    };

    sqlx::query(
        "INSERT INTO crop_recommendations \
         (farmer_email, crop_name, nitrogen, phosphorus, potassium, temperature, humidity, ph, rainfall) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&payload.farmer_email)
    .bind(crop)
    .bind(payload.nitrogen)
    .bind(payload.phosphorus)
    .bind(payload.potassium)
    .bind(payload.temperature)
    .bind(payload.humidity)
    .bind(payload.ph)
    .bind(payload.rainfall)
    .execute(&state.pool)
    .await?;

    tracing::info!("Recommended {} for {}", crop, payload.farmer_email);

    Ok(Json(CropRecommendationResponse {
        success: true,
        recommended_crop: crop.to_string(),
        model_accuracy: MODEL_ACCURACY,
        message: "Crop recommended successfully!".to_string(),
    }))
}
