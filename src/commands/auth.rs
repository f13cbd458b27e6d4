use crate::db::{DbPool, Farmer};
use crate::error::{CropMindError, CropMindResult, ValidatedJson};
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
}

pub async fn register(
    State(pool): State<DbPool>,
    ValidatedJson(payload): ValidatedJson<AuthRequest>,
) -> CropMindResult<Json<AuthResponse>> {
    let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM farmers WHERE email = ?")
        .bind(&payload.email)
        .fetch_optional(&pool)
        .await?;

    if existing.is_some() {
        return Err(CropMindError::Validation(
            "Email already registered!".to_string(),
        ));
    }

    let insert = sqlx::query("INSERT INTO farmers (email, password) VALUES (?, ?)")
        .bind(&payload.email)
        .bind(&payload.password)
        .execute(&pool)
        .await;

    match insert {
        Ok(_) => Ok(Json(AuthResponse {
            success: true,
            message: "Registration successful!".to_string(),
        })),
        // Concurrent registration can slip past the lookup above.
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(
            CropMindError::Validation("Email already registered!".to_string()),
        ),
        Err(e) => Err(e.into()),
    }
}

pub async fn login(
    State(pool): State<DbPool>,
    ValidatedJson(payload): ValidatedJson<AuthRequest>,
) -> CropMindResult<Json<AuthResponse>> {
    let farmer = sqlx::query_as::<_, Farmer>(
        "SELECT id, email, password FROM farmers WHERE email = ? AND password = ?",
    )
    .bind(&payload.email)
    .bind(&payload.password)
    .fetch_optional(&pool)
    .await?;

    match farmer {
        Some(farmer) => Ok(Json(AuthResponse {
            success: true,
            message: format!("Welcome {}!", farmer.email),
        })),
        None => Err(CropMindError::Auth("Invalid credentials.".to_string())),
    }
}
