use crate::commands;
use crate::state::AppState;
use axum::{routing::post, Router};

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/crop_recommendation",
        post(commands::recommend::recommend_crop),
    )
}
