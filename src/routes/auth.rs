use crate::commands;
use crate::state::AppState;
use axum::{routing::post, Router};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(commands::auth::register))
        .route("/login", post(commands::auth::login))
}
