use crate::commands;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(commands::pages::home))
        .route("/about", get(commands::pages::about))
        .route("/contact", get(commands::pages::contact))
}
