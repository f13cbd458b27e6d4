use crate::state::AppState;
use axum::Router;

pub mod admin;
pub mod auth;
pub mod pages;
pub mod recommend;
pub mod system;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(pages::router())
        .merge(system::router())
        .merge(auth::router())
        .merge(recommend::router())
        .merge(admin::router())
}
