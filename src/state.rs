use crate::db::DbPool;
use crate::predictor::CropPredictor;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    /// None when the model artifact was missing or unreadable at startup.
    pub predictor: Option<Arc<CropPredictor>>,
}

impl axum::extract::FromRef<AppState> for DbPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}
