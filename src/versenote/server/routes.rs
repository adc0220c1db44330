use super::{AppState, controllers};
use crate::store::StorageBackend;
use axum::routing::{Router, get, post};

#[rustfmt::skip]
pub fn get_routes<B>() -> Router<AppState<B>>
where
    B: StorageBackend + Send + 'static,
{
    Router::new()
        .route("/", get(controllers::root))
        .route("/lookup", get(controllers::lookup::<B>))
        .route("/interpretations", get(controllers::list_interpretations::<B>))
        .route("/save_interpretation", post(controllers::save_interpretation::<B>))
        .route("/delete_interpretation", post(controllers::delete_interpretation::<B>))
}
