use axum::{Extension, Router};
use tower_http::trace::TraceLayer;

use crate::{app_module::AppState, codec::codec_controller::codec_router};

pub fn application_router(state: AppState) -> Router {
    Router::new()
        .merge(codec_router())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}
