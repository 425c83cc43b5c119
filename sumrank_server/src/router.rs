use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use crate::{
    docs::{dto::ApiDoc, handler::api_docs},
    info::handler::info,
    summarize::handler::summarize,
};

pub fn router() -> Router {
    let doc = ApiDoc::openapi();

    Router::new()
        .merge(Redoc::with_url("/redoc", doc))
        .route("/", get(info))
        .route("/docs", get(api_docs))
        .route("/summarize", post(summarize))
        // The browser front-end is served from another origin.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
