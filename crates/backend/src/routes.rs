use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // FILTER SPECS
        // ========================================
        .route("/api/filters", get(handlers::filters::list_specs))
        .route("/api/filters/:entity", get(handlers::filters::get_spec))
        .route(
            "/api/filters/:entity/sql",
            get(handlers::filters::where_preview),
        )
        // ========================================
        // ENTITY LISTS
        // ========================================
        .route("/api/:entity/list", get(handlers::entities::list))
        .route("/api/:entity/filter", post(handlers::entities::filter))
        .route(
            "/api/:entity/saved-filters",
            get(handlers::entities::list_saved).post(handlers::entities::save),
        )
        .route(
            "/api/:entity/saved-filters/:id",
            delete(handlers::entities::delete_saved),
        )
}
