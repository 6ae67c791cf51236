use axum::{
    extract::{Path, RawQuery},
    Json,
};
use contracts::shared::filters::{FilterState, SavedFilter};

use super::reject;
use crate::shared::filters::entity_registry::get_registry;
use crate::shared::filters::list_service;
use crate::shared::filters::query_params::{FilterBody, ListQuery, Pagination, SaveFilterBody};
use crate::shared::filters::saved_store::get_store;

fn respond(state: &FilterState, pagination: Pagination) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    list_service::list_entity(state, pagination)
        .map(Json)
        .map_err(|e| {
            tracing::error!("Failed to serialize {} list: {}", state.entity, e);
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        })
}

/// GET /api/:entity/list?filters[...]&page=&page_size=
pub async fn list(
    Path(entity): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    let spec = get_registry().get_spec(&entity).map_err(reject)?;

    let query = ListQuery::parse(query.as_deref()).map_err(|e| {
        tracing::warn!("Bad filter query for {}: {}", entity, e);
        axum::http::StatusCode::BAD_REQUEST
    })?;
    let pagination = query.pagination();

    let mut state = FilterState::new(spec);
    for (key, value) in query.filters.into_values(spec).map_err(reject)?.iter() {
        state.values.set(key.clone(), value.clone());
    }

    respond(&state, pagination)
}

/// POST /api/:entity/filter
pub async fn filter(
    Path(entity): Path<String>,
    Json(body): Json<FilterBody>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    let spec = get_registry().get_spec(&entity).map_err(reject)?;
    let request = body.into_request(spec).map_err(reject)?;
    let pagination = Pagination::new(request.page, request.page_size);

    let mut state = FilterState::new(spec);
    for (key, value) in request.values.iter() {
        state.values.set(key.clone(), value.clone());
    }
    state.rules = request.rules;

    respond(&state, pagination)
}

/// GET /api/:entity/saved-filters
pub async fn list_saved(
    Path(entity): Path<String>,
) -> Result<Json<Vec<SavedFilter>>, axum::http::StatusCode> {
    let kind = get_registry().resolve(&entity).map_err(reject)?;
    Ok(Json(get_store().list(kind)))
}

/// POST /api/:entity/saved-filters
pub async fn save(
    Path(entity): Path<String>,
    Json(body): Json<SaveFilterBody>,
) -> Result<Json<SavedFilter>, axum::http::StatusCode> {
    let spec = get_registry().get_spec(&entity).map_err(reject)?;
    let req = body.into_request(spec).map_err(reject)?;
    let saved = get_store().save(spec, req).map_err(reject)?;
    Ok(Json(saved))
}

/// DELETE /api/:entity/saved-filters/:id
pub async fn delete_saved(
    Path((entity, id)): Path<(String, String)>,
) -> Result<(), axum::http::StatusCode> {
    let kind = get_registry().resolve(&entity).map_err(reject)?;
    get_store().delete(kind, &id).map_err(reject)
}
