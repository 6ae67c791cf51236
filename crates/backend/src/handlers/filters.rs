use axum::{
    extract::{Path, RawQuery},
    Json,
};
use contracts::shared::filters::api::{FilterSpecInfo, WherePreviewResponse};
use contracts::shared::filters::FilterSpecOwned;

use super::reject;
use crate::shared::filters::entity_registry::get_registry;
use crate::shared::filters::query_params::ListQuery;
use crate::shared::filters::where_builder::WhereBuilder;

/// GET /api/filters
pub async fn list_specs() -> Json<Vec<FilterSpecInfo>> {
    Json(get_registry().list_all())
}

/// GET /api/filters/:entity
pub async fn get_spec(
    Path(entity): Path<String>,
) -> Result<Json<FilterSpecOwned>, axum::http::StatusCode> {
    let spec = get_registry().get_spec(&entity).map_err(reject)?;
    Ok(Json(FilterSpecOwned::from(spec)))
}

/// GET /api/filters/:entity/sql?filters[...]
pub async fn where_preview(
    Path(entity): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<Json<WherePreviewResponse>, axum::http::StatusCode> {
    let registry = get_registry();
    let kind = registry.resolve(&entity).map_err(reject)?;
    let spec = registry.spec(kind).map_err(reject)?;

    let query = ListQuery::parse(query.as_deref()).map_err(|e| {
        tracing::warn!("Bad filter query: {}", e);
        axum::http::StatusCode::BAD_REQUEST
    })?;
    let values = query.filters.into_values(spec).map_err(reject)?;

    let table = registry.get_table_name(kind).unwrap_or(kind.as_str());
    let clause = WhereBuilder::new(spec, &values, table).build();

    Ok(Json(WherePreviewResponse {
        entity: kind,
        sql: clause.sql,
        params: clause.params.iter().map(|p| p.to_string()).collect(),
        residual: clause.residual.iter().map(|k| k.to_string()).collect(),
    }))
}
