//! Filter + paginate an entity list

use contracts::domain::spec_for;
use contracts::shared::filters::api::FilteredListResponse;
use contracts::shared::filters::{EntityKind, FilterRecord, FilterSpec, FilterState};
use serde::Serialize;

use super::query_params::Pagination;
use crate::shared::data::demo_store::get_store;

/// Apply field filters, then rules, then the page window
pub fn run<R: FilterRecord + Clone>(
    records: &[R],
    spec: &FilterSpec,
    state: &FilterState,
    pagination: Pagination,
) -> FilteredListResponse<R> {
    let filtered = state.apply(records, spec);
    let filtered_count = filtered.len();
    let items: Vec<R> = filtered
        .into_iter()
        .skip(pagination.offset())
        .take(pagination.page_size)
        .collect();

    FilteredListResponse {
        items,
        total: records.len(),
        filtered: filtered_count,
        active_filters: state.active_count(spec),
        page: pagination.page,
        page_size: pagination.page_size,
        total_pages: pagination.total_pages(filtered_count),
    }
}

fn to_json<R: Serialize>(response: FilteredListResponse<R>) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(response)
}

/// Run `state` against the stored list of `state.entity`
pub fn list_entity(state: &FilterState, pagination: Pagination) -> Result<serde_json::Value, serde_json::Error> {
    let store = get_store();
    let spec = spec_for(state.entity);

    match state.entity {
        EntityKind::Client => to_json(run(&store.clients, spec, state, pagination)),
        EntityKind::Lead => to_json(run(&store.leads, spec, state, pagination)),
        EntityKind::Package => to_json(run(&store.packages, spec, state, pagination)),
        EntityKind::Contact => to_json(run(&store.contacts, spec, state, pagination)),
        EntityKind::User => to_json(run(&store.users, spec, state, pagination)),
        EntityKind::Task => to_json(run(&store.tasks, spec, state, pagination)),
        EntityKind::Deal => to_json(run(&store.deals, spec, state, pagination)),
        EntityKind::Subscription => to_json(run(&store.subscriptions, spec, state, pagination)),
    }
}
