pub mod entity_registry;
pub mod list_service;
pub mod query_params;
pub mod saved_store;
pub mod where_builder;
