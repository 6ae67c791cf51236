pub mod aggregate;
pub mod filters;
