pub mod demo_store;
