//! Integration test modules.

mod egui_store_test;
mod onboarding_flow_test;
mod store_persistence_test;
