// Application layer - Aggregation, chart building and render dispatch
pub mod aggregator;
pub mod chart_builders;
pub mod dashboard_context;
pub mod dataset_repository;
pub mod render_dispatcher;
