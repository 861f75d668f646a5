// Presentation layer - HTTP routes and the dashboard page
pub mod app_state;
pub mod handlers;
pub mod page;
