// HTTP Server modules
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;

// Message persistence
pub mod store;
