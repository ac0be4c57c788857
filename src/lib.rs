// Library exports for the service binary and tests
pub mod api;
pub mod config;
pub mod errors;
