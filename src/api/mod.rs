pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod rules;
