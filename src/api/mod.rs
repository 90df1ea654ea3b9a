//! API module for HTTP handlers, middleware, and DTOs.
//!
//! Provides the HTTP API layer for the application: request handlers,
//! middleware components, and data transfer objects.

pub mod doc;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
