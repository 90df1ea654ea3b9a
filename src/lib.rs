//! Innkeeper
//!
//! Core library modules for the Innkeeper hotel management backend.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod models;
pub mod repositories;
pub mod schema;
pub mod server;
pub mod services;
pub mod state;
pub mod utils;

pub use state::AppState;
