mod environment;
pub mod settings;

pub use environment::Environment;
pub use settings::{ApplicationConfig, DatabaseConfig, ServerConfig, Settings};
