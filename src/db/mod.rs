mod migrate;
mod pool;

pub use migrate::run_migrations;
pub use pool::{AsyncDbPool, establish_async_connection_pool};
