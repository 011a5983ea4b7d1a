//! Database connection pool management

mod sqlite;

pub use sqlite::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig};

// Re-export SqlitePool for convenience
pub use sqlx::sqlite::SqlitePool;
