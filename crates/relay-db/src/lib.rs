//! # relay-db
//!
//! Storage layer implementing the repository traits with SQLite via SQLx.
//!
//! ## Overview
//!
//! This crate provides SQLite implementations for the repository traits
//! defined in `relay-core`. It handles:
//!
//! - Connection pool management and embedded migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! The roster mutation and its audit append share one transaction, so a
//! committed add or delete always carries exactly one audit entry.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use relay_db::pool::{create_pool, DatabaseConfig};
//! use relay_db::repositories::SqliteRosterRepository;
//! use relay_core::traits::RosterRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     relay_db::run_migrations(&pool).await?;
//!     let roster_repo = SqliteRosterRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, SqlitePool};
pub use repositories::{SqliteAuditLogRepository, SqliteRosterRepository};
