//! Storage backend.
//!
//! This module provides:
//! - `SQLite` database implementation
//! - Session CRUD operations
//! - Conversation message persistence
//! - Assessment, mood, journal, and appointment records
//!
//! # Architecture
//!
//! The storage layer uses `SQLite` with the `sqlx` crate for async operations.
//! All operations are transactional and support concurrent access.
//!
//! The implementation is split across submodules for maintainability:
//! - `core`: Pool management, migrations, and helper functions
//! - `session`: Session CRUD operations
//! - `message`: Conversation message operations
//! - `assessment`: Assessment result operations
//! - `wellness`: Mood and journal operations
//! - `appointment`: Appointment operations
//! - `trait_impl`: [`Storage`] trait implementation
//!
//! # Example
//!
//! ```ignore
//! use mindhaven::storage::SqliteStorage;
//!
//! let storage = SqliteStorage::new("./data/mindhaven.db").await?;
//! let session = storage.get_or_create_session(None).await?;
//! ```
//!
//! [`Storage`]: crate::traits::Storage

mod appointment;
mod assessment;
mod core;
mod message;
mod session;
mod trait_impl;
mod wellness;

pub use self::core::SqliteStorage;
