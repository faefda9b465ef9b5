//! # mergington-adapter-storage-memory
//!
//! Process-lifetime storage for the activity directory.
//!
//! ## Responsibilities
//! - Implement the `ActivityRepository` port defined in `mergington-app::ports::storage`
//! - Own the activity table behind a [`tokio::sync::RwLock`] so it can be
//!   shared across request handlers without an ambient global
//! - Preserve insertion order so listings follow the seed table
//!
//! Nothing is written to disk; every restart begins from the seed table.
//!
//! ## Dependency rule
//! Depends on `mergington-app` (for port traits) and `mergington-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod activity_repo;

pub use activity_repo::InMemoryActivityRepository;
