//! # mergington-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ActivityRepository` — read and replace activities by name
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ActivityService` — list, sign up, unregister
//! - Orchestrate domain objects without knowing *how* the directory is stored
//!
//! ## Dependency rule
//! Depends on `mergington-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
