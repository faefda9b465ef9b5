//! # mergington-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **activities JSON API**
//!   (`GET /activities`, `POST /activities/{name}/signup`,
//!   `DELETE /activities/{name}/participants/{email}`)
//! - Serve the static signup page under `/static` and redirect `/` to it
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into JSON responses
//!
//! Activity names and emails arrive percent-encoded in the path and query;
//! axum's extractors decode them before they reach the service.
//!
//! ## Dependency rule
//! Depends on `mergington-app` (for port traits and services) and
//! `mergington-domain` (for domain types used in response mapping). Never
//! leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
