//! # mergington-domain
//!
//! Pure domain model for the Mergington High School activity signup service.
//!
//! ## Responsibilities
//! - Define **Activities** (named extracurricular offerings with a schedule,
//!   an advisory capacity, and a roster of participant emails)
//! - Enforce roster invariants (an email appears at most once per activity)
//! - Provide the fixed **seed table** loaded at process start
//! - Define the error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod activity;
pub mod seed;
