//! Domain logic for the banquet guest-management backend.
//!
//! This crate has no database or HTTP dependencies. Everything here operates
//! on in-memory snapshots handed in by the caller: the seating suggestion
//! scorer, relationship graph construction, and the validation helpers the
//! API layer uses before touching the database.

pub mod error;
pub mod graph;
pub mod guest;
pub mod photos;
pub mod relationship;
pub mod seating;
pub mod types;
