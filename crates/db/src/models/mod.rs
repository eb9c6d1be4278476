//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Response-facing structs also derive `ts_rs::TS` with `#[ts(export)]` so
//! `cargo test` regenerates the TypeScript bindings the React front end
//! consumes.

pub mod guest;
pub mod photo;
pub mod relationship;
pub mod table;
