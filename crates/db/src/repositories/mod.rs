//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod guest_repo;
pub mod photo_repo;
pub mod relationship_repo;
pub mod table_repo;

pub use guest_repo::GuestRepo;
pub use photo_repo::PhotoRepo;
pub use relationship_repo::RelationshipRepo;
pub use table_repo::TableRepo;
