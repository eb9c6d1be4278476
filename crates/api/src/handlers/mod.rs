pub mod graph;
pub mod guests;
pub mod photos;
pub mod relationships;
pub mod tables;
