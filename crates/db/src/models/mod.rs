//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row, plus the `Deserialize` create DTO where rows are written
//! through the API.

pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod quiz;
pub mod video_asset;
