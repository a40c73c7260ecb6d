//! Domain types and pure logic shared by the LearnHub crates.
//!
//! Nothing in here touches the network or the database directly; the
//! data-store seam is the [`delivery::VideoCatalog`] trait.

pub mod delivery;
pub mod error;
pub mod quiz;
pub mod types;
pub mod video_ref;
