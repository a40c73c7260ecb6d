pub mod enrollments;
pub mod lessons;
pub mod quiz;
pub mod video;
