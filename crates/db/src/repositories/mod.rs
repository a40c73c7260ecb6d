//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod course_repo;
pub mod enrollment_repo;
pub mod lesson_repo;
pub mod quiz_repo;
pub mod video_asset_repo;

pub use course_repo::CourseRepo;
pub use enrollment_repo::EnrollmentRepo;
pub use lesson_repo::LessonRepo;
pub use quiz_repo::QuizScoreRepo;
pub use video_asset_repo::VideoAssetRepo;
