pub mod application;
pub mod resume;
