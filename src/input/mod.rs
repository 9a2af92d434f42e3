//! Input processing module
//! Reads job descriptions and resumes from text and Markdown files

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use manager::InputManager;
