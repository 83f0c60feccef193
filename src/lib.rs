pub mod text;

// Re-export key functionality for easy access
pub use text::numbers::normalize_numbers;
