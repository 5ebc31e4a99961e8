// Utility functions
// Formatting helpers for list display

pub mod text;

pub use text::truncate_summary;
