//! Core functionality for the gradebook-navigator tool.
//!
//! This module provides the fundamental building blocks: the record types of
//! the academic dataset, the repository query interface and its JSON-file
//! implementation, error handling, and output formatting.

pub mod dataset;
pub mod dirs;
pub mod error;
pub mod output;
pub mod records;
pub mod repository;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{NavigatorError, Result};

// === Record types ===
// The five navigable entities plus the dataset-internal link rows
pub use records::{Assessment, Building, Course, Enrollment, ExamEvent, Room, Student};

// === Repository ===
// Query interface the menu engine runs against, and its JSON implementation
pub use dataset::{Dataset, JsonRepository};
pub use repository::Repository;

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{
    format_invalid_choice, format_match_line, format_menu_line, format_section_header, print_error,
};
