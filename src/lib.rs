//! Gradebook Navigator - an interactive text-menu front-end over a dataset
//! of academic records.
//!
//! This library provides the core functionality for gradebook-navigator: the
//! record types of the grades schema, the repository query interface with a
//! JSON-file implementation, and the hierarchical menu engine that lets an
//! operator search students, courses, buildings, rooms and exam events.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] and [`menu`]
//! modules, which provide:
//! - Record types and the `Repository` query trait
//! - The JSON dataset repository
//! - The menu engine: nodes, options, outcomes, and the interactive session
//! - Error handling and result types

pub mod core;
pub mod entities;
pub mod menu;

// Re-export the core public API for external users
pub use core::{
    format_invalid_choice,
    format_match_line,
    // Output formatting
    format_menu_line,
    format_section_header,
    print_error,

    Assessment,
    Building,
    Course,
    // Repository and dataset
    Dataset,
    Enrollment,
    ExamEvent,
    JsonRepository,
    // Error handling
    NavigatorError,
    Repository,
    Result,
    Room,
    // Record types
    Student,
};

// === Menu engine ===
// Navigation nodes, options, and the interactive session
pub use menu::{MenuNode, MenuOption, MenuSet, Outcome, Session};
