//! Consolidated test utilities for gradebook-navigator
//!
//! This module provides unified testing utilities for integration tests:
//! canned datasets and a helper that runs a whole scripted menu session
//! against an in-memory repository.

pub mod fixtures;
