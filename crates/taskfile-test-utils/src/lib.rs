//! Shared test utilities for the taskfile workspace.
//!
//! This crate provides standardised project fixtures to eliminate
//! duplication across crate test suites. It is a dev-dependency only and
//! never published.
//!
//! # Modules
//!
//! - [`project`]: [`project::TestProject`] builder for Taskfile trees

pub mod project;

pub use project::TestProject;
