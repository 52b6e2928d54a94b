//! Application layer for Ossify.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, TierLocator, FileRenderer)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{FileRenderer, ScaffoldReport, ScaffoldRequest, ScaffoldService, TierLocator};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, RemoteConfig, TierScanner};

pub use error::ApplicationError;
