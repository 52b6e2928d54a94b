//! Core domain layer for Ossify.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O (git remote reads, tier scanning, file writes) is handled via
//! ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable values**: All domain objects are Clone + PartialEq
//! - **Rich domain model**: Behavior lives in the types, not services

// Public API - what the world sees
pub mod classification;
pub mod composition;
pub mod error;
pub mod identity;
pub mod params;
pub mod tier;

// Re-exports for convenience
pub use classification::ProjectClass;
pub use composition::CompositionResult;
pub use error::{DomainError, ErrorCategory};
pub use identity::RepositoryIdentity;
pub use params::RenderParameters;
pub use tier::{COMMON_TIER, TEMPLATE_MARKER, TemplateEntry, TemplateTier};
