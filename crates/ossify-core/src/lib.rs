//! Ossify Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Ossify
//! open-source project scaffolder, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           ossify-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldService, TierLocator, …)      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Driven: RemoteConfig, TierScanner,    │
//! │   Filesystem)                           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     ossify-adapters (Infrastructure)    │
//! │  (GitRemoteConfig, LocalTierScanner,    │
//! │   LocalFilesystem, MemoryFilesystem)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (RepositoryIdentity, TemplateTier,     │
//! │   CompositionResult, RenderParameters)  │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ossify_core::{
//!     application::{ScaffoldRequest, ScaffoldService},
//!     domain::ProjectClass,
//! };
//!
//! // Use application service (with injected adapters)
//! let service = ScaffoldService::new(remote, scanner, filesystem);
//! let report = service.scaffold(&ScaffoldRequest {
//!     workdir: "./my-clone".into(),
//!     class: ProjectClass::Library,
//!     template_root: "./templates".into(),
//!     explicit_url: None,
//!     year: 2026,
//! })?;
//! println!("wrote {} files", report.written.len());
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldReport, ScaffoldRequest, ScaffoldService, TierLocator,
        ports::{Filesystem, RemoteConfig, TierScanner},
    };
    pub use crate::domain::{
        CompositionResult, ProjectClass, RenderParameters, RepositoryIdentity, TemplateEntry,
        TemplateTier,
    };
    pub use crate::error::{OssifyError, OssifyResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
