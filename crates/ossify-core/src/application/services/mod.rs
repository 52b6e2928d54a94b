//! Application services: use case orchestration.

pub mod renderer;
pub mod scaffold_service;
pub mod tier_locator;

pub use renderer::FileRenderer;
pub use scaffold_service::{ScaffoldReport, ScaffoldRequest, ScaffoldService};
pub use tier_locator::TierLocator;
