//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use deps::{EnvSecrets, EtsyAdapter, ServerDeps};
pub use test_dependencies::{MarketplaceCall, MockMarketplace, MockSecrets, TestDependencies};
pub use traits::*;
