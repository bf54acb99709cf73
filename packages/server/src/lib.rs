// Etsy Shop Grader - API Core
//
// Grades a seller's storefront from its public Etsy data: resolve the shop,
// pull one page of active listings, score them against a fixed rubric.
// Stateless and request-scoped; the only shared state is immutable setup.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
