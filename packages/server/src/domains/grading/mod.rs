pub mod activities;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use activities::{grade_shop, resolve_shop_name, score_listings};
pub use error::{GradeError, UpstreamStage};
pub use models::{GradeMetrics, GradeResult, Letter, PriceRange};
