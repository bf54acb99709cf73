pub mod grade;

pub use grade::{GradeMetrics, GradeResult, Letter, PriceRange};
