// HTTP routes
pub mod grade;
pub mod health;

pub use grade::*;
pub use health::*;
