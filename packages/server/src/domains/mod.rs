// Business domains
pub mod grading;
