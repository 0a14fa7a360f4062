pub mod analyzer;
pub mod classifier;
