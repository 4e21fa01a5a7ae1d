pub mod classifier;
pub mod parser;
pub mod types;
