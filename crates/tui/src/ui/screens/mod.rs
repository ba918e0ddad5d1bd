pub mod editing;
pub mod summary;
