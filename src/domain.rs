pub mod errors;
pub mod rewrite;
pub mod summary;
