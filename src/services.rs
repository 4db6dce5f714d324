pub mod sweep;
pub mod traversal;
