pub mod filesystem;
pub mod reporter;
