//! Order sink implementations.

pub mod in_memory;
pub mod text_file;
