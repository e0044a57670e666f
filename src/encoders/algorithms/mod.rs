pub mod body;
pub mod codeword;
pub mod errors;
pub mod frame;
pub mod header;
pub mod math;

// Re-export error types for public API
pub use errors::{CodecError, FrameError, find_closest_table};
