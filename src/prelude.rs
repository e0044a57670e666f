//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use rhakimi::prelude::*;
//!
//! let table: Table = "哈基米".parse().unwrap();
//! let encoded = encode_with(&table, "Hello").unwrap();
//! assert_eq!(decode_with(&table, &encoded).unwrap(), "Hello");
//! ```

pub use crate::{
    CodecError,
    // Config
    ConfigError,
    FrameError,
    HEADER_WIDTH,
    Table,
    TableRegistry,

    // Core encoding/decoding
    decode,
    decode_bytes,
    decode_with,
    encode,
    encode_bytes,
    encode_with,
};
