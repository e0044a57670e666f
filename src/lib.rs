//! Reversible table codec.
//!
//! Encodes any UTF-8 text into a string built only from the symbols of a
//! caller-chosen table, and decodes it back exactly. The table can be any set
//! of at least two distinct characters: `"01"`, a hex alphabet, or `"哈基米"`.
//!
//! ```
//! let encoded = rhakimi::encode("0123456789ABCDEF", "Binary-ish payload").unwrap();
//! assert_eq!(
//!     rhakimi::decode("0123456789ABCDEF", &encoded).unwrap(),
//!     "Binary-ish payload"
//! );
//! ```
//!
//! The encoded string is a four-symbol header holding the codeword length,
//! followed by the framed payload written as a big integer in base
//! `table_size ^ codeword_length`.

mod core;
mod encoders;

pub mod prelude;

pub use crate::core::config::{ConfigError, Settings, TableConfig, TableRegistry};
pub use crate::core::table::Table;
pub use encoders::algorithms::{CodecError, FrameError, find_closest_table};
pub use encoders::codec::{decode, decode_bytes, decode_with, encode, encode_bytes, encode_with};
pub use encoders::header::HEADER_WIDTH;

#[cfg(test)]
mod tests;
