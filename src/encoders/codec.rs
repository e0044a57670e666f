//! Encode and decode entry points.
//!
//! An encoded string is a four-symbol header carrying the codeword length
//! `L`, followed by the framed payload written in base `S^L`, `L` symbols per
//! digit. Every function here is pure: the same table and input always give
//! the same output and nothing is shared between calls.

use super::algorithms::body::{decode_body, encode_body};
use super::algorithms::codeword::choose_codeword_length;
use super::algorithms::errors::CodecError;
use super::algorithms::frame::{frame, unframe};
use super::algorithms::header::{HEADER_WIDTH, decode_header, encode_header};
use crate::core::table::Table;

/// Encodes `text` using only symbols from `table`.
///
/// Repeated symbols in `table` are ignored after their first occurrence.
///
/// # Errors
///
/// Returns [`CodecError::InvalidTable`] if `table` has fewer than two
/// distinct symbols.
///
/// # Example
///
/// ```
/// let encoded = rhakimi::encode("哈基米", "Hello, 世界").unwrap();
/// assert!(encoded.chars().all(|c| "哈基米".contains(c)));
/// assert_eq!(rhakimi::decode("哈基米", &encoded).unwrap(), "Hello, 世界");
/// ```
pub fn encode(table: &str, text: &str) -> Result<String, CodecError> {
    let table: Table = table.parse()?;
    encode_with(&table, text)
}

/// Decodes a string produced by [`encode`] with the same `table`.
///
/// # Errors
///
/// Fails with the first problem found: a bad table, a short or corrupt
/// header, a misaligned body, a foreign symbol, a malformed frame, or a
/// payload that is not UTF-8.
pub fn decode(table: &str, encoded: &str) -> Result<String, CodecError> {
    let table: Table = table.parse()?;
    decode_with(&table, encoded)
}

/// [`encode`] with an already validated table.
pub fn encode_with(table: &Table, text: &str) -> Result<String, CodecError> {
    encode_bytes(table, text.as_bytes())
}

/// [`decode`] with an already validated table.
pub fn decode_with(table: &Table, encoded: &str) -> Result<String, CodecError> {
    let payload = decode_bytes(table, encoded)?;
    String::from_utf8(payload).map_err(CodecError::InvalidEncoding)
}

/// Encodes an arbitrary byte payload.
pub fn encode_bytes(table: &Table, payload: &[u8]) -> Result<String, CodecError> {
    let value = frame(payload);
    let length = choose_codeword_length(table.base(), &value)?;

    let mut encoded = encode_header(length, table)?;
    encoded.push_str(&encode_body(&value, length, table)?);

    tracing::debug!(
        payload_bytes = payload.len(),
        table_size = table.base(),
        codeword_length = length,
        encoded_symbols = encoded.chars().count(),
        "encoded payload"
    );
    Ok(encoded)
}

/// Decodes back to the raw payload bytes, without the UTF-8 check.
pub fn decode_bytes(table: &Table, encoded: &str) -> Result<Vec<u8>, CodecError> {
    let symbols: Vec<char> = encoded.chars().collect();
    if symbols.len() < HEADER_WIDTH {
        return Err(CodecError::TruncatedInput {
            actual: symbols.len(),
        });
    }

    let length = decode_header(&symbols, table)?;
    let value = decode_body(&symbols[HEADER_WIDTH..], length, table)?;
    let payload = unframe(&value)?;

    tracing::debug!(
        encoded_symbols = symbols.len(),
        table_size = table.base(),
        codeword_length = %length,
        payload_bytes = payload.len(),
        "decoded payload"
    );
    Ok(payload)
}
