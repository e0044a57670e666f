use std::string::FromUtf8Error;

use super::header::HEADER_WIDTH;

/// Errors that can occur while encoding or decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The table has fewer than two distinct symbols
    #[error(
        "table must contain at least two distinct symbols ({supplied} supplied, {distinct} distinct)"
    )]
    InvalidTable { supplied: usize, distinct: usize },
    /// The encoded input is too short to hold the header
    #[error(
        "encoded input has {actual} symbols, the header alone needs {width}",
        width = HEADER_WIDTH
    )]
    TruncatedInput { actual: usize },
    /// The codeword length does not fit in the header's range
    #[error("codeword length {length} is outside the header range 1..={max}")]
    HeaderOverflow { length: u128, max: u128 },
    /// The body is not made of whole codewords
    #[error("body of {body} symbols is not a multiple of the codeword length {length}")]
    MisalignedBody { body: usize, length: u128 },
    /// A character outside the table was found
    #[error("symbol {symbol:?} at position {position} is not in the table")]
    InvalidSymbol { symbol: char, position: usize },
    /// A codeword decoded to a digit outside the current base
    #[error("codeword at position {position} does not fit a digit of {length} symbols")]
    CodewordOverflow { position: usize, length: usize },
    /// The recovered integer is not a well-formed frame
    #[error("corrupt payload: {0}")]
    CorruptPayload(#[from] FrameError),
    /// The recovered payload is not UTF-8
    #[error("decoded payload is not valid UTF-8")]
    InvalidEncoding(#[source] FromUtf8Error),
}

impl CodecError {
    /// Short remediation hint for the CLI, if one applies.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CodecError::InvalidTable { .. } => {
                Some("a table needs at least two different characters, e.g. \"01\"")
            }
            CodecError::TruncatedInput { .. } | CodecError::MisalignedBody { .. } => {
                Some("the encoded text looks cut off; check for missing characters")
            }
            CodecError::InvalidSymbol { .. } => {
                Some("decode with exactly the table that was used to encode")
            }
            CodecError::HeaderOverflow { .. }
            | CodecError::CodewordOverflow { .. }
            | CodecError::CorruptPayload(_) => {
                Some("the input was not produced with this table, or it was modified")
            }
            CodecError::InvalidEncoding(_) => {
                Some("the payload is binary; it cannot be returned as text")
            }
        }
    }
}

/// The framing check that failed while unpacking a decoded integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    #[error("expected sentinel byte 0x01, found {found:#04x}")]
    MissingSentinel { found: u8 },
    #[error("length field needs 8 bytes, only {available} present")]
    MissingLength { available: usize },
    #[error("declared {declared} payload bytes, found {actual}")]
    LengthMismatch { declared: u64, actual: usize },
}

/// Levenshtein distance between two symbol sequences, one DP row at a time.
fn edit_distance(a: &[char], b: &[char]) -> usize {
    // row[j] holds the distance between the current prefix of `a` and b[..j]
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, &ca) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitute = diagonal + usize::from(ca != cb);
            diagonal = row[j + 1];
            row[j + 1] = substitute.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b.len()]
}

/// Suggests the configured table name closest to a mistyped `name`.
pub fn find_closest_table<'a, I>(name: &str, available: I) -> Option<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let wanted: Vec<char> = name.chars().collect();
    // 1-2 edits for short names, up to 3 for longer ones
    let threshold = if wanted.len() < 5 { 2 } else { 3 };

    available
        .into_iter()
        .map(|candidate| {
            let symbols: Vec<char> = candidate.chars().collect();
            (edit_distance(&wanted, &symbols), candidate)
        })
        .filter(|(distance, _)| *distance <= threshold)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.clone())
}
