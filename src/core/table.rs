use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::str::FromStr;

use crate::encoders::algorithms::errors::CodecError;

/// The symbol alphabet an encoded string is written in.
///
/// A table is built from any sequence of characters. Repeated characters are
/// dropped, keeping the first occurrence, so `"aaabbc"` and `"abc"` are the
/// same table. At least two distinct symbols must remain.
///
/// # Example
///
/// ```
/// use rhakimi::Table;
///
/// let table: Table = "哈哈基米".parse().unwrap();
/// assert_eq!(table.base(), 3);
/// assert_eq!(table.encode_digit(1), Some('基'));
/// assert_eq!(table.decode_char('米'), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    symbols: Vec<char>,
    char_to_index: HashMap<char, usize>,
}

impl Table {
    /// Builds a table from raw symbols, removing duplicates in order.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidTable`] if fewer than two symbols are
    /// supplied or fewer than two distinct symbols remain.
    pub fn new<I>(symbols: I) -> Result<Self, CodecError>
    where
        I: IntoIterator<Item = char>,
    {
        let mut supplied = 0;
        let mut deduped = Vec::new();
        let mut char_to_index = HashMap::new();

        for c in symbols {
            supplied += 1;
            if let Entry::Vacant(slot) = char_to_index.entry(c) {
                slot.insert(deduped.len());
                deduped.push(c);
            }
        }

        if supplied < 2 || deduped.len() < 2 {
            return Err(CodecError::InvalidTable {
                supplied,
                distinct: deduped.len(),
            });
        }

        Ok(Table {
            symbols: deduped,
            char_to_index,
        })
    }

    /// Returns the radix `S` of the table.
    pub fn base(&self) -> usize {
        self.symbols.len()
    }

    /// Returns the deduplicated symbols in order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Encodes a digit (0 to base-1) as a symbol.
    ///
    /// Returns `None` if the digit is out of range.
    pub fn encode_digit(&self, digit: usize) -> Option<char> {
        self.symbols.get(digit).copied()
    }

    /// Decodes a symbol back to its digit value.
    ///
    /// Returns `None` if the symbol is not in the table.
    pub fn decode_char(&self, c: char) -> Option<usize> {
        self.char_to_index.get(&c).copied()
    }

    /// Like [`decode_char`](Self::decode_char), reporting where a foreign
    /// symbol was found.
    pub(crate) fn lookup(&self, c: char, position: usize) -> Result<usize, CodecError> {
        self.decode_char(c).ok_or(CodecError::InvalidSymbol {
            symbol: c,
            position,
        })
    }

    /// Returns `true` if `c` is one of the table's symbols.
    pub fn contains(&self, c: char) -> bool {
        self.char_to_index.contains_key(&c)
    }
}

impl FromStr for Table {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.chars())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.symbols {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
