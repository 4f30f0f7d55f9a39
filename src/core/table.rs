use crate::encoders::algorithms::errors::{AlphabetError, CorruptInputError};
use crate::encoders::encoding;

/// Number of symbols in every alphabet.
pub const ALPHABET_LEN: usize = 64;

/// Symbols of the predefined URL-safe alphabet, in value order.
pub const URL_SAFE_SYMBOLS: &[u8; ALPHABET_LEN] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Delimiter of the predefined URL-safe alphabet.
pub const URL_SAFE_DELIMITER: u8 = b'.';

/// The predefined URL-safe table, built at compile time.
pub static URL_SAFE: Table = Table::from_symbols(URL_SAFE_SYMBOLS, URL_SAFE_DELIMITER);

const INVALID: u8 = 0xFF;

/// Bidirectional lookup between 6-bit values and the 64 symbols of an alphabet,
/// plus the reserved delimiter that brackets non-ASCII runs.
///
/// A table is immutable once built and can be shared freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    encode: [u8; 256],
    decode: [u8; 256],
    delimiter: u8,
}

impl Table {
    /// Builds a table from 64 distinct symbol bytes and a delimiter byte.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `symbols` is not exactly 64 bytes long
    /// - a symbol appears more than once
    /// - the delimiter is one of the symbols
    pub fn new(symbols: &[u8], delimiter: u8) -> Result<Self, AlphabetError> {
        let symbols: &[u8; ALPHABET_LEN] = symbols
            .try_into()
            .map_err(|_| AlphabetError::InvalidLength {
                actual: symbols.len(),
            })?;

        let mut seen = [false; 256];
        for (position, &symbol) in symbols.iter().enumerate() {
            if symbol == delimiter {
                return Err(AlphabetError::DelimiterInAlphabet {
                    delimiter,
                    position,
                });
            }
            if std::mem::replace(&mut seen[symbol as usize], true) {
                return Err(AlphabetError::DuplicateSymbol { symbol, position });
            }
        }

        Ok(Self::from_symbols(symbols, delimiter))
    }

    /// Fills both lookup tables without validating the alphabet.
    ///
    /// Every symbol is written at `i`, `i | 0x40`, `i | 0x80` and `i | 0xC0` so a
    /// shifted byte can index the encode table without masking off its top bits.
    const fn from_symbols(symbols: &[u8; ALPHABET_LEN], delimiter: u8) -> Self {
        let mut encode = [0u8; 256];
        let mut decode = [INVALID; 256];

        let mut i = 0;
        while i < ALPHABET_LEN {
            let symbol = symbols[i];
            encode[i] = symbol;
            encode[i | 0x40] = symbol;
            encode[i | 0x80] = symbol;
            encode[i | 0xC0] = symbol;
            decode[symbol as usize] = i as u8;
            i += 1;
        }

        Table {
            encode,
            decode,
            delimiter,
        }
    }

    /// Returns the delimiter byte.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Returns the 64 symbols in value order.
    pub fn symbols(&self) -> &[u8] {
        &self.encode[..ALPHABET_LEN]
    }

    /// Maps a 6-bit value to its symbol. Bits above the low six are ignored.
    #[inline]
    pub fn symbol(&self, value: u8) -> u8 {
        self.encode[value as usize]
    }

    /// Maps a symbol back to its 6-bit value.
    ///
    /// Returns `None` for the delimiter and for any byte outside the alphabet.
    #[inline]
    pub fn value(&self, symbol: u8) -> Option<u8> {
        match self.decode[symbol as usize] {
            INVALID => None,
            value => Some(value),
        }
    }

    /// Encodes arbitrary bytes. See [`crate::encode`].
    pub fn encode(&self, data: &[u8]) -> Result<Vec<u8>, CorruptInputError> {
        encoding::encode(data, self)
    }

    /// Decodes an encoded symbol stream. See [`crate::decode`].
    pub fn decode(&self, encoded: &[u8]) -> Result<Vec<u8>, CorruptInputError> {
        encoding::decode(encoded, self)
    }
}

impl Default for Table {
    fn default() -> Self {
        URL_SAFE.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_safe_round_trips_every_value() {
        for value in 0..64u8 {
            let symbol = URL_SAFE.symbol(value);
            assert_eq!(symbol, URL_SAFE_SYMBOLS[value as usize]);
            assert_eq!(URL_SAFE.value(symbol), Some(value));
        }
    }

    #[test]
    fn test_symbol_ignores_top_bits() {
        for value in 0..64u8 {
            let expected = URL_SAFE.symbol(value);
            assert_eq!(URL_SAFE.symbol(value | 0x40), expected);
            assert_eq!(URL_SAFE.symbol(value | 0x80), expected);
            assert_eq!(URL_SAFE.symbol(value | 0xC0), expected);
        }
    }

    #[test]
    fn test_value_rejects_non_symbols() {
        assert_eq!(URL_SAFE.value(b'.'), None);
        assert_eq!(URL_SAFE.value(b'+'), None);
        assert_eq!(URL_SAFE.value(b'='), None);
        assert_eq!(URL_SAFE.value(0xFF), None);
    }

    #[test]
    fn test_new_matches_predefined() {
        let table = Table::new(URL_SAFE_SYMBOLS, b'.').unwrap();
        assert_eq!(table, URL_SAFE);
        assert_eq!(table.symbols(), URL_SAFE_SYMBOLS);
        assert_eq!(table.delimiter(), b'.');
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        assert_eq!(
            Table::new(&URL_SAFE_SYMBOLS[..63], b'.'),
            Err(AlphabetError::InvalidLength { actual: 63 })
        );
        assert_eq!(
            Table::new(b"", b'.'),
            Err(AlphabetError::InvalidLength { actual: 0 })
        );
    }

    #[test]
    fn test_new_rejects_delimiter_in_alphabet() {
        assert_eq!(
            Table::new(URL_SAFE_SYMBOLS, b'-'),
            Err(AlphabetError::DelimiterInAlphabet {
                delimiter: b'-',
                position: 62,
            })
        );
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let mut symbols = *URL_SAFE_SYMBOLS;
        symbols[10] = b'A';
        assert_eq!(
            Table::new(&symbols, b'.'),
            Err(AlphabetError::DuplicateSymbol {
                symbol: b'A',
                position: 10,
            })
        );
    }

    #[test]
    fn test_construction_is_deterministic() {
        let a = Table::new(URL_SAFE_SYMBOLS, b'.').unwrap();
        let b = Table::new(URL_SAFE_SYMBOLS, b'.').unwrap();
        let input = "mixed 混合 input ¢ 𐄁".as_bytes();
        assert_eq!(a.encode(input).unwrap(), b.encode(input).unwrap());
    }
}
