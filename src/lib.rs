//! A base64 variant for text that mixes ASCII with multi-byte UTF-8.
//!
//! Runs of ASCII bytes are packed at seven bits per byte, so six bytes become
//! seven symbols. Runs of non-ASCII bytes are stripped down to their UTF-8
//! payload bits, so every codepoint becomes three symbols, and are wrapped in
//! a delimiter byte. There is no padding and no line wrapping.
//!
//! ```
//! let encoded = nb64::encode("Hi 世界".as_bytes(), &nb64::URL_SAFE).unwrap();
//! assert_eq!(encoded, b"kaUA.E4WHVM.");
//!
//! let decoded = nb64::decode(&encoded, &nb64::URL_SAFE).unwrap();
//! assert_eq!(decoded, "Hi 世界".as_bytes());
//! ```

mod core;
mod encoders;
pub mod prelude;

pub use crate::core::config::{AlphabetConfig, AlphabetRegistry, FALLBACK_ALPHABET, Settings};
pub use crate::core::table::{ALPHABET_LEN, Table, URL_SAFE, URL_SAFE_DELIMITER, URL_SAFE_SYMBOLS};
pub use encoders::algorithms::{
    AlphabetError, AlphabetNotFoundError, CorruptInputError, find_closest_alphabet,
};
pub use encoders::encoding::{decoded_len_bound, encoded_len_bound};

/// Encodes `data` with `table`.
///
/// Bytes <= 127 may be arbitrary. Bytes > 127 must form well-formed UTF-8
/// sequences no larger than U+3FFFF; otherwise the error points at the first
/// byte that breaks that rule.
pub fn encode(data: &[u8], table: &Table) -> Result<Vec<u8>, CorruptInputError> {
    encoders::encoding::encode(data, table)
}

/// Decodes a symbol stream produced by [`encode`] with the same table.
pub fn decode(encoded: &[u8], table: &Table) -> Result<Vec<u8>, CorruptInputError> {
    encoders::encoding::decode(encoded, table)
}
