pub mod ascii;
pub mod errors;
pub mod utf8;

// Re-export error types for public API
pub use errors::{AlphabetError, AlphabetNotFoundError, CorruptInputError, find_closest_alphabet};
