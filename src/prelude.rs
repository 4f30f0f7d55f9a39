//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use nb64::prelude::*;
//!
//! let registry = AlphabetRegistry::load_default().unwrap();
//! let table = registry.table("standard").unwrap();
//! let encoded = encode(b"Hello", &table).unwrap();
//! assert_eq!(decode(&encoded, &table).unwrap(), b"Hello");
//! ```

pub use crate::{
    AlphabetConfig, AlphabetError, AlphabetNotFoundError, AlphabetRegistry, CorruptInputError,
    Table, URL_SAFE, decode, encode,
};
