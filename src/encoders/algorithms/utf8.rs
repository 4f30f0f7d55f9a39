//! Payload extraction for runs of bytes > 127.
//!
//! The run must be well-formed UTF-8 made of 2-, 3- and 4-byte sequences.
//! Length-prefix bits are stripped and every codepoint is normalized to three
//! 6-bit symbols (18 payload bits). Only 4-byte sequences led by `0xF0` fit,
//! which caps support at U+3FFFF.

use crate::core::table::Table;
use crate::encoders::algorithms::errors::CorruptInputError;

/// Symbols emitted per codepoint.
pub const SYMBOLS_PER_CODEPOINT: usize = 3;

/// The only 4-byte lead byte whose payload fits in 18 bits.
pub const MINIMAL_FOUR_BYTE_LEAD: u8 = 0xF0;

/// Appends the symbols for `run` to `out`, without the surrounding delimiters.
///
/// `start` is the offset of `run` within the whole input, used for error
/// reporting.
pub fn encode_run(
    run: &[u8],
    start: usize,
    table: &Table,
    out: &mut Vec<u8>,
) -> Result<(), CorruptInputError> {
    // index of the first byte that breaks UTF-8 well-formedness, if any
    let malformed_at = std::str::from_utf8(run).err().map(|e| e.valid_up_to());

    for (i, &b) in run.iter().enumerate() {
        if malformed_at == Some(i) {
            return Err(CorruptInputError::new(start + i));
        }
        match b {
            // continuation: 10xxxxxx
            0x80..=0xBF => out.push(table.symbol(b & 0x3F)),
            // 2-byte lead: 110xxxxx
            0xC0..=0xDF => {
                out.push(table.symbol(0));
                out.push(table.symbol(b & 0x1F));
            }
            // 3-byte lead: 1110xxxx
            0xE0..=0xEF => out.push(table.symbol(b & 0x0F)),
            MINIMAL_FOUR_BYTE_LEAD => {}
            _ => return Err(CorruptInputError::new(start + i)),
        }
    }

    Ok(())
}

/// Appends the UTF-8 bytes for a run of decoded 6-bit `values` to `out`.
///
/// `values.len()` must be a multiple of three. The original sequence length
/// is inferred from payload ranges alone:
/// - `d0 == 0 && d1 < 0x20` is a 2-byte sequence
/// - `d0 >= 0x10` is a 4-byte sequence led by `0xF0`
/// - anything else is a 3-byte sequence
///
/// A 3-byte sequence `E0 80..9F xx` would land in the 2-byte branch. That form
/// is an overlong encoding, so [`encode_run`] never produces it.
pub fn decode_run(values: &[u8], out: &mut Vec<u8>) {
    for triple in values.chunks_exact(SYMBOLS_PER_CODEPOINT) {
        let (d0, d1, d2) = (triple[0], triple[1], triple[2]);
        if d0 == 0 && d1 < 0x20 {
            out.extend_from_slice(&[0xC0 | d1, 0x80 | d2]);
        } else if d0 >= 0x10 {
            out.extend_from_slice(&[MINIMAL_FOUR_BYTE_LEAD, 0x80 | d0, 0x80 | d1, 0x80 | d2]);
        } else {
            out.extend_from_slice(&[0xE0 | d0, 0x80 | d1, 0x80 | d2]);
        }
    }
}
