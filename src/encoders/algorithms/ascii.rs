//! Packing for runs of bytes <= 127.
//!
//! Such bytes carry seven significant bits, so six of them (42 bits) fit
//! exactly into seven 6-bit symbols. A short trailing group of `m` bytes
//! becomes `m + 1` symbols with the last symbol zero-filled on the right.

use crate::core::table::Table;

/// Input bytes per full group.
pub const BYTES_PER_GROUP: usize = 6;
/// Symbols per full group.
pub const SYMBOLS_PER_GROUP: usize = 7;

/// Appends the symbols for `run` to `out`. Every byte of `run` must be <= 127.
pub fn encode_run(run: &[u8], table: &Table, out: &mut Vec<u8>) {
    for group in run.chunks(BYTES_PER_GROUP) {
        let m = group.len();

        let mut acc = 0u64;
        for &b in group {
            acc = (acc << 7) | u64::from(b & 0x7F);
        }
        // 7m bits of payload, m + 1 symbols of output
        acc <<= BYTES_PER_GROUP - m;

        for k in (0..=m).rev() {
            out.push(table.symbol((acc >> (6 * k)) as u8));
        }
    }
}

/// Appends the bytes for a run of decoded 6-bit `values` to `out`.
///
/// A group of `m` values yields `m - 1` bytes; the leftover low bits of the
/// last value are padding and are dropped.
pub fn decode_run(values: &[u8], out: &mut Vec<u8>) {
    for group in values.chunks(SYMBOLS_PER_GROUP) {
        let m = group.len();

        let mut acc = 0u64;
        for &v in group {
            acc = (acc << 6) | u64::from(v & 0x3F);
        }
        acc >>= SYMBOLS_PER_GROUP - m;

        for k in (0..m - 1).rev() {
            out.push(((acc >> (7 * k)) & 0x7F) as u8);
        }
    }
}
