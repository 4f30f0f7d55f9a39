//! Run scanning shared by the encoder and decoder.
//!
//! Plain input alternates between low runs (bytes <= 127) and high runs
//! (bytes > 127). Encoded output carries low runs inline and wraps each high
//! run in a pair of delimiters.

use crate::core::table::Table;
use crate::encoders::algorithms::errors::CorruptInputError;
use crate::encoders::algorithms::{ascii, utf8};

/// Upper bound on the encoded length of `n` input bytes: `ceil(7n / 3)`.
///
/// The worst case is a one-byte ASCII run followed by a 2-byte codepoint,
/// which turns three bytes into seven symbols.
pub fn encoded_len_bound(n: usize) -> usize {
    (n * 7).div_ceil(3)
}

/// Upper bound on the decoded length of `n` encoded symbols.
///
/// Reached by high runs of 4-byte codepoints, where three symbols expand to
/// four bytes.
pub fn decoded_len_bound(n: usize) -> usize {
    (n * 4).div_ceil(3)
}

pub fn encode(data: &[u8], table: &Table) -> Result<Vec<u8>, CorruptInputError> {
    let mut out = Vec::with_capacity(encoded_len_bound(data.len()));
    let mut pos = 0;

    while pos < data.len() {
        let low_len = data[pos..].iter().take_while(|&&b| b <= 0x7F).count();
        ascii::encode_run(&data[pos..pos + low_len], table, &mut out);
        pos += low_len;

        let high_len = data[pos..].iter().take_while(|&&b| b > 0x7F).count();
        if high_len > 0 {
            out.push(table.delimiter());
            utf8::encode_run(&data[pos..pos + high_len], pos, table, &mut out)?;
            out.push(table.delimiter());
            pos += high_len;
        }
    }

    Ok(out)
}

pub fn decode(encoded: &[u8], table: &Table) -> Result<Vec<u8>, CorruptInputError> {
    let mut out = Vec::with_capacity(decoded_len_bound(encoded.len()));
    let mut values = Vec::new();
    let mut pos = 0;

    while pos < encoded.len() {
        pos = scan_run(encoded, pos, table, &mut values)?;
        ascii::decode_run(&values, &mut out);
        if pos == encoded.len() {
            break;
        }

        // opening delimiter
        let start = pos + 1;
        let end = scan_run(encoded, start, table, &mut values)?;
        if end == encoded.len() {
            // never closed
            return Err(CorruptInputError::new(end));
        }
        if values.len() % utf8::SYMBOLS_PER_CODEPOINT != 0 {
            return Err(CorruptInputError::new(end));
        }
        utf8::decode_run(&values, &mut out);
        pos = end + 1;
    }

    Ok(out)
}

/// Collects the 6-bit values of the symbols from `start` up to the next
/// delimiter or the end of input, and returns where the scan stopped.
///
/// Fails on the first byte that is neither a symbol nor the delimiter.
fn scan_run(
    encoded: &[u8],
    start: usize,
    table: &Table,
    values: &mut Vec<u8>,
) -> Result<usize, CorruptInputError> {
    values.clear();
    let delimiter = table.delimiter();

    for (i, &symbol) in encoded.iter().enumerate().skip(start) {
        if symbol == delimiter {
            return Ok(i);
        }
        let value = table
            .value(symbol)
            .ok_or_else(|| CorruptInputError::new(i))?;
        values.push(value);
    }

    Ok(encoded.len())
}
