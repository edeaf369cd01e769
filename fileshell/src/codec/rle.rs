//! Run-length codec.
//!
//! The encoded form is a plain concatenation of `<symbol><decimal count>`
//! pairs, e.g. `aaabbbccccd` becomes `a3b3c4d1`. There is no delimiter
//! between a count and the next symbol, so a digit symbol cannot be told
//! apart from a continuation of the previous count. Content containing
//! ASCII digits is therefore not guaranteed to survive a round trip.

use std::io::{self, Write};

/// Largest count accepted by the decoder (the 32-bit signed range).
pub const MAX_RUN_COUNT: u32 = i32::MAX as u32;

/// A maximal run of one repeated byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub symbol: u8,
    pub count: u32,
}

/// Errors raised while parsing an encoded run stream.
//
// // 解析压缩数据时可能发生的错误。
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RleError {
    /// A digit was found where a symbol was expected.
    #[error("Unexpected digit '{digit}' at offset {offset}; data may be corrupted")]
    UnexpectedDigit { digit: char, offset: usize },

    /// A symbol was not followed by any digits.
    #[error("Missing count for symbol '{symbol}' at offset {offset}")]
    MissingCount { symbol: char, offset: usize },

    /// A count does not fit the supported range.
    #[error("Invalid count '{count}' at offset {offset}")]
    CountOverflow { count: String, offset: usize },
}

/// Splits `data` into maximal runs, left to right.
pub fn runs(data: &[u8]) -> Vec<Run> {
    let mut result: Vec<Run> = Vec::new();
    for &byte in data {
        match result.last_mut() {
            Some(run) if run.symbol == byte && run.count < MAX_RUN_COUNT => run.count += 1,
            _ => result.push(Run { symbol: byte, count: 1 }),
        }
    }
    result
}

/// Parses an encoded stream back into its runs without expanding them.
pub fn parse_runs(encoded: &[u8]) -> Result<Vec<Run>, RleError> {
    let mut result = Vec::new();
    let mut pos = 0;

    while pos < encoded.len() {
        let symbol = encoded[pos];
        if symbol.is_ascii_digit() {
            return Err(RleError::UnexpectedDigit {
                digit: symbol as char,
                offset: pos,
            });
        }

        let digits_start = pos + 1;
        let digits_len = encoded[digits_start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits_len == 0 {
            return Err(RleError::MissingCount {
                symbol: symbol as char,
                offset: pos,
            });
        }

        let digits = &encoded[digits_start..digits_start + digits_len];
        // 只包含 ASCII 数字，转换不会失败
        let text = String::from_utf8_lossy(digits);
        let count = text
            .parse::<u32>()
            .ok()
            .filter(|c| *c <= MAX_RUN_COUNT)
            .ok_or_else(|| RleError::CountOverflow {
                count: text.to_string(),
                offset: digits_start,
            })?;

        result.push(Run { symbol, count });
        pos = digits_start + digits_len;
    }

    Ok(result)
}

/// Encodes `data` as concatenated `<symbol><count>` pairs.
///
/// Empty input yields empty output.
pub fn compress(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    for run in runs(data) {
        out.push(run.symbol);
        out.extend_from_slice(run.count.to_string().as_bytes());
    }
    out
}

/// Expands an encoded stream produced by [`compress`].
///
/// A zero count is accepted and contributes nothing to the output. The whole
/// result is held in memory; use [`expand_into`] for untrusted input.
pub fn decompress(encoded: &[u8]) -> Result<Vec<u8>, RleError> {
    let parsed = parse_runs(encoded)?;
    let mut out = Vec::new();
    for run in parsed {
        out.extend(std::iter::repeat_n(run.symbol, run.count as usize));
    }
    Ok(out)
}

/// Size of the fill buffer used by [`expand_into`].
const EXPAND_CHUNK: usize = 64 * 1024;

/// Writes the expansion of already parsed `runs` to `out`, one run at a time.
///
/// Memory use is bounded by a fixed chunk regardless of the counts. Returns
/// the number of bytes written.
pub fn expand_into<W: Write + ?Sized>(runs: &[Run], out: &mut W) -> io::Result<u64> {
    let mut chunk = [0u8; EXPAND_CHUNK];
    let mut written = 0u64;
    for run in runs {
        let mut remaining = run.count as usize;
        let fill = remaining.min(EXPAND_CHUNK);
        chunk[..fill].fill(run.symbol);
        while remaining > 0 {
            let n = remaining.min(EXPAND_CHUNK);
            out.write_all(&chunk[..n])?;
            remaining -= n;
        }
        written += u64::from(run.count);
    }
    Ok(written)
}
