//! RM4SCC decoding
//!
//! Turns a bar-state string into a postcode and delivery point:
//! - Start bar check
//! - Per-quad 2-of-4 validation with error localization
//! - Modulo-6 check group verification

/// Modulo-6 check group arithmetic
pub mod checksum;
/// 2-of-4 validity table
pub mod tables;

use std::collections::BTreeSet;

use crate::models::symbol::{UNKNOWN_SYMBOL, rows_to_value, symbol_char};
use crate::models::{Bar, DecodeResult, START_MARKER, STOP_MARKER, Status};
use checksum::CheckDigit;

/// Shortest complete barcode: start bar, 7 data quads, check quad, stop bar
pub const MIN_LENGTH: usize = 34;
/// Longest barcode: start bar, 9 data quads, check quad, stop bar
pub const MAX_LENGTH: usize = 42;

/// Outcome of reading one quad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroupRead {
    /// One or more symbols are not bars
    Unreadable,
    /// Tops or bottoms break the 2-of-4 rule
    Invalid,
    /// Row values with the redundant low bit dropped, each in 1-6
    Valid { top: u8, bottom: u8 },
}

/// Read the quad starting at `start`, flagging every suspect position
fn read_group(symbols: &[char], start: usize, flagged: &mut BTreeSet<usize>) -> GroupRead {
    let mut top = 0u8;
    let mut bottom = 0u8;
    let mut unreadable = false;

    for (i, &c) in symbols[start..start + 4].iter().enumerate() {
        let bit = 8u8 >> i;
        match Bar::try_from(c) {
            Ok(bar) => {
                if bar.has_top() {
                    top |= bit;
                }
                if bar.has_bottom() {
                    bottom |= bit;
                }
            }
            Err(_) => {
                // Keep going so every bad symbol in the quad is flagged
                flagged.insert(start + i);
                unreadable = true;
            }
        }
    }

    if unreadable {
        return GroupRead::Unreadable;
    }

    let mask = tables::error_mask(top) | tables::error_mask(bottom);
    if mask != 0 {
        if cfg!(debug_assertions) && crate::debug::debug_enabled() {
            eprintln!(
                "[RM4] group at {}: top={:04b} bottom={:04b} suspect={:04b}",
                start, top, bottom, mask
            );
        }
        for i in 0..4 {
            if mask & (8 >> i) != 0 {
                flagged.insert(start + i);
            }
        }
        return GroupRead::Invalid;
    }

    // The low bit is implied by the 2-of-4 rule
    GroupRead::Valid {
        top: top >> 1,
        bottom: bottom >> 1,
    }
}

/// Decode a normalized (uppercase, whitespace-free) bar-state string
///
/// Never fails: problems are reported through [`DecodeResult::status`] and
/// [`DecodeResult::flagged_positions`]. An empty string yields an empty
/// result with no status.
///
/// # Example
/// ```
/// use rm4scc::{Status, decode, encode};
///
/// let encoded = encode("LU17", "8XE");
/// assert_eq!(encoded.status, Status::PostcodeLength);
///
/// let encoded = encode("LU178XE", "2B");
/// let decoded = decode(&encoded.barcode);
/// assert_eq!(decoded.status, Some(Status::ValidBarcode));
/// assert_eq!(decoded.postcode, "LU178XE");
/// assert_eq!(decoded.delivery_pt, "2B");
/// ```
pub fn decode(barcode: &str) -> DecodeResult {
    let symbols: Vec<char> = barcode.chars().collect();
    let len = symbols.len();
    let mut result = DecodeResult::default();

    if len == 0 {
        return result;
    }

    if symbols[0] != START_MARKER {
        result.status = Some(Status::IncorrectStartingBar);
        result.flagged_positions.insert(0);
        return result;
    }

    let mut decoded = String::with_capacity(len / 4);
    let mut top_sum = 0u32;
    let mut bottom_sum = 0u32;
    let mut last_group = None;
    let mut damaged = false;

    let mut pos = 1;
    while pos + 4 <= len {
        match read_group(&symbols, pos, &mut result.flagged_positions) {
            GroupRead::Valid { top, bottom } => {
                decoded.push(symbol_char(rows_to_value(top, bottom)).unwrap_or(UNKNOWN_SYMBOL));
                top_sum += top as u32;
                bottom_sum += bottom as u32;
                last_group = Some((top, bottom));
            }
            GroupRead::Unreadable | GroupRead::Invalid => {
                damaged = true;
                decoded.push(UNKNOWN_SYMBOL);
            }
        }
        pos += 4;
    }

    let terminated = pos + 1 == len && symbols[pos] == STOP_MARKER;
    let status = if damaged {
        Status::DamagedBarcode
    } else if len > MAX_LENGTH {
        Status::BarcodeTooLong
    } else if len >= MIN_LENGTH && terminated {
        match last_group {
            Some((check_top, check_bottom)) => {
                let n = decoded.len();
                result.delivery_pt = decoded[n - 3..n - 1].to_string();
                decoded.truncate(n - 3);

                let matches = CheckDigit::verify(top_sum, check_top)
                    && CheckDigit::verify(bottom_sum, check_bottom);
                if matches {
                    Status::ValidBarcode
                } else {
                    Status::IncorrectCheckDigit
                }
            }
            None => Status::IncompleteBarcode,
        }
    } else {
        Status::IncompleteBarcode
    };

    if cfg!(debug_assertions) && crate::debug::debug_enabled() {
        eprintln!(
            "[RM4] decode len={} groups={} sums=({}, {}) -> {}",
            len,
            (pos - 1) / 4,
            top_sum,
            bottom_sum,
            status
        );
    }

    result.postcode = decoded;
    result.status = Some(status);
    result
}
