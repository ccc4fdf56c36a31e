//! RM4SCC encoding
//!
//! Builds a bar-state string from a postcode and delivery point: start bar,
//! one quad per character, the modulo-6 check quad and the stop bar.

/// Quad synthesis from (top, bottom) row values
pub mod quad;

use crate::decoder::checksum::CheckDigit;
use crate::models::symbol::{symbol_value, value_to_rows};
use crate::models::{EncodeResult, START_MARKER, STOP_MARKER, Status};
use quad::push_quad;

/// Shortest accepted postcode
pub const MIN_POSTCODE_LEN: usize = 5;
/// Longest accepted postcode
pub const MAX_POSTCODE_LEN: usize = 7;
/// Delivery point length
pub const DELIVERY_POINT_LEN: usize = 2;

fn validate(postcode: &str, delivery_pt: &str) -> Option<Status> {
    let postcode_len = postcode.chars().count();
    if !(MIN_POSTCODE_LEN..=MAX_POSTCODE_LEN).contains(&postcode_len) {
        return Some(Status::PostcodeLength);
    }
    if delivery_pt.chars().count() != DELIVERY_POINT_LEN {
        return Some(Status::DeliveryPointLength);
    }
    if postcode
        .chars()
        .chain(delivery_pt.chars())
        .any(|c| symbol_value(c).is_none())
    {
        return Some(Status::InvalidCharacter);
    }
    None
}

/// Encode a normalized postcode and delivery point
///
/// Inputs failing validation still produce the quads for every encodable
/// character, but without the check quad and stop bar.
pub fn encode(postcode: &str, delivery_pt: &str) -> EncodeResult {
    let failure = validate(postcode, delivery_pt);

    let mut barcode = String::with_capacity(2 + 4 * (postcode.len() + delivery_pt.len() + 1));
    barcode.push(START_MARKER);

    let mut top_sum = 0u32;
    let mut bottom_sum = 0u32;
    for value in postcode.chars().chain(delivery_pt.chars()).filter_map(symbol_value) {
        let (top, bottom) = value_to_rows(value);
        push_quad(&mut barcode, top, bottom);
        top_sum += top as u32;
        bottom_sum += bottom as u32;
    }

    let status = match failure {
        Some(status) => status,
        None => {
            let check_top = CheckDigit::generate(top_sum);
            let check_bottom = CheckDigit::generate(bottom_sum);
            if cfg!(debug_assertions) && crate::debug::debug_enabled() {
                eprintln!(
                    "[RM4] encode sums=({}, {}) check=({}, {})",
                    top_sum, bottom_sum, check_top, check_bottom
                );
            }
            push_quad(&mut barcode, check_top, check_bottom);
            barcode.push(STOP_MARKER);
            Status::ValidBarcode
        }
    };

    EncodeResult { status, barcode }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_barcodes() {
        let result = encode("LU178XE", "2B");
        assert_eq!(result.status, Status::ValidBarcode);
        assert_eq!(result.barcode, "AFTTFAADDTDAFTFTFTFDAFATDTFFTTDFADFTADAADF");

        let result = encode("AB12C", "3D");
        assert_eq!(result.status, Status::ValidBarcode);
        assert_eq!(result.barcode, "ADADADFTATDAFTDFATAFDDTAFTFADDTFAF");
        assert_eq!(result.barcode.len(), 34);
    }

    #[test]
    fn test_postcode_length() {
        let result = encode("SW1A", "1A");
        assert_eq!(result.status, Status::PostcodeLength);
        assert_eq!(result.barcode, "AFTFTAFDTTDAFDADATDAFDADA");

        assert_eq!(encode("SW1A1AAA", "1A").status, Status::PostcodeLength);
    }

    #[test]
    fn test_postcode_checked_before_delivery_point() {
        assert_eq!(encode("SW1", "123").status, Status::PostcodeLength);
        assert_eq!(encode("SW1A1AA", "123").status, Status::DeliveryPointLength);
        assert_eq!(encode("SW1A1AA", "").status, Status::DeliveryPointLength);
    }

    #[test]
    fn test_invalid_character() {
        let result = encode("SW1A-1A", "1A");
        assert_eq!(result.status, Status::InvalidCharacter);
        // '-' is skipped, no check quad or stop bar
        assert_eq!(result.barcode.len(), 1 + 4 * 8);
        let decoded = crate::decoder::decode(&result.barcode);
        assert_eq!(decoded.status, Some(Status::IncompleteBarcode));
        assert_eq!(decoded.postcode, "SW1A1A1A");
    }

    #[test]
    fn test_empty_input() {
        let result = encode("", "");
        assert_eq!(result.status, Status::PostcodeLength);
        assert_eq!(result.barcode, "A");
    }
}
