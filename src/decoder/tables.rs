// Validity table for one row of a quad. Each group of 4 bars yields two 4-bit
// patterns (tops and bottoms); a pattern is valid when exactly two bits are set,
// giving 6 valid patterns per row and 36 combinations per quad.
//
// Index: 4-bit pattern, bit 3 = first bar. Entry 0 means valid; otherwise the
// entry masks the bits most likely in error assuming a single flipped bit.
// 0000 and 1111 have no nearest valid neighbour, so every bit is suspect.
const GROUP_TABLE: [u8; 16] = [15, 14, 13, 0, 11, 0, 0, 7, 7, 0, 0, 11, 0, 13, 14, 15];

/// The six 2-of-4 patterns
pub const VALID_PATTERNS: [u8; 6] = [0b0011, 0b0101, 0b0110, 0b1001, 0b1010, 0b1100];

/// Error mask for a 4-bit row pattern, 0 when the pattern is valid
pub fn error_mask(pattern: u8) -> u8 {
    GROUP_TABLE[(pattern & 0x0F) as usize]
}

/// Whether a 4-bit row pattern satisfies the 2-of-4 rule
pub fn is_valid(pattern: u8) -> bool {
    error_mask(pattern) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_iff_two_bits() {
        for p in 0u8..16 {
            assert_eq!(is_valid(p), p.count_ones() == 2, "pattern {p:04b}");
            assert_eq!(is_valid(p), VALID_PATTERNS.contains(&p));
        }
    }

    #[test]
    fn test_complement_symmetry() {
        for p in 0u8..16 {
            assert_eq!(error_mask(p), error_mask(15 - p), "pattern {p:04b}");
        }
    }

    #[test]
    fn test_masks_point_at_single_flip_fixes() {
        for p in 0u8..16 {
            let mask = error_mask(p);
            match p.count_ones() {
                2 => assert_eq!(mask, 0),
                0 | 4 => assert_eq!(mask, 15),
                _ => {
                    // Every flagged bit, flipped alone, restores a valid pattern
                    for bit in 0..4 {
                        let flagged = mask & (1 << bit) != 0;
                        assert_eq!(flagged, is_valid(p ^ (1 << bit)), "pattern {p:04b} bit {bit}");
                    }
                }
            }
        }
    }
}
