use crate::decoder::tables;
use crate::models::Bar;

/// Complete a row value (1-6) into its 2-of-4 pattern
///
/// The value occupies the upper three bits; exactly one choice of low bit
/// satisfies the 2-of-4 rule.
fn row_pattern(value: u8) -> u8 {
    let pattern = value << 1;
    if tables::is_valid(pattern) {
        pattern
    } else {
        pattern | 1
    }
}

/// Build the four bars for a (top, bottom) pair, each in 1-6
pub fn make_quad(top: u8, bottom: u8) -> [Bar; 4] {
    let top = row_pattern(top);
    let bottom = row_pattern(bottom);

    let mut quad = [Bar::Tracker; 4];
    for (i, bar) in quad.iter_mut().enumerate() {
        let mask = 8u8 >> i;
        *bar = Bar::from_extents(top & mask != 0, bottom & mask != 0);
    }
    quad
}

/// Append the symbols for a (top, bottom) pair to `out`
pub fn push_quad(out: &mut String, top: u8, bottom: u8) {
    out.extend(make_quad(top, bottom).map(Bar::to_char));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_patterns_are_valid() {
        let patterns: Vec<u8> = (1..=6).map(row_pattern).collect();
        assert_eq!(patterns, tables::VALID_PATTERNS);
    }

    #[test]
    fn test_make_quad() {
        // '0': top 1, bottom 1 -> 0011 / 0011
        assert_eq!(
            make_quad(1, 1),
            [Bar::Tracker, Bar::Tracker, Bar::Full, Bar::Full]
        );
        // 'Z': top 6, bottom 6 -> 1100 / 1100
        let mut s = String::new();
        push_quad(&mut s, 6, 6);
        assert_eq!(s, "FFTT");
        // 'A': top 2, bottom 5 -> 0101 / 1010
        push_quad(&mut s, 2, 5);
        assert_eq!(&s[4..], "DADA");
    }
}
