/// Character set carried by a quad: 0-9 then A-Z, indexed by value
const SYMBOL_TABLE: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Placeholder for a group that could not be decoded
pub const UNKNOWN_SYMBOL: char = '?';

/// Value (0-35) of an uppercase letter or digit
pub fn symbol_value(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'A'..='Z' => Some(c as u8 - b'A' + 10),
        _ => None,
    }
}

/// Character for a value in 0-35
pub fn symbol_char(value: u8) -> Option<char> {
    SYMBOL_TABLE.get(value as usize).copied()
}

/// Split a value into its (top, bottom) row values, each in 1-6
pub fn value_to_rows(value: u8) -> (u8, u8) {
    (value / 6 + 1, value % 6 + 1)
}

/// Combine (top, bottom) row values in 1-6 back into a value in 0-35
pub fn rows_to_value(top: u8, bottom: u8) -> u8 {
    top * 6 + bottom - 7
}
