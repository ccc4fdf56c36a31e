use std::collections::BTreeSet;
use std::fmt;

/// Outcome reported by the decoder or encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Barcode does not open with an ascender
    IncorrectStartingBar,
    /// At least one group holds an unknown symbol or breaks the 2-of-4 rule
    DamagedBarcode,
    /// More than 42 symbols
    BarcodeTooLong,
    /// Too short, or the stop bar is missing or misplaced
    IncompleteBarcode,
    /// Well-formed, but the check group does not match
    IncorrectCheckDigit,
    /// Well-formed with a matching check group
    ValidBarcode,
    /// Postcode outside 5-7 characters
    PostcodeLength,
    /// Delivery point not exactly 2 characters
    DeliveryPointLength,
    /// Encoder input contains something other than A-Z or 0-9
    InvalidCharacter,
}

impl Status {
    /// Human readable message
    pub fn message(&self) -> &'static str {
        match self {
            Status::IncorrectStartingBar => "Incorrect starting bar",
            Status::DamagedBarcode => "Damaged barcode",
            Status::BarcodeTooLong => "Barcode too long",
            Status::IncompleteBarcode => "Incomplete barcode",
            Status::IncorrectCheckDigit => "Incorrect check digit",
            Status::ValidBarcode => "Valid barcode",
            Status::PostcodeLength => "Postcode must be between 5 and 7 characters long",
            Status::DeliveryPointLength => "Delivery point must be 2 characters long",
            Status::InvalidCharacter => {
                "Postcode and delivery point may only contain letters and digits"
            }
        }
    }

    /// True only for [`Status::ValidBarcode`]
    pub fn is_valid(&self) -> bool {
        matches!(self, Status::ValidBarcode)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of decoding one bar-state string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeResult {
    /// `None` when the input was empty (nothing attempted)
    pub status: Option<Status>,
    /// Decoded postcode; the whole decoded sequence unless the barcode is complete
    pub postcode: String,
    /// Two character delivery point, empty unless the barcode is complete
    pub delivery_pt: String,
    /// Indices into the bar-state string implicated in an error
    pub flagged_positions: BTreeSet<usize>,
}

impl DecodeResult {
    /// Status message, empty when nothing was attempted
    pub fn message(&self) -> &'static str {
        self.status.map_or("", |s| s.message())
    }

    /// Whether the barcode decoded with a matching check group
    pub fn is_valid(&self) -> bool {
        self.status.is_some_and(|s| s.is_valid())
    }
}

/// Result of encoding a postcode and delivery point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeResult {
    /// Validation outcome
    pub status: Status,
    /// Bar-state string
    ///
    /// Only a valid result carries the check quad and stop bar; otherwise this
    /// is the start bar followed by the data quads, which decodes as incomplete.
    pub barcode: String,
}

impl EncodeResult {
    /// Status message
    pub fn message(&self) -> &'static str {
        self.status.message()
    }

    /// Whether both inputs passed validation
    pub fn is_valid(&self) -> bool {
        self.status.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        assert_eq!(Status::ValidBarcode.to_string(), "Valid barcode");
        assert_eq!(Status::IncorrectStartingBar.message(), "Incorrect starting bar");
        assert!(!Status::IncorrectCheckDigit.is_valid());
    }

    #[test]
    fn test_empty_decode_result() {
        let result = DecodeResult::default();
        assert_eq!(result.message(), "");
        assert!(!result.is_valid());
        assert!(result.flagged_positions.is_empty());
    }
}
