use crate::error::Rm4Error;

/// Symbol that opens every barcode (an ascender bar)
pub const START_MARKER: char = 'A';
/// Symbol that closes a complete barcode (a full bar)
pub const STOP_MARKER: char = 'F';

/// One of the four bar states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bar {
    /// Extends above the tracker only
    Ascender,
    /// Extends below the tracker only
    Descender,
    /// Extends both above and below
    Full,
    /// Short bar, tracker only
    Tracker,
}

impl Bar {
    /// Parse a bar from its symbol (`A`, `D`, `F`, `T`, or `S` for tracker)
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Bar::Ascender),
            'D' => Some(Bar::Descender),
            'F' => Some(Bar::Full),
            'T' | 'S' => Some(Bar::Tracker),
            _ => None,
        }
    }

    /// Build a bar from its top and bottom extension flags
    pub fn from_extents(top: bool, bottom: bool) -> Self {
        match (top, bottom) {
            (true, true) => Bar::Full,
            (true, false) => Bar::Ascender,
            (false, true) => Bar::Descender,
            (false, false) => Bar::Tracker,
        }
    }

    /// Canonical symbol for this bar
    pub fn to_char(self) -> char {
        match self {
            Bar::Ascender => 'A',
            Bar::Descender => 'D',
            Bar::Full => 'F',
            Bar::Tracker => 'T',
        }
    }

    /// Whether the bar reaches the ascender row
    pub fn has_top(self) -> bool {
        matches!(self, Bar::Ascender | Bar::Full)
    }

    /// Whether the bar reaches the descender row
    pub fn has_bottom(self) -> bool {
        matches!(self, Bar::Descender | Bar::Full)
    }
}

impl TryFrom<char> for Bar {
    type Error = Rm4Error;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Bar::from_char(c).ok_or(Rm4Error::InvalidBar(c))
    }
}

impl From<Bar> for char {
    fn from(bar: Bar) -> char {
        bar.to_char()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_symbols() {
        for bar in [Bar::Ascender, Bar::Descender, Bar::Full, Bar::Tracker] {
            assert_eq!(Bar::from_char(bar.to_char()), Some(bar));
        }
        assert_eq!(Bar::from_char('S'), Some(Bar::Tracker));
        assert_eq!(Bar::from_char('a'), None);
        assert!(matches!(Bar::try_from('X'), Err(Rm4Error::InvalidBar('X'))));
    }

    #[test]
    fn test_bar_extents() {
        assert!(Bar::Full.has_top() && Bar::Full.has_bottom());
        assert!(Bar::Ascender.has_top() && !Bar::Ascender.has_bottom());
        assert!(!Bar::Descender.has_top() && Bar::Descender.has_bottom());
        assert!(!Bar::Tracker.has_top() && !Bar::Tracker.has_bottom());
        assert_eq!(Bar::from_extents(false, true), Bar::Descender);
    }
}
