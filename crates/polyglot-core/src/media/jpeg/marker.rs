//! JPEG markers used when splicing a segment into a stream (ITU T.81 Table B.1).

/// Every marker is introduced by this byte.
pub const MARKER_PREFIX: u8 = 0xFF;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum Marker {
    /// Start of Image.
    SOI,
    /// Comment.
    COM,
}

impl Marker {
    pub fn to_u8(self) -> u8 {
        match self {
            Marker::SOI => 0xD8,
            Marker::COM => 0xFE,
        }
    }

    /// The two bytes that introduce this marker in a stream.
    pub fn to_bytes(self) -> [u8; 2] {
        [MARKER_PREFIX, self.to_u8()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_to_bytes() {
        assert_eq!(Marker::SOI.to_bytes(), [0xFF, 0xD8]);
        assert_eq!(Marker::COM.to_bytes(), [0xFF, 0xFE]);
    }
}
