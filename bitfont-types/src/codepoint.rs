//! Codepoints as font lookup keys
//!
//! Compiled fonts address glyphs by basic-multilingual-plane scalar value.
//! We use a distinct 16-bit type rather than `char` so that table lookups
//! and record packing never have to reason about the full Unicode range.

/// A 16-bit Unicode scalar value used as a font table lookup key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Codepoint(u16);

impl Codepoint {
    /// The smallest possible codepoint.
    pub const MIN: Codepoint = Codepoint(0);

    /// The largest codepoint addressable by the format.
    pub const MAX: Codepoint = Codepoint(u16::MAX);

    /// Construct a new `Codepoint` from a raw scalar value.
    pub const fn new(raw: u16) -> Self {
        Codepoint(raw)
    }

    /// The codepoint as a u16.
    pub const fn to_u16(self) -> u16 {
        self.0
    }

    pub const fn to_le_bytes(self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    pub const fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Codepoint(u16::from_le_bytes(bytes))
    }

    /// Construct from a `char`, if it lies in the basic multilingual plane.
    pub fn from_char(c: char) -> Option<Self> {
        u16::try_from(u32::from(c)).ok().map(Codepoint)
    }
}

impl From<u16> for Codepoint {
    fn from(src: u16) -> Codepoint {
        Codepoint(src)
    }
}

impl From<Codepoint> for u16 {
    fn from(src: Codepoint) -> u16 {
        src.0
    }
}

impl std::fmt::Display for Codepoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}
