//! Errors that occur while compiling a font

use bitfont_types::{DataOffset, MAX_STRIPES};

/// An error aborting a font build.
///
/// Every variant is fatal to the build in progress: no partial blob is ever
/// returned. The capacity variants exist so a caller can retry with a
/// smaller character set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The requested character set resolved to zero glyphs.
    EmptyCharacterSet,
    /// Encoded glyph data grew past what the record's 14-bit data offset
    /// can address.
    CapacityExceeded {
        /// The buffer position the next glyph would have started at.
        bytes: usize,
    },
    /// A fixed baseline would clip pixels above the rendering top.
    UnsatisfiableBaseline { baseline: u8 },
    /// The character set occupies more 8-pixel stripes than the record's
    /// 4-bit stripe fields can address.
    TooManyStripes { stripes: u32 },
    /// More glyphs than the header's 16-bit count can describe.
    TooManyGlyphs { glyphs: usize },
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::EmptyCharacterSet => {
                write!(f, "character set resolved to zero glyphs")
            }
            CompileError::CapacityExceeded { bytes } => write!(
                f,
                "glyph data reached {bytes} bytes, past the {} a glyph record \
                 can address; reduce the character set",
                DataOffset::MAX
            ),
            CompileError::UnsatisfiableBaseline { baseline } => write!(
                f,
                "baseline {baseline} would truncate characters at the top"
            ),
            CompileError::TooManyStripes { stripes } => write!(
                f,
                "font occupies {stripes} stripes but the format addresses at \
                 most {MAX_STRIPES}"
            ),
            CompileError::TooManyGlyphs { glyphs } => write!(
                f,
                "{glyphs} glyphs do not fit the header's 16-bit count"
            ),
        }
    }
}

impl std::error::Error for CompileError {}
