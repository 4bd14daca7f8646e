//! A view over a compiled font blob

use bitfont_types::Codepoint;

use crate::glyph::GlyphRecord;

/// Length of the blob header: glyph count (u16), baseline, stripes.
const HEADER_LEN: usize = 4;

/// A compiled bitmap font.
///
/// This is a wrapper around a byte slice in the compiled blob layout:
/// a 4-byte header, the packed glyph records sorted by codepoint, then the
/// shared glyph data buffer. Nothing is copied out of the slice, so a font
/// embedded as a `const` in ROM costs no RAM beyond this struct.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BitFont<'a> {
    baseline: u8,
    stripes: u8,
    /// `available_glyphs` packed records.
    records: &'a [u8],
    /// The shared glyph data buffer; records point into this.
    bits: &'a [u8],
}

impl<'a> BitFont<'a> {
    /// Parse a compiled font blob, validating its bounds.
    ///
    /// Record contents are not validated here: a font produced by the
    /// compiler is well-formed by construction, and the decode path trusts
    /// it rather than re-checking every call.
    pub fn read(data: &'a [u8]) -> Result<BitFont<'a>, ReadError> {
        let header = data.get(..HEADER_LEN).ok_or(ReadError::OutOfBounds)?;
        let available_glyphs = u16::from_le_bytes([header[0], header[1]]);
        let record_bytes = available_glyphs as usize * GlyphRecord::RAW_LEN;
        let records = data
            .get(HEADER_LEN..HEADER_LEN + record_bytes)
            .ok_or(ReadError::InvalidRecordLen)?;
        Ok(BitFont {
            baseline: header[2],
            stripes: header[3],
            records,
            bits: &data[HEADER_LEN + record_bytes..],
        })
    }

    /// Number of glyphs in this font.
    pub fn available_glyphs(&self) -> u16 {
        (self.records.len() / GlyphRecord::RAW_LEN) as u16
    }

    /// Pixels from the rendering top to the text baseline.
    pub fn baseline(&self) -> u8 {
        self.baseline
    }

    /// Font height in 8-pixel stripes.
    pub fn stripes(&self) -> u8 {
        self.stripes
    }

    /// The record at `index`, in codepoint order.
    pub fn glyph(&self, index: u16) -> Option<GlyphRecord> {
        let start = index as usize * GlyphRecord::RAW_LEN;
        let bytes = self.records.get(start..start + GlyphRecord::RAW_LEN)?;
        // the slice is exactly RAW_LEN long
        let mut raw = [0u8; GlyphRecord::RAW_LEN];
        raw.copy_from_slice(bytes);
        Some(GlyphRecord::from_bytes(raw))
    }

    /// Find the record for `codepoint`, or `None` if this font lacks it.
    ///
    /// A missing glyph is a defined result, not an error; rendering layers
    /// typically substitute a replacement character or skip the advance.
    pub fn find_glyph(&self, codepoint: Codepoint) -> Option<GlyphRecord> {
        let mut lo = 0u16;
        let mut hi = self.available_glyphs();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let start = mid as usize * GlyphRecord::RAW_LEN;
            // records lead with their codepoint; no need to unpack the rest
            let key = Codepoint::from_le_bytes([self.records[start], self.records[start + 1]]);
            match codepoint.cmp(&key) {
                core::cmp::Ordering::Less => hi = mid,
                core::cmp::Ordering::Greater => lo = mid + 1,
                core::cmp::Ordering::Equal => return self.glyph(mid),
            }
        }
        None
    }

    /// The glyph data stream starting at `glyph`'s offset.
    pub(crate) fn data_from(&self, glyph: &GlyphRecord) -> &'a [u8] {
        self.bits.get(glyph.data_offset.to_usize()..).unwrap_or(&[])
    }
}

/// An error that occurs when reading a compiled font blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// The blob is shorter than its header.
    OutOfBounds,
    /// The header's glyph count does not fit in the blob.
    InvalidRecordLen,
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadError::OutOfBounds => write!(f, "Blob too short for its header"),
            ReadError::InvalidRecordLen => {
                write!(f, "Glyph count inconsistent with blob length")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReadError {}

#[cfg(test)]
mod tests {
    use super::*;
    use bitfont_types::{DataOffset, RleKind};

    fn blob(records: &[GlyphRecord], bits: &[u8]) -> Vec<u8> {
        let mut out = vec![];
        out.extend_from_slice(&(records.len() as u16).to_le_bytes());
        out.push(9); // baseline
        out.push(2); // stripes
        for record in records {
            out.extend_from_slice(&record.to_bytes());
        }
        out.extend_from_slice(bits);
        out
    }

    fn record(codepoint: u16) -> GlyphRecord {
        GlyphRecord {
            codepoint: Codepoint::new(codepoint),
            width: 4,
            stripe_end: 1,
            ..Default::default()
        }
    }

    #[test]
    fn header_fields() {
        let data = blob(&[record(0x41)], &[0xFF; 4]);
        let font = BitFont::read(&data).unwrap();
        assert_eq!(font.available_glyphs(), 1);
        assert_eq!(font.baseline(), 9);
        assert_eq!(font.stripes(), 2);
    }

    #[test]
    fn truncated_header() {
        assert_eq!(BitFont::read(&[1, 0, 9]), Err(ReadError::OutOfBounds));
        assert!(BitFont::read(&[]).is_err());
    }

    #[test]
    fn glyph_count_out_of_bounds() {
        // claims 4 glyphs but holds bytes for one record
        let mut data = blob(&[record(0x41)], &[]);
        data[0] = 4;
        assert_eq!(BitFont::read(&data), Err(ReadError::InvalidRecordLen));
    }

    #[test]
    fn empty_font_reads() {
        let data = blob(&[], &[]);
        let font = BitFont::read(&data).unwrap();
        assert_eq!(font.available_glyphs(), 0);
        assert_eq!(font.find_glyph(Codepoint::new(0x41)), None);
    }

    #[test]
    fn find_single_glyph() {
        let data = blob(&[record(0x41)], &[]);
        let font = BitFont::read(&data).unwrap();
        assert_eq!(font.find_glyph(Codepoint::new(0x41)), Some(record(0x41)));
        assert_eq!(font.find_glyph(Codepoint::new(0x40)), None);
        assert_eq!(font.find_glyph(Codepoint::new(0x42)), None);
    }

    #[test]
    fn find_among_two() {
        let data = blob(&[record(0x41), record(0x43)], &[]);
        let font = BitFont::read(&data).unwrap();
        assert_eq!(font.find_glyph(Codepoint::new(0x41)), Some(record(0x41)));
        assert_eq!(font.find_glyph(Codepoint::new(0x43)), Some(record(0x43)));
        assert_eq!(font.find_glyph(Codepoint::new(0x42)), None);
    }

    #[test]
    fn find_scales_and_handles_extremes() {
        // adjacent codepoints across the full 16-bit range, including both ends
        let records: Vec<_> = (0..300u16)
            .map(|i| record(i * 219))
            .chain([record(0xFFFE), record(0xFFFF)])
            .collect();
        let data = blob(&records, &[]);
        let font = BitFont::read(&data).unwrap();
        for rec in &records {
            assert_eq!(font.find_glyph(rec.codepoint), Some(*rec));
        }
        assert_eq!(font.find_glyph(Codepoint::new(1)), None);
        assert_eq!(font.find_glyph(Codepoint::new(0xFFFD)), None);
    }

    #[test]
    fn record_fields_survive_the_blob() {
        let fancy = GlyphRecord {
            codepoint: Codepoint::new(0x263A),
            width: 13,
            left_margin: 2,
            right_margin: 1,
            stripe_begin: 1,
            stripe_end: 2,
            data_offset: DataOffset::new(5),
            rle_kind: RleKind::FourSection,
        };
        let data = blob(&[fancy], &[0; 16]);
        let font = BitFont::read(&data).unwrap();
        assert_eq!(font.find_glyph(fancy.codepoint), Some(fancy));
    }
}
