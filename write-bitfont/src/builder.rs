//! Assembling the compiled font blob

use std::collections::BTreeSet;

use bitfont_types::{Codepoint, DataOffset, MAX_STRIPES};
use read_bitfont::GlyphRecord;

use crate::canvas::{GlyphCanvas, GlyphSource};
use crate::encode::encode_glyph;
use crate::error::CompileError;
use crate::metrics::MetricsCollector;

/// Compiles a character set into a font blob.
///
/// The builder owns the shared data buffer and the record list for the
/// whole build; glyphs are encoded in ascending codepoint order, which is
/// the order the decoder's binary search depends on. Codepoints may be
/// added in any order and duplicates collapse.
///
/// Nothing is emitted until [`build`](Self::build), and a failing build
/// emits nothing at all.
pub struct FontBuilder<'a, S> {
    source: &'a S,
    codepoints: BTreeSet<Codepoint>,
    fixed_baseline: Option<u8>,
}

impl<'a, S: GlyphSource> FontBuilder<'a, S> {
    pub fn new(source: &'a S) -> FontBuilder<'a, S> {
        FontBuilder {
            source,
            codepoints: BTreeSet::new(),
            fixed_baseline: None,
        }
    }

    /// Pin the output baseline instead of deriving it from the ink.
    ///
    /// This buys pixel-exact vertical alignment across separately compiled
    /// fonts, at the price of failing the build if any glyph reaches above
    /// the implied top row.
    pub fn fixed_baseline(mut self, baseline: u8) -> Self {
        self.fixed_baseline = Some(baseline);
        self
    }

    /// Request every character of `text`.
    ///
    /// Characters outside the basic multilingual plane cannot be addressed
    /// by the format and are skipped with a warning.
    pub fn add_chars(mut self, text: &str) -> Self {
        for c in text.chars() {
            match Codepoint::from_char(c) {
                Some(cp) => {
                    self.codepoints.insert(cp);
                }
                None => log::warn!("excluding {c:?}: outside the basic multilingual plane"),
            }
        }
        self
    }

    pub fn add_codepoint(mut self, codepoint: Codepoint) -> Self {
        self.codepoints.insert(codepoint);
        self
    }

    /// Compile the requested set into a font blob.
    pub fn build(&self) -> Result<Vec<u8>, CompileError> {
        let included: Vec<(Codepoint, u8)> = self
            .codepoints
            .iter()
            .filter_map(|&cp| match self.source.character_width(cp) {
                Some(width) => Some((cp, width)),
                None => {
                    log::warn!("excluding {cp}: not present in the source font");
                    None
                }
            })
            .collect();
        if included.is_empty() {
            return Err(CompileError::EmptyCharacterSet);
        }
        if included.len() > usize::from(u16::MAX) {
            return Err(CompileError::TooManyGlyphs {
                glyphs: included.len(),
            });
        }

        let baseline = self.source.baseline();
        let mut collector = match self.fixed_baseline {
            Some(b) => MetricsCollector::with_top(baseline - i32::from(b)),
            None => MetricsCollector::new(),
        };
        for &(cp, _) in &included {
            self.source.draw_glyph(&mut collector, 0, baseline, false, cp);
        }
        if let Some(b) = self.fixed_baseline {
            if !collector.baseline_satisfied() {
                return Err(CompileError::UnsatisfiableBaseline { baseline: b });
            }
        }
        let metrics = collector.finish();
        if metrics.stripes > u32::from(MAX_STRIPES) {
            return Err(CompileError::TooManyStripes {
                stripes: metrics.stripes,
            });
        }
        let stripes = metrics.stripes as u8;

        let mut records: Vec<GlyphRecord> = Vec::with_capacity(included.len());
        let mut bits: Vec<u8> = Vec::new();
        for (cp, width) in included {
            let mut canvas = GlyphCanvas::new(width, stripes, metrics.top_offset);
            self.source.draw_glyph(&mut canvas, 0, baseline, false, cp);
            let mut encoded = encode_glyph(&canvas, cp);
            encoded.record.data_offset = DataOffset::checked_new(bits.len())
                .ok_or(CompileError::CapacityExceeded { bytes: bits.len() })?;
            bits.extend_from_slice(&encoded.bytes);
            records.push(encoded.record);
        }

        let mut blob =
            Vec::with_capacity(4 + records.len() * GlyphRecord::RAW_LEN + bits.len());
        blob.extend_from_slice(&(records.len() as u16).to_le_bytes());
        blob.push((baseline - metrics.top_offset).clamp(0, 255) as u8);
        blob.push(stripes);
        for record in &records {
            blob.extend_from_slice(&record.to_bytes());
        }
        blob.extend_from_slice(&bits);
        Ok(blob)
    }
}
