//! Per-glyph encoding
//!
//! Takes one captured glyph, trims the blank border, prices both RLE
//! variants against plain bytes over the trimmed rows, and produces the
//! winning byte stream plus the glyph's metadata record.

use bitfont_types::{Codepoint, DataOffset, RleKind};
use read_bitfont::GlyphRecord;

use crate::canvas::GlyphCanvas;
use crate::rle::{Compressor, Discard};

pub(crate) struct EncodedGlyph {
    /// The finished record, except `data_offset`, which the builder assigns
    /// when it appends `bytes` to the shared buffer.
    pub record: GlyphRecord,
    pub bytes: Vec<u8>,
}

/// Encode one captured glyph.
pub(crate) fn encode_glyph(canvas: &GlyphCanvas, codepoint: Codepoint) -> EncodedGlyph {
    let bounds = canvas.bounds();
    let width = canvas.width();
    let row = bounds.left_margin..width - bounds.right_margin;
    let stripes = bounds.stripe_begin..bounds.stripe_end;

    let mut c2 = Compressor::two_section();
    let mut c4 = Compressor::four_section();
    let mut c2_cost = 0;
    let mut c4_cost = 0;
    for stripe in stripes.clone() {
        for x in row.clone() {
            let b = canvas.column(stripe, x);
            c2.add_byte(&mut Discard, b);
            c4.add_byte(&mut Discard, b);
        }
        c2_cost += c2.finish_line(&mut Discard);
        c4_cost += c4.finish_line(&mut Discard);
    }

    let literal_cost = stripes.len() * row.len();
    let mut bytes = Vec::new();
    let rle_kind = if c2_cost.min(c4_cost) < literal_cost {
        // on a tie between the variants, four-section wins
        let mut winner = if c2_cost < c4_cost {
            Compressor::two_section()
        } else {
            Compressor::four_section()
        };
        for stripe in stripes.clone() {
            for x in row.clone() {
                winner.add_byte(&mut bytes, canvas.column(stripe, x));
            }
            winner.finish_line(&mut bytes);
        }
        winner.kind()
    } else {
        for stripe in stripes.clone() {
            for x in row.clone() {
                bytes.push(canvas.column(stripe, x));
            }
        }
        RleKind::Literal
    };

    log::debug!(
        "{codepoint}: rle2 {c2_cost}, rle4 {c4_cost}, plain {literal_cost} -> {rle_kind:?} ({} bytes)",
        bytes.len()
    );

    EncodedGlyph {
        record: GlyphRecord {
            codepoint,
            width,
            left_margin: bounds.left_margin,
            right_margin: bounds.right_margin,
            stripe_begin: bounds.stripe_begin,
            stripe_end: bounds.stripe_end,
            data_offset: DataOffset::MIN,
            rle_kind,
        },
        bytes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::BitCanvas;

    /// Paint full 8-pixel columns from a per-column byte pattern.
    fn canvas_from_columns(columns: &[u8]) -> GlyphCanvas {
        let mut canvas = GlyphCanvas::new(columns.len() as u8, 1, 0);
        for (x, &bits) in columns.iter().enumerate() {
            for bit in 0..8 {
                if bits & (1 << bit) != 0 {
                    canvas.set_pixel(x as i32, i32::from(bit), true);
                }
            }
        }
        canvas
    }

    #[test]
    fn margin_trim_and_rle_selection() {
        // the canonical single-stripe example: three solid columns inside
        // a blank border compress to one control group
        let canvas = canvas_from_columns(&[0x00, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00]);
        let encoded = encode_glyph(&canvas, Codepoint::new(0x41));
        assert_eq!(encoded.record.left_margin, 1);
        assert_eq!(encoded.record.right_margin, 4);
        assert_eq!(encoded.record.stripe_begin, 0);
        assert_eq!(encoded.record.stripe_end, 1);
        assert_eq!(encoded.record.rle_kind, RleKind::FourSection);
        assert_eq!(encoded.bytes, [0x03, 0xFF]);
    }

    #[test]
    fn busy_data_stays_literal() {
        let columns = [0x11, 0x22, 0x33, 0x44];
        let canvas = canvas_from_columns(&columns);
        let encoded = encode_glyph(&canvas, Codepoint::new(0x23));
        assert_eq!(encoded.record.rle_kind, RleKind::Literal);
        assert_eq!(encoded.bytes, columns);
    }

    #[test]
    fn long_runs_pick_the_two_section_variant() {
        // one value repeated 16x: two-section needs 3 bytes, four-section
        // needs two control groups for 8
        let canvas = canvas_from_columns(&[0x3C; 16]);
        let encoded = encode_glyph(&canvas, Codepoint::new(0x2D));
        assert_eq!(encoded.record.rle_kind, RleKind::TwoSection);
        assert_eq!(encoded.bytes, [0x1F, 0x3C, 0x3C]);
    }

    #[test]
    fn empty_glyph_stores_no_bytes() {
        let canvas = GlyphCanvas::new(5, 2, 0);
        let encoded = encode_glyph(&canvas, Codepoint::new(0x20));
        assert_eq!(encoded.record.width, 5);
        assert_eq!(encoded.record.stripe_begin, 0);
        assert_eq!(encoded.record.stripe_end, 0);
        assert_eq!(encoded.record.rle_kind, RleKind::Literal);
        assert!(encoded.bytes.is_empty());
    }

    #[test]
    fn compressed_never_beats_itself_past_literal() {
        // pathological alternation: whatever wins must not exceed the
        // literal byte count
        let columns: Vec<u8> = (0..32).map(|i| if i % 2 == 0 { 0xAA } else { 0x55 }).collect();
        let canvas = canvas_from_columns(&columns);
        let encoded = encode_glyph(&canvas, Codepoint::new(0x58));
        assert!(encoded.bytes.len() <= columns.len());
        assert_eq!(encoded.record.rle_kind, RleKind::Literal);
    }
}
