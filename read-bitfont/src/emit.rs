//! Streaming glyph decoding
//!
//! Decoding never materializes a glyph bitmap: bytes are pushed through a
//! caller-supplied [`StripeSink`] as they are reconstructed, top stripe
//! first, left to right. The data buffer is read exactly once, forward
//! only, so the working state is just a stripe index, an x position, and
//! the read cursor.

use bitfont_types::{Codepoint, RleKind};

use crate::font::BitFont;

/// Receives the decoded columns of a glyph, one stripe at a time.
///
/// A display driver typically implements this directly on its framebuffer
/// or page-write handle.
pub trait StripeSink {
    /// When `false`, the decoder skips [`emit`](Self::emit) calls for bytes
    /// it knows are zero: margin columns and stripes outside the glyph's
    /// span. Sinks that clear their target before drawing can opt out and
    /// let the dead branches fold away at monomorphization. Zero bytes that
    /// are part of the stored data stream are emitted either way.
    const EMIT_EMPTY_BYTES: bool = true;

    /// Called once per stripe, before any of its columns, including stripes
    /// the glyph leaves entirely blank.
    fn start_stripe(&mut self, stripe: u8, width: u8);

    /// One column byte: 8 vertically stacked pixels at `x`, least
    /// significant bit topmost.
    fn emit(&mut self, x: u8, bits: u8);
}

/// Stream the glyph for `codepoint` into `sink`.
///
/// Returns the advance width that was drawn, or 0 if the font has no glyph
/// for `codepoint` (in which case the sink is never invoked).
pub fn emit_glyph<S: StripeSink>(font: &BitFont, codepoint: Codepoint, sink: &mut S) -> u8 {
    let Some(glyph) = font.find_glyph(codepoint) else {
        return 0;
    };

    let mut bytes = font.data_from(&glyph).iter().copied();
    let width = u16::from(glyph.width);
    let left = u16::from(glyph.left_margin);
    let right_edge = width.saturating_sub(u16::from(glyph.right_margin));

    for stripe in 0..font.stripes() {
        sink.start_stripe(stripe, glyph.width);

        // stripes outside the span hold no data at all
        if stripe < glyph.stripe_begin || stripe >= glyph.stripe_end {
            if S::EMIT_EMPTY_BYTES {
                for x in 0..width {
                    sink.emit(x as u8, 0x00);
                }
            }
            continue;
        }

        let mut x = 0u16;
        while x < width {
            if x < left || x >= right_edge {
                if S::EMIT_EMPTY_BYTES {
                    sink.emit(x as u8, 0x00);
                }
                x += 1;
                continue;
            }

            let data = bytes.next().unwrap_or(0);
            match glyph.rle_kind {
                RleKind::Literal => {
                    sink.emit(x as u8, data);
                    x += 1;
                }
                kind => {
                    // a control byte: repeat counts from the low bits up,
                    // each paired with the data byte that follows it
                    let mask = kind.count_mask();
                    let shift = kind.count_shift();
                    let mut counts = data;
                    while counts != 0 {
                        let mut run = counts & mask;
                        let value = bytes.next().unwrap_or(0);
                        while run > 0 {
                            sink.emit(x as u8, value);
                            x += 1;
                            run -= 1;
                        }
                        counts >>= shift;
                    }
                }
            }
        }
    }

    glyph.width
}
