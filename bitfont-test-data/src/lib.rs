//! test data shared between various bitfont crates.

/// A three-glyph 4x8 BDF font: space, exclam, and A.
pub static TINY_BDF: &str = include_str!("../test_data/bdf/tiny.bdf");

/// Hand-packed compiled font blobs, for exercising the read side without
/// involving the compiler.
pub mod font {

    /// One glyph, 'A': width 8, one stripe, columns
    /// `00 FF FF FF 00 00 00 00`, stored four-section RLE.
    #[rustfmt::skip]
    pub static SINGLE_GLYPH: &[u8] = &[
        0x01, 0x00,             // 1 glyph
        0x07,                   // baseline 7
        0x01,                   // 1 stripe
                                // glyph 'A':
        0x41, 0x00,             //   codepoint U+0041
        0x08,                   //   width 8
        0x41,                   //   left margin 1, right margin 4
        0x10,                   //   stripes 0..1
        0x00, 0x80,             //   data offset 0, four-section rle
                                // data:
        0x03, 0xFF,             //   one section: 3 x 0xFF
    ];

    /// Two glyphs over two stripes: an empty space and a literal-coded '!'.
    #[rustfmt::skip]
    pub static TWO_GLYPHS: &[u8] = &[
        0x02, 0x00,             // 2 glyphs
        0x0E,                   // baseline 14
        0x02,                   // 2 stripes
                                // glyph ' ': width 2, no pixels
        0x20, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00,
                                // glyph '!': width 3, margins 1/1,
        0x21, 0x00, 0x03, 0x11, //   stripes 0..2, literal bytes
        0x20, 0x00, 0x00,
                                // data: one trimmed column per stripe
        0x5F, 0x01,
    ];
}
