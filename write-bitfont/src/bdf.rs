//! BDF font parsing
//!
//! The compiler consumes glyph sets through the [`GlyphSource`] seam; this
//! is the stock implementation of it, a parser for the Glyph Bitmap
//! Distribution Format files that X11 bitmap fonts ship in. Only the
//! subset the compiler needs is interpreted; unknown keywords pass through
//! unremarked.

use std::collections::BTreeMap;
use std::path::Path;

use bitfont_types::Codepoint;

use crate::canvas::{BitCanvas, GlyphSource};

/// A glyph set parsed from a BDF font file.
#[derive(Debug)]
pub struct BdfFont {
    name: String,
    height: i32,
    baseline: i32,
    glyphs: BTreeMap<u16, BdfGlyph>,
}

#[derive(Debug)]
struct BdfGlyph {
    advance: u8,
    width: i32,
    height: i32,
    x_offset: i32,
    y_offset: i32,
    /// MSB-first bitmap rows, top first, `(width + 7) / 8` bytes each.
    rows: Vec<u8>,
}

impl BdfGlyph {
    fn bytes_per_row(&self) -> usize {
        (self.width as usize + 7) / 8
    }

    fn pixel(&self, row: i32, col: i32) -> bool {
        let byte = self.rows[row as usize * self.bytes_per_row() + col as usize / 8];
        byte & (0x80 >> (col % 8)) != 0
    }
}

impl BdfFont {
    /// Read and parse a BDF file.
    pub fn load(path: impl AsRef<Path>) -> Result<BdfFont, BdfError> {
        let text = std::fs::read_to_string(path)?;
        BdfFont::parse(&text)
    }

    /// Parse BDF text.
    pub fn parse(text: &str) -> Result<BdfFont, BdfError> {
        let mut name = String::new();
        let mut bounding_box = None;
        let mut glyphs = BTreeMap::new();

        let mut lines = text.lines().enumerate();
        while let Some((ln, raw)) = lines.next() {
            let mut fields = raw.split_whitespace();
            match fields.next() {
                Some("FONT") => name = raw[4..].trim().to_string(),
                Some("FONTBOUNDINGBOX") => {
                    let mut next = || int(fields.next(), ln);
                    bounding_box = Some((next()?, next()?, next()?, next()?));
                }
                Some("STARTCHAR") => read_glyph(&mut lines, &mut glyphs)?,
                _ => {}
            }
        }

        let Some((_, height, _, y_offset)) = bounding_box else {
            return Err(BdfError::Parse {
                line: 0,
                message: "missing FONTBOUNDINGBOX".into(),
            });
        };
        Ok(BdfFont {
            name,
            height,
            baseline: height + y_offset,
            glyphs,
        })
    }

    /// The font's registered name (the FONT property), if any.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Height of the rendering cell in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of encoded glyphs.
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }
}

fn read_glyph<'a>(
    lines: &mut impl Iterator<Item = (usize, &'a str)>,
    glyphs: &mut BTreeMap<u16, BdfGlyph>,
) -> Result<(), BdfError> {
    let mut encoding: Option<i32> = None;
    let mut advance: Option<i32> = None;
    let mut bounding_box: Option<(i32, i32, i32, i32)> = None;
    let mut rows: Vec<u8> = Vec::new();
    let mut saw_bitmap = false;

    while let Some((ln, raw)) = lines.next() {
        let mut fields = raw.split_whitespace();
        match fields.next() {
            Some("ENCODING") => encoding = Some(int(fields.next(), ln)?),
            Some("DWIDTH") => advance = Some(int(fields.next(), ln)?),
            Some("BBX") => {
                let mut next = || int(fields.next(), ln);
                bounding_box = Some((next()?, next()?, next()?, next()?));
            }
            Some("BITMAP") => {
                let (width, height, _, _) = bounding_box.ok_or_else(|| BdfError::Parse {
                    line: ln + 1,
                    message: "BITMAP before BBX".into(),
                })?;
                saw_bitmap = true;
                let bytes_per_row = (width.max(0) as usize + 7) / 8;
                for _ in 0..height.max(0) {
                    let (hex_ln, hex) = lines.next().ok_or_else(|| BdfError::Parse {
                        line: ln + 1,
                        message: "bitmap runs past the end of the file".into(),
                    })?;
                    let hex = hex.trim();
                    let start = rows.len();
                    for i in (0..hex.len()).step_by(2) {
                        let byte = hex
                            .get(i..i + 2)
                            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                            .ok_or_else(|| BdfError::Parse {
                                line: hex_ln + 1,
                                message: format!("bad bitmap row {hex:?}"),
                            })?;
                        rows.push(byte);
                    }
                    if rows.len() - start < bytes_per_row {
                        return Err(BdfError::Parse {
                            line: hex_ln + 1,
                            message: format!("bitmap row shorter than BBX width {width}"),
                        });
                    }
                    rows.truncate(start + bytes_per_row);
                }
            }
            Some("ENDCHAR") => {
                let (Some(encoding), Some(advance), Some((width, height, x_offset, y_offset))) =
                    (encoding, advance, bounding_box)
                else {
                    return Err(BdfError::Parse {
                        line: ln + 1,
                        message: "glyph is missing ENCODING, DWIDTH or BBX".into(),
                    });
                };
                if !saw_bitmap {
                    return Err(BdfError::Parse {
                        line: ln + 1,
                        message: "glyph has no BITMAP".into(),
                    });
                }
                // non-unicode encodings (-1) and metrics beyond the format's
                // 8-bit fields are skipped, not fatal
                match (u16::try_from(encoding), u8::try_from(advance)) {
                    (Ok(encoding), Ok(advance)) => {
                        glyphs.insert(
                            encoding,
                            BdfGlyph {
                                advance,
                                width,
                                height,
                                x_offset,
                                y_offset,
                                rows,
                            },
                        );
                    }
                    _ => log::warn!("skipping glyph with encoding {encoding}, advance {advance}"),
                }
                return Ok(());
            }
            _ => {}
        }
    }
    Err(BdfError::Parse {
        line: 0,
        message: "unterminated STARTCHAR".into(),
    })
}

fn int(field: Option<&str>, ln: usize) -> Result<i32, BdfError> {
    field
        .and_then(|f| f.parse().ok())
        .ok_or_else(|| BdfError::Parse {
            line: ln + 1,
            message: "expected an integer".into(),
        })
}

impl GlyphSource for BdfFont {
    fn baseline(&self) -> i32 {
        self.baseline
    }

    fn character_width(&self, codepoint: Codepoint) -> Option<u8> {
        self.glyphs.get(&codepoint.to_u16()).map(|g| g.advance)
    }

    fn draw_glyph(
        &self,
        canvas: &mut dyn BitCanvas,
        x: i32,
        y: i32,
        inverse: bool,
        codepoint: Codepoint,
    ) -> u8 {
        let Some(glyph) = self.glyphs.get(&codepoint.to_u16()) else {
            return 0;
        };
        // the BBX y offset positions the bitmap's bottom edge relative to
        // the baseline, positive upward
        let top = y - glyph.y_offset - glyph.height;
        for row in 0..glyph.height {
            for col in 0..glyph.width {
                let set = glyph.pixel(row, col);
                if inverse {
                    canvas.set_pixel(x + glyph.x_offset + col, top + row, !set);
                } else if set {
                    canvas.set_pixel(x + glyph.x_offset + col, top + row, true);
                }
            }
        }
        glyph.advance
    }
}

/// An error that occurs while loading a BDF file.
#[derive(Debug)]
pub enum BdfError {
    Io(std::io::Error),
    Parse { line: usize, message: String },
}

impl std::fmt::Display for BdfError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BdfError::Io(inner) => inner.fmt(f),
            BdfError::Parse { line, message } => write!(f, "line {line}: {message}"),
        }
    }
}

impl std::error::Error for BdfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BdfError::Io(inner) => Some(inner),
            BdfError::Parse { .. } => None,
        }
    }
}

impl From<std::io::Error> for BdfError {
    fn from(src: std::io::Error) -> BdfError {
        BdfError::Io(src)
    }
}
