//! Rendering compiled fonts as Rust source
//!
//! The compiled blob is self-contained, so the generated artifact is just
//! a byte array constant with a descriptive header; everything the values
//! mean is already encoded in the blob itself and recovered by
//! `read-bitfont` at run time.

use read_bitfont::BitFont;

/// Render `blob` as a Rust source file defining `pub const <NAME>: &[u8]`.
///
/// `name` is uppercased and non-identifier characters become underscores;
/// `source_file` and `chars` only appear in the header comment.
pub fn rust_source(name: &str, source_file: &str, chars: &str, font: &BitFont, blob: &[u8]) -> String {
    let ident = identifier(name);
    let mut out = String::new();
    out.push_str(&format!(
        "// Generated by bdfc; do not edit.\n\
         //   Font file: {source_file}\n\
         //   Characters: {chars}\n\n"
    ));
    out.push_str(&format!(
        "/// {} glyphs, baseline {}, {} stripes, {} bytes.\n",
        font.available_glyphs(),
        font.baseline(),
        font.stripes(),
        blob.len()
    ));
    out.push_str(&format!("pub const {ident}: &[u8] = &[\n"));
    for chunk in blob.chunks(12) {
        out.push_str("    ");
        for byte in chunk {
            out.push_str(&format!("0x{byte:02x}, "));
        }
        // trailing space off, newline on
        out.pop();
        out.push('\n');
    }
    out.push_str("];\n");
    out
}

fn identifier(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    if ident.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    if ident.is_empty() {
        ident.push_str("FONT");
    }
    ident
}
