//! Compile a character set out of a BDF font into the compact stripe
//! format, emitted as a Rust source file.

use std::path::PathBuf;

use read_bitfont::BitFont;
use write_bitfont::{codegen, BdfFont, FontBuilder};

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = flags::Bdfc::from_env().map_err(|e| Error(e.to_string()))?;

    let font = BdfFont::load(&args.bdf).map_err(|e| Error(format!("{}: {e}", args.bdf.display())))?;

    let mut builder = FontBuilder::new(&font).add_chars(&args.chars);
    if let Some(baseline) = args.baseline {
        builder = builder.fixed_baseline(baseline);
    }
    let blob = builder.build().map_err(|e| Error(e.to_string()))?;
    let compiled = BitFont::read(&blob).map_err(|e| Error(e.to_string()))?;

    let bdf_name = args
        .bdf
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let source = codegen::rust_source(&args.name, &bdf_name, &args.chars, &compiled, &blob);

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("font_{}.rs", args.name)));
    std::fs::write(&output, source).map_err(|e| Error(format!("{}: {e}", output.display())))?;

    eprintln!(
        "{}: {} glyphs, {} stripes, baseline {}, {} bytes",
        output.display(),
        compiled.available_glyphs(),
        compiled.stripes(),
        compiled.baseline(),
        blob.len()
    );
    Ok(())
}

struct Error(String);

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

mod flags {
    use std::path::PathBuf;

    xflags::xflags! {
        /// Compile a BDF font into the compact stripe format
        cmd bdfc {
            /// Path to the input BDF font file
            required bdf: PathBuf
            /// Name for the generated constant
            required name: String
            /// The characters to include in the font
            required chars: String
            /// Fix the baseline instead of deriving it from the ink,
            /// for pixel-exact alignment across fonts
            optional -b, --baseline baseline: u8
            /// Where to write the generated source
            optional -o, --output output: PathBuf
        }
    }
}
