//! Compiling bitmap fonts
//!
//! This crate is the offline half of the bitfont codec. It rasterizes each
//! requested glyph through the [`GlyphSource`] seam, trims the blank border
//! away, prices both run-length encodings against plain bytes, and packs
//! the winners into the compiled blob that `read-bitfont` decodes on the
//! device.
//!
//! The usual entry point is [`FontBuilder`]:
//!
//! ```no_run
//! use write_bitfont::{BdfFont, FontBuilder};
//!
//! let bdf = BdfFont::load("tom-thumb.bdf")?;
//! let blob = FontBuilder::new(&bdf).add_chars("0123456789:").build()?;
//! std::fs::write("clock-font.bin", &blob)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod bdf;
mod builder;
mod canvas;
pub mod codegen;
mod encode;
mod error;
mod metrics;
mod rle;

pub use bdf::{BdfError, BdfFont};
pub use builder::FontBuilder;
pub use canvas::{BitCanvas, GlyphSource};
pub use error::CompileError;

/// Public re-export of the bitfont-types crate.
pub extern crate bitfont_types as types;
