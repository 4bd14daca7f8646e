//! Reading compiled bitmap fonts
//!
//! This crate is the render-time half of the bitfont codec: a zero-copy,
//! zero-allocation view over a compiled font blob, plus the streaming glyph
//! decoder. It is the code that ends up on the device, so it never allocates
//! and reads the glyph data buffer strictly forward; the whole working
//! state of a decode is a stripe index, an x position, and a read cursor.
//!
//! The compiled form itself is produced by the companion `write-bitfont`
//! crate.
//!
//! # Example
//!
//! ```no_run
//! use read_bitfont::{BitFont, StripeSink};
//! use bitfont_types::Codepoint;
//!
//! struct Printer;
//!
//! impl StripeSink for Printer {
//!     fn start_stripe(&mut self, _stripe: u8, _width: u8) {
//!         println!();
//!     }
//!     fn emit(&mut self, _x: u8, bits: u8) {
//!         print!("{bits:02x} ");
//!     }
//! }
//!
//! # let blob: &[u8] = &[];
//! let font = BitFont::read(blob).expect("malformed font blob");
//! let advance = read_bitfont::emit_glyph(&font, Codepoint::new(0x41), &mut Printer);
//! ```

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

mod emit;
mod font;
mod glyph;

pub use emit::{emit_glyph, StripeSink};
pub use font::{BitFont, ReadError};
pub use glyph::GlyphRecord;

/// Public re-export of the bitfont-types crate.
pub extern crate bitfont_types as types;
