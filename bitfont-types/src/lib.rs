//! Common scalar data types used in compiled bitmap fonts
//!
//! These are the units both halves of the codec speak: the compiler in
//! `write-bitfont` produces them, the render-time decoder in `read-bitfont`
//! consumes them.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

mod codepoint;
mod offset;
mod rle;

pub use codepoint::Codepoint;
pub use offset::DataOffset;
pub use rle::RleKind;

/// Height in pixels of one vertical stripe: one byte of column data.
pub const STRIPE_HEIGHT: u8 = 8;

/// The largest stripe index the packed glyph record can address.
///
/// `stripe_begin`/`stripe_end` are 4-bit fields, which caps fonts at
/// 15 stripes (120 pixels) of occupied height.
pub const MAX_STRIPES: u8 = 15;

/// The largest representable left or right margin.
///
/// Margins are 4-bit fields; wider runs of blank columns are stored as
/// explicit zero bytes in the glyph data instead.
pub const MAX_MARGIN: u8 = 15;
