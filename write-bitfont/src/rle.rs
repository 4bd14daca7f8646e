//! Run-length compression of glyph byte rows
//!
//! A [`Compressor`] folds a byte sequence into control+data groups: each
//! control byte holds the repeat counts of the data bytes that follow it.
//! The two layouts trade section count against run length: two 4-bit
//! counts suit long runs, four 2-bit counts suit busier data. The glyph
//! encoder prices both before committing to either.

use bitfont_types::RleKind;

/// Output target for a [`Compressor`]: the shared data buffer during
/// commit, or [`Discard`] during the dry run that prices each variant.
pub(crate) trait Emit {
    fn emit(&mut self, bytes: &[u8]);
}

impl Emit for Vec<u8> {
    fn emit(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

/// Swallows output; the compressor's own byte counter does the pricing.
pub(crate) struct Discard;

impl Emit for Discard {
    fn emit(&mut self, _bytes: &[u8]) {}
}

/// A stateful run-length encoder for one control-byte layout.
pub(crate) struct Compressor {
    kind: RleKind,
    counts: [u8; 4],
    values: [u8; 4],
    current: usize,
    emitted: usize,
}

impl Compressor {
    pub fn two_section() -> Compressor {
        Compressor::new(RleKind::TwoSection)
    }

    pub fn four_section() -> Compressor {
        Compressor::new(RleKind::FourSection)
    }

    fn new(kind: RleKind) -> Compressor {
        Compressor {
            kind,
            counts: [0; 4],
            values: [0; 4],
            current: 0,
            emitted: 0,
        }
    }

    pub fn kind(&self) -> RleKind {
        self.kind
    }

    fn sections(&self) -> usize {
        match self.kind {
            RleKind::TwoSection => 2,
            RleKind::FourSection => 4,
            RleKind::Literal => unreachable!("literal data is not run-length encoded"),
        }
    }

    /// Longest run one section can hold.
    fn section_capacity(&self) -> u8 {
        self.kind.count_mask()
    }

    fn control_byte(&self) -> u8 {
        match self.kind {
            RleKind::TwoSection => self.counts[1] << 4 | self.counts[0],
            RleKind::FourSection => {
                self.counts[3] << 6 | self.counts[2] << 4 | self.counts[1] << 2 | self.counts[0]
            }
            RleKind::Literal => unreachable!("literal data is not run-length encoded"),
        }
    }

    /// Accumulate one byte, flushing a full control group to `out` if all
    /// section slots are spoken for.
    pub fn add_byte(&mut self, out: &mut impl Emit, b: u8) {
        if self.counts[self.current] == 0 {
            self.values[self.current] = b;
            self.counts[self.current] = 1;
        } else if self.values[self.current] == b && self.counts[self.current] < self.section_capacity()
        {
            self.counts[self.current] += 1;
        } else {
            self.current += 1;
            if self.current >= self.sections() {
                self.flush(out);
            }
            self.values[self.current] = b;
            self.counts[self.current] = 1;
        }
    }

    /// Force out whatever is accumulated, so that no control group spans a
    /// stripe row. Returns the bytes emitted since the previous call: the
    /// cost of the row just finished.
    pub fn finish_line(&mut self, out: &mut impl Emit) -> usize {
        self.flush(out);
        std::mem::take(&mut self.emitted)
    }

    fn flush(&mut self, out: &mut impl Emit) {
        if self.counts[0] == 0 {
            self.current = 0;
            return;
        }
        // sections fill in order, so the used prefix ends at the first zero
        let used = self.counts[..self.sections()]
            .iter()
            .position(|&c| c == 0)
            .unwrap_or(self.sections());
        out.emit(&[self.control_byte()]);
        out.emit(&self.values[..used]);
        self.emitted += 1 + used;
        self.counts = [0; 4];
        self.current = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compress(compressor: &mut Compressor, bytes: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        for &b in bytes {
            compressor.add_byte(&mut out, b);
        }
        compressor.finish_line(&mut out);
        out
    }

    /// The matching inverse, per variant: repeat counts from the low bits
    /// up, one data byte per nonzero-possible slot.
    fn decompress(kind: RleKind, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        let mut iter = data.iter().copied();
        while let Some(control) = iter.next() {
            let mut counts = control;
            while counts != 0 {
                let run = counts & kind.count_mask();
                let value = iter.next().unwrap();
                out.extend(std::iter::repeat(value).take(run as usize));
                counts >>= kind.count_shift();
            }
        }
        out
    }

    #[test]
    fn empty_input_costs_nothing() {
        let mut c = Compressor::two_section();
        let mut out = Vec::new();
        assert_eq!(c.finish_line(&mut out), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn single_byte() {
        let out = compress(&mut Compressor::two_section(), &[0xAB]);
        assert_eq!(out, [0x01, 0xAB]);
        assert_eq!(decompress(RleKind::TwoSection, &out), [0xAB]);
    }

    #[test]
    fn run_within_one_section() {
        let out = compress(&mut Compressor::two_section(), &[0x7E; 9]);
        assert_eq!(out, [0x09, 0x7E]);
    }

    #[test]
    fn run_overflows_section_capacity() {
        // 20 = 15 in section 0, 5 in section 1
        let out = compress(&mut Compressor::two_section(), &[0x7E; 20]);
        assert_eq!(out, [0x5F, 0x7E, 0x7E]);
        assert_eq!(decompress(RleKind::TwoSection, &out), [0x7E; 20]);
    }

    #[test]
    fn value_change_opens_new_section() {
        let out = compress(&mut Compressor::four_section(), &[0x11, 0x22]);
        assert_eq!(out, [0b0101, 0x11, 0x22]);
    }

    #[test]
    fn full_sections_flush_mid_line() {
        // 13 identical bytes: 3+3+3+3 fills all four sections, the 13th
        // starts a second control group
        let out = compress(&mut Compressor::four_section(), &[0x40; 13]);
        assert_eq!(
            out,
            [0xFF, 0x40, 0x40, 0x40, 0x40, 0x01, 0x40]
        );
        assert_eq!(decompress(RleKind::FourSection, &out), [0x40; 13]);
    }

    #[test]
    fn four_section_capacity_is_three() {
        let out = compress(&mut Compressor::four_section(), &[0x40; 4]);
        assert_eq!(out, [0b0111, 0x40, 0x40]);
    }

    #[test]
    fn line_flush_resets_sections() {
        let mut c = Compressor::two_section();
        let mut out = Vec::new();
        c.add_byte(&mut out, 0x0F);
        let first = c.finish_line(&mut out);
        c.add_byte(&mut out, 0x0F);
        let second = c.finish_line(&mut out);
        assert_eq!((first, second), (2, 2));
        assert_eq!(out, [0x01, 0x0F, 0x01, 0x0F]);
    }

    #[test]
    fn dry_run_prices_match_committed_bytes() {
        let input: Vec<u8> = (0..64u8).flat_map(|i| [i / 7; 3]).collect();
        for make in [Compressor::two_section, Compressor::four_section] {
            let mut dry = make();
            let mut cost = 0;
            for &b in &input {
                dry.add_byte(&mut Discard, b);
            }
            cost += dry.finish_line(&mut Discard);
            let committed = compress(&mut make(), &input);
            assert_eq!(cost, committed.len());
        }
    }

    #[test]
    fn both_variants_round_trip_mixed_data() {
        let input: Vec<u8> = [
            vec![0x00; 40],
            vec![0xFF, 0x81, 0x81, 0x42, 0x42, 0x42, 0x42, 0x18],
            vec![0xA5; 17],
            vec![0x01],
        ]
        .concat();
        let two = compress(&mut Compressor::two_section(), &input);
        assert_eq!(decompress(RleKind::TwoSection, &two), input);
        let four = compress(&mut Compressor::four_section(), &input);
        assert_eq!(decompress(RleKind::FourSection, &four), input);
    }
}
