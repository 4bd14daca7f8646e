//! Font-wide vertical metrics
//!
//! Before any glyph is encoded, the whole character set is drawn once into
//! a [`MetricsCollector`] to find the rows it actually occupies. The
//! resulting top offset and stripe count size every glyph's capture buffer,
//! so the compiled font stores no blank stripes above or below the ink.

use bitfont_types::STRIPE_HEIGHT;

use crate::canvas::BitCanvas;

/// Accumulates the vertical extent of a whole character set.
pub(crate) struct MetricsCollector {
    /// With a caller-fixed baseline the top row is pinned rather than
    /// measured, and ink above it makes the baseline unsatisfiable.
    fixed_top: Option<i32>,
    min_y: i32,
    max_y: i32,
    satisfied: bool,
}

/// What the collector measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FontMetrics {
    /// Occupied height in 8-pixel stripes; may exceed the format limit,
    /// which the builder reports as an error.
    pub stripes: u32,
    /// The y coordinate that becomes row 0 of the compiled font.
    pub top_offset: i32,
}

impl MetricsCollector {
    pub fn new() -> MetricsCollector {
        MetricsCollector {
            fixed_top: None,
            min_y: i32::MAX,
            max_y: i32::MIN,
            satisfied: true,
        }
    }

    pub fn with_top(top: i32) -> MetricsCollector {
        MetricsCollector {
            fixed_top: Some(top),
            min_y: top,
            max_y: i32::MIN,
            satisfied: true,
        }
    }

    pub fn baseline_satisfied(&self) -> bool {
        self.satisfied
    }

    pub fn finish(&self) -> FontMetrics {
        let top_offset = match self.fixed_top {
            Some(top) => top,
            None if self.min_y == i32::MAX => 0,
            None => self.min_y,
        };
        let extent = i64::from(self.max_y) - i64::from(top_offset) + 1;
        let stripes = if self.max_y == i32::MIN || extent <= 0 {
            0
        } else {
            (extent as u64).div_ceil(u64::from(STRIPE_HEIGHT)) as u32
        };
        FontMetrics {
            stripes,
            top_offset,
        }
    }
}

impl BitCanvas for MetricsCollector {
    fn set_pixel(&mut self, _x: i32, y: i32, on: bool) {
        if !on {
            return;
        }
        if y > self.max_y {
            self.max_y = y;
        }
        match self.fixed_top {
            Some(top) => self.satisfied &= y >= top,
            None => self.min_y = self.min_y.min(y),
        }
    }
}
