// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the split tree: region identifiers, split axes, and the palette.

use core::num::NonZeroU64;
use core::sync::atomic::{AtomicU64, Ordering};

/// Next id to hand out. Shared by every tree in the process so that ids never
/// collide between independent trees or previews.
static NEXT_REGION_ID: AtomicU64 = AtomicU64::new(1);

/// Identifier for a region.
///
/// Ids are assigned when a region is created and are never reused. Regions
/// that survive an insertion unchanged (or only with a new fraction) keep
/// their id, which is what [`diff_new_leaf`](crate::diff_new_leaf) relies on.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct RegionId(NonZeroU64);

impl RegionId {
    pub(crate) fn fresh() -> Self {
        let raw = NEXT_REGION_ID.fetch_add(1, Ordering::Relaxed);
        Self(NonZeroU64::new(raw).expect("region id counter wrapped"))
    }

    /// Returns the raw integer value, for logging and debugging.
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

/// Orientation of a split.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Children are laid out as columns, left to right. Positions along this
    /// axis are read from the drop point's `x`.
    Vertical,
    /// Children are laid out as rows, top to bottom. Positions along this
    /// axis are read from the drop point's `y`.
    Horizontal,
}

impl Axis {
    /// The other axis.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }

    /// Picks the coordinate that runs along this axis.
    pub const fn along(self, x: f64, y: f64) -> f64 {
        match self {
            Self::Vertical => x,
            Self::Horizontal => y,
        }
    }
}

/// The fixed palette leaves are painted with.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Swatch {
    /// `#4FC3F7`
    SkyBlue,
    /// `#FF4FA3`
    HotPink,
    /// `#FFE14D`
    BrightYellow,
    /// `#8BE04E`
    LimeGreen,
    /// `#FF7F6B`
    Coral,
    /// `#B39DDB`
    Lavender,
    /// `#FFA040`
    Tangerine,
    /// `#607D8B`
    Slate,
}

impl Swatch {
    /// Every swatch, in palette order.
    pub const ALL: [Self; 8] = [
        Self::SkyBlue,
        Self::HotPink,
        Self::BrightYellow,
        Self::LimeGreen,
        Self::Coral,
        Self::Lavender,
        Self::Tangerine,
        Self::Slate,
    ];

    /// Opaque sRGB color as `[r, g, b, a]`.
    pub const fn rgba8(self) -> [u8; 4] {
        match self {
            Self::SkyBlue => [0x4F, 0xC3, 0xF7, 0xFF],
            Self::HotPink => [0xFF, 0x4F, 0xA3, 0xFF],
            Self::BrightYellow => [0xFF, 0xE1, 0x4D, 0xFF],
            Self::LimeGreen => [0x8B, 0xE0, 0x4E, 0xFF],
            Self::Coral => [0xFF, 0x7F, 0x6B, 0xFF],
            Self::Lavender => [0xB3, 0x9D, 0xDB, 0xFF],
            Self::Tangerine => [0xFF, 0xA0, 0x40, 0xFF],
            Self::Slate => [0x60, 0x7D, 0x8B, 0xFF],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_are_unique_and_increasing() {
        let a = RegionId::fresh();
        let b = RegionId::fresh();
        assert_ne!(a, b);
        assert!(b.get() > a.get(), "ids are handed out in increasing order");
    }

    #[test]
    fn axis_flip_and_along() {
        assert_eq!(Axis::Vertical.flip(), Axis::Horizontal);
        assert_eq!(Axis::Horizontal.flip(), Axis::Vertical);
        assert_eq!(Axis::Vertical.along(0.25, 0.75), 0.25);
        assert_eq!(Axis::Horizontal.along(0.25, 0.75), 0.75);
    }

    #[test]
    fn palette_colors_are_distinct() {
        for (i, a) in Swatch::ALL.iter().enumerate() {
            for b in &Swatch::ALL[i + 1..] {
                assert_ne!(a.rgba8(), b.rgba8(), "{a:?} and {b:?} share a color");
            }
        }
    }
}
