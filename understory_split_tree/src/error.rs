// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported when a split is built from invalid parts.

use crate::RegionId;

/// Why a set of children cannot form a split.
///
/// Returned by [`Region::try_split`](crate::Region::try_split) and
/// [`Region::validate`](crate::Region::validate).
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum SplitError {
    /// A split must have two or three children.
    #[error("a split needs 2 or 3 children, got {count}")]
    ChildCount {
        /// Number of children supplied.
        count: usize,
    },
    /// A child fraction lies outside `(0, 1]` or is not finite.
    #[error("child {index} has fraction {fraction}, expected a value in (0, 1]")]
    FractionRange {
        /// Position of the offending child.
        index: usize,
        /// The offending fraction.
        fraction: f64,
    },
    /// The child fractions do not add up to one.
    #[error("child fractions sum to {sum}, expected 1.0")]
    FractionSum {
        /// The actual sum.
        sum: f64,
    },
    /// The same id appears twice in one tree.
    #[error("region id {} appears more than once", .id.get())]
    DuplicateId {
        /// The repeated id.
        id: RegionId,
    },
}
