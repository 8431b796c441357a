// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

use crate::region::MAX_CHILDREN;

/// Absolute difference of two scalars without relying on `f64::abs`, which
/// is not available in `core` on every supported toolchain.
pub(crate) fn abs_diff(a: f64, b: f64) -> f64 {
    (a - b).max(b - a)
}

/// Exclusive prefix sum of child fractions: the start offset of each child
/// along its parent's axis, in the parent's normalized space.
pub(crate) fn fraction_starts(
    fractions: impl IntoIterator<Item = f64>,
) -> SmallVec<[f64; MAX_CHILDREN]> {
    let mut pos = 0.0;
    fractions
        .into_iter()
        .map(|f| {
            let start = pos;
            pos += f;
            start
        })
        .collect()
}
