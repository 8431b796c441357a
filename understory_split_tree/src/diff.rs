// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Locating the leaf an insertion created.

use hashbrown::HashSet;
use kurbo::{Point, Rect};
use smallvec::SmallVec;

use crate::partition::walk;
use crate::region::Region;
use crate::types::RegionId;

/// Find the leaf present in `after` but not in `before`.
///
/// `before` may be `None` for an empty canvas. Leaf centers are computed over
/// the unit square with the same partition renderers use (see
/// [`partition`](crate::partition)). When several leaves are new, the one
/// whose center is closest to `drop` (global normalized coordinates) wins.
/// Returns `None` when no leaf is new, which callers treat as "no highlight".
///
/// ```rust
/// use kurbo::Point;
/// use understory_split_tree::{Axis, Region, Swatch, diff_new_leaf, insert};
///
/// let before = Region::leaf(Swatch::SkyBlue, 1.0);
/// let drop = Point::new(0.8, 0.5);
/// let after = insert(&before, Swatch::Coral, drop, Axis::Vertical);
///
/// let new_id = diff_new_leaf(Some(&before), &after, drop).unwrap();
/// assert_eq!(after.find(new_id).unwrap().color(), Some(Swatch::Coral));
/// assert_eq!(diff_new_leaf(Some(&after), &after, drop), None);
/// ```
pub fn diff_new_leaf(
    before: Option<&Region>,
    after: &Region,
    drop: Point,
) -> Option<RegionId> {
    let known: HashSet<RegionId> = before
        .into_iter()
        .flat_map(Region::iter)
        .map(Region::id)
        .collect();

    let mut fresh: SmallVec<[(RegionId, Point); 1]> = SmallVec::new();
    walk(after, Rect::new(0.0, 0.0, 1.0, 1.0), |region, rect, _| {
        if region.is_leaf() && !known.contains(&region.id()) {
            fresh.push((region.id(), rect.center()));
        }
    });

    if fresh.len() > 1 {
        tracing::debug!(
            count = fresh.len(),
            "several new leaves, picking nearest to drop"
        );
    }
    fresh
        .into_iter()
        .map(|(id, center)| (id, (center - drop).hypot2()))
        .reduce(|best, cand| if cand.1 < best.1 { cand } else { best })
        .map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Axis, Swatch, insert};

    #[test]
    fn finds_the_single_new_leaf() {
        let before = Region::split(
            Axis::Vertical,
            [
                Region::leaf(Swatch::HotPink, 0.5),
                Region::leaf(Swatch::SkyBlue, 0.5),
            ],
        );
        let drop = Point::new(0.2, 0.7);
        let after = insert(&before, Swatch::LimeGreen, drop, Axis::Vertical);

        let id = diff_new_leaf(Some(&before), &after, drop).unwrap();
        assert!(!before.contains_id(id));
        assert_eq!(after.find(id).and_then(Region::color), Some(Swatch::LimeGreen));
    }

    #[test]
    fn identical_trees_have_no_new_leaf() {
        let tree = Region::leaf(Swatch::SkyBlue, 1.0);
        assert_eq!(diff_new_leaf(Some(&tree), &tree, Point::new(0.5, 0.5)), None);
    }

    #[test]
    fn empty_before_reports_the_root_leaf() {
        let root = Region::leaf(Swatch::Slate, 1.0);
        assert_eq!(
            diff_new_leaf(None, &root, Point::new(0.1, 0.1)),
            Some(root.id())
        );
    }

    #[test]
    fn several_new_leaves_pick_nearest_center() {
        let before = Region::leaf(Swatch::SkyBlue, 1.0);
        // Unrelated tree: every leaf is new relative to `before`.
        let left = Region::leaf(Swatch::Coral, 0.5);
        let right = Region::leaf(Swatch::Lavender, 0.5);
        let (left_id, right_id) = (left.id(), right.id());
        let after = Region::split(Axis::Vertical, [left, right]);

        assert_eq!(
            diff_new_leaf(Some(&before), &after, Point::new(0.1, 0.5)),
            Some(left_id)
        );
        assert_eq!(
            diff_new_leaf(Some(&before), &after, Point::new(0.9, 0.5)),
            Some(right_id)
        );
    }

    #[test]
    fn containers_do_not_count_as_new_leaves() {
        // Splitting a leaf creates a new container and a new leaf; only the
        // leaf is reported even if the drop is nearer the container's center.
        let before = Region::leaf(Swatch::SkyBlue, 1.0);
        let drop = Point::new(0.5, 0.5);
        let after = insert(&before, Swatch::Tangerine, drop, Axis::Horizontal);
        let id = diff_new_leaf(Some(&before), &after, drop).unwrap();
        assert_ne!(id, after.id());
        assert_eq!(after.find(id).and_then(Region::color), Some(Swatch::Tangerine));
    }
}
