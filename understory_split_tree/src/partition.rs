// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box-partition geometry: how a region tree divides a rectangle.
//!
//! Renderers and [`diff_new_leaf`](crate::diff_new_leaf) share these helpers,
//! so a highlighted leaf always lands where it is drawn. Each split cuts its
//! box along its axis into consecutive slices proportional to the children's
//! fractions, in child order.

use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::region::Region;
use crate::types::{Axis, RegionId, Swatch};
use crate::util::fraction_starts;

/// A leaf together with the rectangle it occupies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeafRect {
    /// The leaf.
    pub id: RegionId,
    /// Its fill color.
    pub color: Swatch,
    /// Its box, in the coordinate space of the bounds passed in.
    pub rect: Rect,
    /// Number of splits above the leaf; a lone root leaf has depth 0.
    pub depth: usize,
}

/// Slice `bounds` among `children` along `axis`.
///
/// ```rust
/// use kurbo::Rect;
/// use understory_split_tree::{Axis, Region, Swatch, partition};
///
/// let root = Region::split(
///     Axis::Vertical,
///     [Region::leaf(Swatch::Coral, 0.25), Region::leaf(Swatch::Slate, 0.75)],
/// );
/// let rects: Vec<Rect> = partition::child_rects(
///     Axis::Vertical,
///     root.children(),
///     Rect::new(0.0, 0.0, 100.0, 40.0),
/// )
/// .map(|(_, r)| r)
/// .collect();
/// assert_eq!(rects[0], Rect::new(0.0, 0.0, 25.0, 40.0));
/// assert_eq!(rects[1], Rect::new(25.0, 0.0, 100.0, 40.0));
/// ```
pub fn child_rects<'a>(
    axis: Axis,
    children: &'a [Arc<Region>],
    bounds: Rect,
) -> impl Iterator<Item = (&'a Region, Rect)> + 'a {
    let starts = fraction_starts(children.iter().map(|c| c.fraction()));
    children.iter().zip(starts).map(move |(child, start)| {
        let end = start + child.fraction();
        let rect = match axis {
            Axis::Vertical => Rect::new(
                bounds.x0 + start * bounds.width(),
                bounds.y0,
                bounds.x0 + end * bounds.width(),
                bounds.y1,
            ),
            Axis::Horizontal => Rect::new(
                bounds.x0,
                bounds.y0 + start * bounds.height(),
                bounds.x1,
                bounds.y0 + end * bounds.height(),
            ),
        };
        (&**child, rect)
    })
}

/// Visit every region in pre-order with its box and depth.
pub fn walk(root: &Region, bounds: Rect, mut visit: impl FnMut(&Region, Rect, usize)) {
    fn go(
        region: &Region,
        bounds: Rect,
        depth: usize,
        visit: &mut dyn FnMut(&Region, Rect, usize),
    ) {
        visit(region, bounds, depth);
        if let Some(axis) = region.axis() {
            for (child, rect) in child_rects(axis, region.children(), bounds) {
                go(child, rect, depth + 1, visit);
            }
        }
    }
    go(root, bounds, 0, &mut visit);
}

/// All leaves of `root` with their boxes, in layout order.
pub fn leaf_rects(root: &Region, bounds: Rect) -> Vec<LeafRect> {
    let mut out = Vec::with_capacity(root.leaf_count());
    walk(root, bounds, |region, rect, depth| {
        if let Some(color) = region.color() {
            out.push(LeafRect {
                id: region.id(),
                color,
                rect,
                depth,
            });
        }
    });
    out
}

/// The leaf whose box contains `point`, if any.
///
/// Boxes are half-open (`x0 <= x < x1`), so a point on a shared edge belongs
/// to the later slice and points on the far edges of `bounds` hit nothing.
pub fn leaf_at(root: &Region, bounds: Rect, point: Point) -> Option<LeafRect> {
    if !bounds.contains(point) {
        return None;
    }
    let mut region = root;
    let mut rect = bounds;
    let mut depth = 0;
    while let Some(axis) = region.axis() {
        let (child, child_rect) = child_rects(axis, region.children(), rect)
            .find(|(_, r)| r.contains(point))?;
        region = child;
        rect = child_rect;
        depth += 1;
    }
    region.color().map(|color| LeafRect {
        id: region.id(),
        color,
        rect,
        depth,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT: Rect = Rect::new(0.0, 0.0, 1.0, 1.0);

    fn nested() -> Region {
        // | pink |  sky  |
        // |      |-------|
        // |      | lime  |
        let right = Region::split(
            Axis::Horizontal,
            [
                Region::leaf(Swatch::SkyBlue, 0.5),
                Region::leaf(Swatch::LimeGreen, 0.5),
            ],
        )
        .with_fraction(0.5);
        Region::split(Axis::Vertical, [Region::leaf(Swatch::HotPink, 0.5), right])
    }

    #[test]
    fn leaf_rects_follow_fractions() {
        let root = nested();
        let leaves = leaf_rects(&root, Rect::new(0.0, 0.0, 200.0, 100.0));
        assert_eq!(leaves.len(), 3);
        assert_eq!(leaves[0].color, Swatch::HotPink);
        assert_eq!(leaves[0].rect, Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(leaves[0].depth, 1);
        assert_eq!(leaves[1].color, Swatch::SkyBlue);
        assert_eq!(leaves[1].rect, Rect::new(100.0, 0.0, 200.0, 50.0));
        assert_eq!(leaves[1].depth, 2);
        assert_eq!(leaves[2].color, Swatch::LimeGreen);
        assert_eq!(leaves[2].rect, Rect::new(100.0, 50.0, 200.0, 100.0));
    }

    #[test]
    fn single_leaf_fills_bounds() {
        let root = Region::leaf(Swatch::Slate, 1.0);
        let leaves = leaf_rects(&root, UNIT);
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].rect, UNIT);
        assert_eq!(leaves[0].depth, 0);
    }

    #[test]
    fn partition_is_idempotent() {
        let root = nested();
        let bounds = Rect::new(10.0, 20.0, 310.0, 220.0);
        assert_eq!(leaf_rects(&root, bounds), leaf_rects(&root, bounds));
    }

    #[test]
    fn walk_visits_every_region() {
        let root = nested();
        let mut seen = Vec::new();
        walk(&root, UNIT, |region, _, depth| seen.push((region.id(), depth)));
        let expected: Vec<_> = root.iter().map(Region::id).collect();
        assert_eq!(seen.iter().map(|(id, _)| *id).collect::<Vec<_>>(), expected);
        assert_eq!(seen[0].1, 0);
    }

    #[test]
    fn leaf_at_descends_to_the_containing_leaf() {
        let root = nested();
        let hit = leaf_at(&root, UNIT, Point::new(0.75, 0.8)).unwrap();
        assert_eq!(hit.color, Swatch::LimeGreen);
        assert_eq!(hit.rect, Rect::new(0.5, 0.5, 1.0, 1.0));

        let hit = leaf_at(&root, UNIT, Point::new(0.25, 0.1)).unwrap();
        assert_eq!(hit.color, Swatch::HotPink);

        assert!(leaf_at(&root, UNIT, Point::new(1.5, 0.5)).is_none());
    }
}
