// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drop-driven insertion: adding one colored leaf to a region tree.

use alloc::sync::Arc;

use kurbo::Point;

use crate::region::{Children, MAX_CHILDREN, Region, RegionKind};
use crate::types::{Axis, RegionId, Swatch};
use crate::util::{abs_diff, fraction_starts};

/// Thresholds that decide, for a split with two children, whether a drop adds
/// a third sibling or descends into one of the existing children.
///
/// Positions are measured along the split's axis in the split's own
/// normalized space, so `0.0` is its leading edge and `1.0` its trailing edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InsertPolicy {
    /// Open interval around the middle; drops inside it add a sibling.
    pub center_band: (f64, f64),
    /// Width of the margin at each end; drops inside it add a sibling.
    pub edge_margin: f64,
}

impl Default for InsertPolicy {
    fn default() -> Self {
        Self {
            center_band: (0.33, 0.67),
            edge_margin: 0.1,
        }
    }
}

impl InsertPolicy {
    /// Returns `true` when a drop at `pos` on a two-child split should add a
    /// third sibling rather than descend.
    pub fn adds_sibling(&self, pos: f64) -> bool {
        let (lo, hi) = self.center_band;
        let in_center = pos > lo && pos < hi;
        let at_edge = pos < self.edge_margin || pos > 1.0 - self.edge_margin;
        in_center || at_edge
    }
}

/// Insert a `color` leaf into `root` for a drop at `drop`, using the default
/// [`InsertPolicy`].
///
/// `drop` is normalized to the root's box (`(0, 0)` top-left, `(1, 1)`
/// bottom-right). `axis` is only used when the drop lands on a leaf that has
/// to be split at the top level; deeper splits alternate orientation.
///
/// The input tree is left untouched. The result shares every subtree the
/// insertion did not reach and contains exactly one new leaf.
///
/// ```rust
/// use kurbo::Point;
/// use understory_split_tree::{Axis, Region, Swatch, insert};
///
/// let root = Region::leaf(Swatch::SkyBlue, 1.0);
/// let next = insert(&root, Swatch::HotPink, Point::new(0.2, 0.8), Axis::Vertical);
///
/// assert_eq!(next.axis(), Some(Axis::Vertical));
/// assert_eq!(next.children()[0].color(), Some(Swatch::HotPink));
/// assert_eq!(next.children()[1].id(), root.id());
/// ```
pub fn insert(root: &Region, color: Swatch, drop: Point, axis: Axis) -> Region {
    insert_with(&InsertPolicy::default(), root, color, drop, axis)
}

/// Like [`insert`], with explicit thresholds.
pub fn insert_with(
    policy: &InsertPolicy,
    root: &Region,
    color: Swatch,
    drop: Point,
    axis: Axis,
) -> Region {
    let out = insert_at(policy, root, color, drop, axis);
    debug_assert!(
        out.validate().is_ok(),
        "insert produced an invalid tree: {:?}",
        out.validate()
    );
    out
}

fn insert_at(
    policy: &InsertPolicy,
    node: &Region,
    color: Swatch,
    drop: Point,
    axis: Axis,
) -> Region {
    let RegionKind::Split {
        axis: node_axis,
        children,
    } = node.kind()
    else {
        return split_leaf(node, color, drop, axis);
    };
    let node_axis = *node_axis;
    let pos = node_axis.along(drop.x, drop.y);
    let starts = fraction_starts(children.iter().map(|c| c.fraction()));

    let has_room = children.len() < MAX_CHILDREN;
    if has_room && (children.len() < 2 || policy.adds_sibling(pos)) {
        let index = children
            .iter()
            .zip(&starts)
            .position(|(child, start)| start + child.fraction() / 2.0 > pos)
            .unwrap_or(children.len());
        tracing::trace!(
            region = node.id().get(),
            pos,
            index,
            "adding sibling"
        );
        let children = with_sibling(children, index, color);
        return Region::from_parts(
            node.id(),
            node.fraction(),
            RegionKind::Split {
                axis: node_axis,
                children,
            },
        );
    }

    let mut nearest = 0;
    let mut nearest_dist = f64::INFINITY;
    for (i, (child, start)) in children.iter().zip(&starts).enumerate() {
        let dist = abs_diff(pos, start + child.fraction() / 2.0);
        if dist < nearest_dist {
            nearest = i;
            nearest_dist = dist;
        }
    }
    let child = &children[nearest];
    // Only the coordinate along this split is remapped; the cross coordinate
    // stays relative to this node's box.
    let local = (pos - starts[nearest]) / child.fraction();
    let local_drop = match node_axis {
        Axis::Vertical => Point::new(local, drop.y),
        Axis::Horizontal => Point::new(drop.x, local),
    };
    tracing::trace!(
        region = node.id().get(),
        pos,
        child = nearest,
        local,
        "descending"
    );
    let replaced = insert_at(policy, child, color, local_drop, node_axis.flip());
    let mut children = children.clone();
    children[nearest] = Arc::new(replaced);
    Region::from_parts(
        node.id(),
        node.fraction(),
        RegionKind::Split {
            axis: node_axis,
            children,
        },
    )
}

/// Turn a leaf into a two-way split holding the old leaf and a new one.
///
/// The old leaf keeps its id; the new container takes over its fraction.
fn split_leaf(leaf: &Region, color: Swatch, drop: Point, axis: Axis) -> Region {
    let old = Arc::new(leaf.with_fraction(0.5));
    let new = Arc::new(Region::from_parts(
        RegionId::fresh(),
        0.5,
        RegionKind::Leaf { color },
    ));
    let new_first = axis.along(drop.x, drop.y) < 0.5;
    tracing::trace!(
        region = leaf.id().get(),
        new_leaf = new.id().get(),
        ?axis,
        new_first,
        "splitting leaf"
    );
    let children: Children = if new_first {
        [new, old].into_iter().collect()
    } else {
        [old, new].into_iter().collect()
    };
    Region::from_parts(
        RegionId::fresh(),
        leaf.fraction(),
        RegionKind::Split { axis, children },
    )
}

/// Insert a new leaf at `index` and give every child an equal share.
fn with_sibling(children: &[Arc<Region>], index: usize, color: Swatch) -> Children {
    let share = 1.0 / (children.len() + 1) as f64;
    let mut out: Children = children
        .iter()
        .map(|c| Arc::new(c.with_fraction(share)))
        .collect();
    out.insert(
        index,
        Arc::new(Region::from_parts(
            RegionId::fresh(),
            share,
            RegionKind::Leaf { color },
        )),
    );
    out
}
