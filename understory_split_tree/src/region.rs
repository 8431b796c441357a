// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The region tree value: construction, read access, and traversal.

use alloc::sync::Arc;
use alloc::vec::Vec;

use hashbrown::HashSet;
use smallvec::SmallVec;

use crate::error::SplitError;
use crate::types::{Axis, RegionId, Swatch};
use crate::util::abs_diff;

/// Largest number of children a split may hold.
pub const MAX_CHILDREN: usize = 3;

/// Tolerance used when checking that child fractions add up to one.
pub const FRACTION_TOLERANCE: f64 = 1e-6;

/// Ordered children of a split. Children are shared between tree versions.
pub type Children = SmallVec<[Arc<Region>; MAX_CHILDREN]>;

/// One node of a layout tree.
///
/// A region is either a colored leaf or a split whose two or three children
/// divide the region along an [`Axis`]. Regions are immutable: every edit made
/// by [`insert`](crate::insert) returns a new tree that shares untouched
/// subtrees with the old one, so earlier versions stay valid.
///
/// ## Example
///
/// ```rust
/// use understory_split_tree::{Axis, Region, Swatch};
///
/// let left = Region::leaf(Swatch::HotPink, 0.25);
/// let right = Region::leaf(Swatch::SkyBlue, 0.75);
/// let root = Region::split(Axis::Vertical, [left, right]);
///
/// assert_eq!(root.children().len(), 2);
/// assert_eq!(root.leaf_count(), 2);
/// assert_eq!(root.children()[0].color(), Some(Swatch::HotPink));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    id: RegionId,
    fraction: f64,
    kind: RegionKind,
}

/// What a [`Region`] holds.
#[derive(Clone, Debug, PartialEq)]
pub enum RegionKind {
    /// A colored tile with no children.
    Leaf {
        /// Fill color.
        color: Swatch,
    },
    /// A container dividing its extent along `axis`.
    Split {
        /// Direction children are laid out in.
        axis: Axis,
        /// Two or three children whose fractions sum to one, in layout order.
        children: Children,
    },
}

impl Region {
    /// Create a leaf with a fresh id.
    ///
    /// # Panics
    ///
    /// Panics if `fraction` is not in `(0, 1]`.
    pub fn leaf(color: Swatch, fraction: f64) -> Self {
        assert!(
            fraction_in_range(fraction),
            "leaf fraction must be in (0, 1], got {fraction}"
        );
        Self::from_parts(RegionId::fresh(), fraction, RegionKind::Leaf { color })
    }

    /// Create a split with a fresh id and fraction `1.0`.
    ///
    /// Fractions are taken as given and never normalized; use
    /// [`Region::with_fraction`] to nest the result under another split.
    ///
    /// # Panics
    ///
    /// Panics when the children do not form a valid split; see
    /// [`Region::try_split`] for the non-panicking form.
    pub fn split(axis: Axis, children: impl IntoIterator<Item = Self>) -> Self {
        match Self::try_split(axis, children) {
            Ok(region) => region,
            Err(err) => panic!("invalid split: {err}"),
        }
    }

    /// Create a split, reporting invalid children instead of panicking.
    pub fn try_split(
        axis: Axis,
        children: impl IntoIterator<Item = Self>,
    ) -> Result<Self, SplitError> {
        let children: Children = children.into_iter().map(Arc::new).collect();
        check_children(&children)?;
        Ok(Self::from_parts(
            RegionId::fresh(),
            1.0,
            RegionKind::Split { axis, children },
        ))
    }

    pub(crate) fn from_parts(id: RegionId, fraction: f64, kind: RegionKind) -> Self {
        Self { id, fraction, kind }
    }

    /// A copy of this region with a different fraction and the same id.
    ///
    /// Children are shared, not copied.
    #[must_use]
    pub fn with_fraction(&self, fraction: f64) -> Self {
        Self {
            id: self.id,
            fraction,
            kind: self.kind.clone(),
        }
    }

    /// The region's identifier.
    pub fn id(&self) -> RegionId {
        self.id
    }

    /// Share of the parent's extent along the parent's axis.
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Leaf or split payload.
    pub fn kind(&self) -> &RegionKind {
        &self.kind
    }

    /// Returns `true` for leaves.
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, RegionKind::Leaf { .. })
    }

    /// Leaf color, or `None` for splits.
    pub fn color(&self) -> Option<Swatch> {
        match self.kind {
            RegionKind::Leaf { color } => Some(color),
            RegionKind::Split { .. } => None,
        }
    }

    /// Split axis, or `None` for leaves.
    pub fn axis(&self) -> Option<Axis> {
        match self.kind {
            RegionKind::Leaf { .. } => None,
            RegionKind::Split { axis, .. } => Some(axis),
        }
    }

    /// Children in layout order; empty for leaves.
    pub fn children(&self) -> &[Arc<Self>] {
        match &self.kind {
            RegionKind::Leaf { .. } => &[],
            RegionKind::Split { children, .. } => children,
        }
    }

    /// Number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        self.iter().filter(|r| r.is_leaf()).count()
    }

    /// Number of levels in this subtree; a lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(|c| c.depth())
            .max()
            .unwrap_or(0)
    }

    /// Find a region by id anywhere in this subtree.
    pub fn find(&self, id: RegionId) -> Option<&Self> {
        self.iter().find(|r| r.id == id)
    }

    /// Returns `true` if `id` names this region or one of its descendants.
    pub fn contains_id(&self, id: RegionId) -> bool {
        self.find(id).is_some()
    }

    /// Pre-order traversal over this region and all descendants.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: alloc::vec![self] }
    }

    /// Compare shapes, ignoring ids.
    ///
    /// Two regions have the same shape when their variants, axes, colors and
    /// child structure match and their fractions agree within
    /// [`FRACTION_TOLERANCE`].
    pub fn same_shape(&self, other: &Self) -> bool {
        if abs_diff(self.fraction, other.fraction) > FRACTION_TOLERANCE {
            return false;
        }
        match (&self.kind, &other.kind) {
            (RegionKind::Leaf { color: a }, RegionKind::Leaf { color: b }) => a == b,
            (
                RegionKind::Split { axis: a, children: ca },
                RegionKind::Split { axis: b, children: cb },
            ) => {
                a == b
                    && ca.len() == cb.len()
                    && ca.iter().zip(cb.iter()).all(|(x, y)| x.same_shape(y))
            }
            _ => false,
        }
    }

    /// Check every structural invariant of the whole subtree.
    ///
    /// Each split must hold two or three children with fractions in `(0, 1]`
    /// summing to one, and no id may appear twice.
    pub fn validate(&self) -> Result<(), SplitError> {
        let mut seen = HashSet::new();
        for region in self.iter() {
            if !seen.insert(region.id) {
                return Err(SplitError::DuplicateId { id: region.id });
            }
            if let RegionKind::Split { children, .. } = &region.kind {
                check_children(children)?;
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Region {
    type Item = &'a Region;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order iterator returned by [`Region::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    stack: Vec<&'a Region>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Region;

    fn next(&mut self) -> Option<Self::Item> {
        let region = self.stack.pop()?;
        self.stack
            .extend(region.children().iter().rev().map(|c| &**c));
        Some(region)
    }
}

fn fraction_in_range(fraction: f64) -> bool {
    fraction > 0.0 && fraction <= 1.0 + FRACTION_TOLERANCE
}

fn check_children(children: &[Arc<Region>]) -> Result<(), SplitError> {
    if !(2..=MAX_CHILDREN).contains(&children.len()) {
        return Err(SplitError::ChildCount {
            count: children.len(),
        });
    }
    let mut sum = 0.0;
    for (index, child) in children.iter().enumerate() {
        if !fraction_in_range(child.fraction) {
            return Err(SplitError::FractionRange {
                index,
                fraction: child.fraction,
            });
        }
        sum += child.fraction;
    }
    if abs_diff(sum, 1.0) > FRACTION_TOLERANCE {
        return Err(SplitError::FractionSum { sum });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn pair() -> Region {
        Region::split(
            Axis::Vertical,
            [
                Region::leaf(Swatch::HotPink, 0.5),
                Region::leaf(Swatch::SkyBlue, 0.5),
            ],
        )
    }

    #[test]
    fn leaf_accessors() {
        let leaf = Region::leaf(Swatch::Coral, 1.0);
        assert!(leaf.is_leaf());
        assert_eq!(leaf.color(), Some(Swatch::Coral));
        assert_eq!(leaf.axis(), None);
        assert!(leaf.children().is_empty());
        assert_eq!(leaf.fraction(), 1.0);
        assert_eq!(leaf.depth(), 1);
        assert_eq!(leaf.leaf_count(), 1);
    }

    #[test]
    fn split_accessors() {
        let root = pair();
        assert!(!root.is_leaf());
        assert_eq!(root.axis(), Some(Axis::Vertical));
        assert_eq!(root.color(), None);
        assert_eq!(root.fraction(), 1.0);
        assert_eq!(root.depth(), 2);
        assert_eq!(root.leaf_count(), 2);
        assert!(root.validate().is_ok());
    }

    #[test]
    fn try_split_rejects_bad_child_counts() {
        let one = Region::try_split(Axis::Vertical, [Region::leaf(Swatch::Slate, 1.0)]);
        assert_eq!(one, Err(SplitError::ChildCount { count: 1 }));

        let four = Region::try_split(
            Axis::Horizontal,
            (0..4).map(|_| Region::leaf(Swatch::Slate, 0.25)),
        );
        assert_eq!(four, Err(SplitError::ChildCount { count: 4 }));

        let none = Region::try_split(Axis::Horizontal, vec![]);
        assert_eq!(none, Err(SplitError::ChildCount { count: 0 }));
    }

    #[test]
    fn try_split_rejects_bad_fractions() {
        let err = Region::try_split(
            Axis::Vertical,
            [
                Region::leaf(Swatch::HotPink, 0.5),
                Region::leaf(Swatch::SkyBlue, 0.25),
            ],
        )
        .unwrap_err();
        assert!(
            matches!(err, SplitError::FractionSum { sum } if abs_diff(sum, 0.75) < 1e-12),
            "unexpected error {err:?}"
        );

        let nested = pair().with_fraction(0.0);
        let err = Region::try_split(
            Axis::Vertical,
            [nested, Region::leaf(Swatch::SkyBlue, 1.0)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            SplitError::FractionRange {
                index: 0,
                fraction: 0.0
            }
        );
    }

    #[test]
    #[should_panic(expected = "invalid split")]
    fn split_fails_fast() {
        let _ = Region::split(Axis::Vertical, [Region::leaf(Swatch::Slate, 1.0)]);
    }

    #[test]
    #[should_panic(expected = "leaf fraction must be in (0, 1]")]
    fn leaf_rejects_zero_fraction() {
        let _ = Region::leaf(Swatch::Slate, 0.0);
    }

    #[test]
    fn with_fraction_keeps_id_and_shares_children() {
        let root = pair();
        let resized = root.with_fraction(0.5);
        assert_eq!(resized.id(), root.id());
        assert_eq!(resized.fraction(), 0.5);
        assert!(Arc::ptr_eq(&root.children()[0], &resized.children()[0]));
    }

    #[test]
    fn preorder_iteration_visits_containers_first() {
        let inner = pair().with_fraction(0.5);
        let inner_ids: Vec<_> = inner.iter().map(Region::id).collect();
        let tail = Region::leaf(Swatch::LimeGreen, 0.5);
        let tail_id = tail.id();
        let root = Region::split(Axis::Horizontal, [inner, tail]);

        let order: Vec<_> = root.iter().map(Region::id).collect();
        assert_eq!(order.len(), 5);
        assert_eq!(order[0], root.id());
        assert_eq!(&order[1..4], &inner_ids[..]);
        assert_eq!(order[4], tail_id);

        assert!(root.contains_id(tail_id));
        assert_eq!(root.find(tail_id).and_then(Region::color), Some(Swatch::LimeGreen));
        assert_eq!(root.depth(), 3);
    }

    #[test]
    fn same_shape_ignores_ids() {
        let a = pair();
        let b = pair();
        assert_ne!(a, b, "fresh ids differ");
        assert!(a.same_shape(&b));

        let c = Region::split(
            Axis::Horizontal,
            [
                Region::leaf(Swatch::HotPink, 0.5),
                Region::leaf(Swatch::SkyBlue, 0.5),
            ],
        );
        assert!(!a.same_shape(&c));
    }

    #[test]
    fn validate_reports_duplicate_ids() {
        let leaf = Region::leaf(Swatch::Tangerine, 0.5);
        let twin = leaf.clone();
        let root = Region::split(Axis::Vertical, [leaf.clone(), twin]);
        assert_eq!(root.validate(), Err(SplitError::DuplicateId { id: leaf.id() }));
    }
}
