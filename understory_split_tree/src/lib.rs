// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_split_tree --heading-base-level=0

//! Understory Split Tree: immutable split-layout trees grown by drag and drop.
//!
//! A split tree divides a canvas into colored tiles. Every node is a
//! [`Region`]: either a leaf painted with a [`Swatch`], or a split that cuts its
//! box along an [`Axis`] into two or three children, each owning a fraction of
//! the extent. Dropping a tile onto the canvas calls [`insert`], which decides
//! whether to split the leaf under the drop, add a sibling next to it, or
//! descend one level with the orientation flipped.
//!
//! - Trees are values. [`insert`] never mutates its input; it returns a new
//!   tree that shares every untouched subtree with the old one, so a host can
//!   keep the old version around as a rollback target.
//! - [`RegionId`]s survive across versions. [`diff_new_leaf`] uses that to find
//!   the one leaf an insertion created, for highlighting.
//! - The [`partition`] module computes the rectangle each region covers. It is
//!   the same partition used by [`diff_new_leaf`], so renderers and highlights
//!   agree.
//!
//! ## Insertion rules
//!
//! For a drop at a position normalized to the current region's box:
//!
//! - **Leaf**: becomes a two-way split along the requested axis. The new tile
//!   goes first when the drop is in the leading half, second otherwise.
//! - **Split with two children**: if the drop lies in the center band or in an
//!   edge margin ([`InsertPolicy`]), a third sibling is added in drop order and
//!   all fractions are reset to `1/3`.
//! - **Otherwise**: the drop descends into the child whose center is nearest,
//!   with the coordinate along the split remapped to that child and the axis
//!   flipped, so nested splits alternate between columns and rows.
//!
//! ## Not a layout engine
//!
//! Fractions are plain proportions; there is no measurement, no minimum size,
//! and no flex or grid semantics. Drag capture, hit-testing of pointer events,
//! and painting belong to the host; see `understory_split_editor` for a small
//! controller that drives preview and commit.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_split_tree::{Axis, Region, Swatch, diff_new_leaf, insert, partition};
//!
//! let root = Region::leaf(Swatch::SkyBlue, 1.0);
//! let root = insert(&root, Swatch::HotPink, Point::new(0.2, 0.8), Axis::Vertical);
//!
//! let drop = Point::new(0.5, 0.5);
//! let next = insert(&root, Swatch::BrightYellow, drop, Axis::Vertical);
//! assert_eq!(next.children().len(), 3);
//!
//! let new_leaf = diff_new_leaf(Some(&root), &next, drop).unwrap();
//! let leaves = partition::leaf_rects(&next, Rect::new(0.0, 0.0, 300.0, 100.0));
//! let highlighted = leaves.iter().find(|l| l.id == new_leaf).unwrap();
//! assert_eq!(highlighted.color, Swatch::BrightYellow);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod diff;
mod error;
mod insert;
pub mod partition;
mod region;
mod types;
mod util;

pub use diff::diff_new_leaf;
pub use error::SplitError;
pub use insert::{InsertPolicy, insert, insert_with};
pub use region::{Children, FRACTION_TOLERANCE, Iter, MAX_CHILDREN, Region, RegionKind};
pub use types::{Axis, RegionId, Swatch};
