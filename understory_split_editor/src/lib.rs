// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_split_editor --heading-base-level=0

//! Understory Split Editor: drag, preview, and commit for split-layout trees.
//!
//! This crate wraps [`understory_split_tree`] in the small amount of state an
//! interactive editor needs while a tile is being dragged over the canvas:
//!
//! - the committed tree, which is also the rollback target during a drag,
//! - a preview tree recomputed from the committed tree on every move,
//! - the id of the leaf the preview would add, for highlighting,
//! - the committed leaf currently under the pointer.
//!
//! See [`LayoutEditor`] for the state machine and [`axis_for_drop`] for how a
//! drop position picks the orientation of a new split.
//!
//! The host is responsible for capturing pointer events, normalizing them to
//! the canvas (`(0, 0)` top-left, `(1, 1)` bottom-right), and painting
//! [`LayoutEditor::tree`] with [`understory_split_tree::partition`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

mod editor;

pub use editor::{EditorState, LayoutEditor, axis_for_drop};
