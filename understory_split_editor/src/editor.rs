// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag lifecycle controller: committed tree, live preview, and rollback.
//!
//! [`LayoutEditor`] owns the committed split tree and, while a drag is over
//! the canvas, a preview tree recomputed from the committed one on every move.
//! Leaving the canvas drops the preview; dropping commits it.
//!
//! ## States
//!
//! ```text
//!            drop                drag_enter
//!   Empty ----------> Committed ------------> Previewing
//!     ^                 ^   ^                   |   |  ^
//!     |                 |   +----- drag_exit ---+   |  | drag_move
//!     |                 +--------- drop ------------+  |
//!     |                                                 (self)
//!     +------------------ reset (from any state)
//! ```
//!
//! ## Usage
//!
//! ```
//! use kurbo::Point;
//! use understory_split_editor::{EditorState, LayoutEditor};
//! use understory_split_tree::Swatch;
//!
//! let mut editor = LayoutEditor::new();
//!
//! // The first drop on an empty canvas creates the root tile.
//! editor.on_drop(Swatch::SkyBlue, Point::new(0.5, 0.5));
//! assert_eq!(editor.state(), EditorState::Committed);
//!
//! // Dragging over the canvas previews the result.
//! editor.on_drag_enter();
//! let highlight = editor.on_drag_move(Swatch::HotPink, Point::new(0.1, 0.5));
//! assert!(highlight.is_some());
//! assert_eq!(editor.tree().unwrap().leaf_count(), 2);
//!
//! // Leaving the canvas rolls back.
//! editor.on_drag_exit();
//! assert_eq!(editor.tree().unwrap().leaf_count(), 1);
//! assert_eq!(editor.highlight(), None);
//! ```

use kurbo::{Point, Rect};
use understory_split_tree::{
    Axis, InsertPolicy, Region, RegionId, Swatch, diff_new_leaf, insert_with, partition,
};

const CANVAS: Rect = Rect::new(0.0, 0.0, 1.0, 1.0);

/// Which phase of the drag lifecycle the editor is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditorState {
    /// No tree yet.
    Empty,
    /// A stable tree and no drag in progress.
    Committed,
    /// A drag is over the canvas; a preview may be live.
    Previewing,
}

/// Suggest a split axis for a drop at `point` (normalized canvas coordinates).
///
/// Drops further from the center horizontally than vertically split into
/// columns ([`Axis::Vertical`]); everything else splits into rows.
pub fn axis_for_drop(point: Point) -> Axis {
    let dx = (point.x - 0.5).max(0.5 - point.x);
    let dy = (point.y - 0.5).max(0.5 - point.y);
    if dx > dy {
        Axis::Vertical
    } else {
        Axis::Horizontal
    }
}

#[derive(Clone, Debug)]
enum Phase {
    Empty,
    Committed(Region),
    Previewing {
        rollback: Region,
        preview: Option<Preview>,
    },
}

#[derive(Clone, Debug)]
struct Preview {
    tree: Region,
    color: Swatch,
    point: Point,
    highlight: Option<RegionId>,
    hovered: Option<RegionId>,
}

/// Controller for drag-driven edits of a split tree.
///
/// Each editor keeps its own rollback snapshot, so hosts that track several
/// concurrent drags (for example one per touch point) should use one editor
/// per drag over a shared committed tree.
#[derive(Clone, Debug)]
pub struct LayoutEditor {
    /// Thresholds forwarded to [`insert_with`].
    pub policy: InsertPolicy,
    phase: Phase,
}

impl Default for LayoutEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutEditor {
    /// Create an empty editor with the default [`InsertPolicy`].
    pub fn new() -> Self {
        Self::with_policy(InsertPolicy::default())
    }

    /// Create an empty editor with custom insertion thresholds.
    pub fn with_policy(policy: InsertPolicy) -> Self {
        Self {
            policy,
            phase: Phase::Empty,
        }
    }

    /// Create an editor that starts from an existing committed tree.
    pub fn from_tree(tree: Region, policy: InsertPolicy) -> Self {
        Self {
            policy,
            phase: Phase::Committed(tree),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EditorState {
        match self.phase {
            Phase::Empty => EditorState::Empty,
            Phase::Committed(_) => EditorState::Committed,
            Phase::Previewing { .. } => EditorState::Previewing,
        }
    }

    /// The tree to draw: the live preview if there is one, else the committed tree.
    pub fn tree(&self) -> Option<&Region> {
        match &self.phase {
            Phase::Previewing {
                preview: Some(p), ..
            } => Some(&p.tree),
            _ => self.committed(),
        }
    }

    /// The committed tree. While previewing this is the rollback target.
    pub fn committed(&self) -> Option<&Region> {
        match &self.phase {
            Phase::Empty => None,
            Phase::Committed(tree) | Phase::Previewing { rollback: tree, .. } => Some(tree),
        }
    }

    /// The live preview tree, if a drag has moved over the canvas.
    pub fn preview(&self) -> Option<&Region> {
        self.live_preview().map(|p| &p.tree)
    }

    /// The leaf the current preview would create, for highlighting.
    pub fn highlight(&self) -> Option<RegionId> {
        self.live_preview().and_then(|p| p.highlight)
    }

    /// The committed leaf currently under the drag, if any.
    pub fn hovered(&self) -> Option<RegionId> {
        self.live_preview().and_then(|p| p.hovered)
    }

    fn live_preview(&self) -> Option<&Preview> {
        match &self.phase {
            Phase::Previewing { preview, .. } => preview.as_ref(),
            _ => None,
        }
    }

    /// A drag entered the canvas.
    ///
    /// Snapshots the committed tree as the rollback target. Returns `true` if
    /// the editor is now previewing; an empty canvas has nothing to preview,
    /// and a second enter while previewing is ignored.
    pub fn on_drag_enter(&mut self) -> bool {
        match core::mem::replace(&mut self.phase, Phase::Empty) {
            Phase::Committed(tree) => {
                tracing::debug!(root = tree.id().get(), "drag entered, previewing");
                self.phase = Phase::Previewing {
                    rollback: tree,
                    preview: None,
                };
                true
            }
            other => {
                let previewing = matches!(other, Phase::Previewing { .. });
                self.phase = other;
                previewing
            }
        }
    }

    /// The drag moved to `point` (normalized canvas coordinates) carrying `color`.
    ///
    /// Recomputes the preview from the rollback target and returns the id of
    /// the leaf it would create. Returns `None` outside of [`EditorState::Previewing`].
    pub fn on_drag_move(&mut self, color: Swatch, point: Point) -> Option<RegionId> {
        let policy = self.policy;
        let Phase::Previewing { rollback, preview } = &mut self.phase else {
            return None;
        };
        let next = build_preview(&policy, rollback, color, point);
        let highlight = next.highlight;
        *preview = Some(next);
        highlight
    }

    /// The drag left the canvas: discard the preview and restore the rollback target.
    pub fn on_drag_exit(&mut self) {
        self.phase = match core::mem::replace(&mut self.phase, Phase::Empty) {
            Phase::Previewing { rollback, .. } => {
                tracing::debug!(root = rollback.id().get(), "drag exited, rolled back");
                Phase::Committed(rollback)
            }
            other => other,
        };
    }

    /// Drop `color` at `point` and commit the result.
    ///
    /// On an empty canvas this creates a single root leaf. While previewing,
    /// the preview for the same color and point is committed as is; otherwise
    /// the insertion is computed against the committed tree. Returns the id of
    /// the leaf that was added.
    pub fn on_drop(&mut self, color: Swatch, point: Point) -> Option<RegionId> {
        let policy = self.policy;
        let (tree, added) = match core::mem::replace(&mut self.phase, Phase::Empty) {
            Phase::Empty => {
                let root = Region::leaf(color, 1.0);
                let id = root.id();
                (root, Some(id))
            }
            Phase::Committed(tree) => {
                let p = build_preview(&policy, &tree, color, point);
                (p.tree, p.highlight)
            }
            Phase::Previewing { rollback, preview } => match preview {
                Some(p) if p.color == color && p.point == point => (p.tree, p.highlight),
                _ => {
                    let p = build_preview(&policy, &rollback, color, point);
                    (p.tree, p.highlight)
                }
            },
        };
        tracing::debug!(
            root = tree.id().get(),
            leaves = tree.leaf_count(),
            "dropped, committed"
        );
        self.phase = Phase::Committed(tree);
        added
    }

    /// Discard everything and return to [`EditorState::Empty`].
    pub fn reset(&mut self) {
        tracing::debug!("reset");
        self.phase = Phase::Empty;
    }
}

fn build_preview(
    policy: &InsertPolicy,
    base: &Region,
    color: Swatch,
    point: Point,
) -> Preview {
    let axis = axis_for_drop(point);
    let tree = insert_with(policy, base, color, point, axis);
    let highlight = diff_new_leaf(Some(base), &tree, point);
    let hovered = partition::leaf_at(base, CANVAS, point).map(|l| l.id);
    Preview {
        tree,
        color,
        point,
        highlight,
        hovered,
    }
}
