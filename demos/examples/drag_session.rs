// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted drag session over a split-layout canvas.
//!
//! This example drives `understory_split_editor::LayoutEditor` through a few
//! drags: some dropped, one abandoned. After each event it prints the tree the
//! host would paint, with the previewed leaf in upper case.
//!
//! Run:
//! - `cargo run -p understory_demos --example drag_session`
//! - `RUST_LOG=trace cargo run -p understory_demos --example drag_session` to see insertion decisions.

use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_demos::render_ascii;
use understory_split_editor::LayoutEditor;
use understory_split_tree::{Swatch, partition};

const COLS: usize = 48;
const ROWS: usize = 12;

enum Step {
    Drop(Swatch, Point),
    Abandon(Swatch, Point),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let script = [
        Step::Drop(Swatch::SkyBlue, Point::new(0.5, 0.5)),
        Step::Drop(Swatch::HotPink, Point::new(0.2, 0.5)),
        Step::Drop(Swatch::BrightYellow, Point::new(0.5, 0.5)),
        Step::Abandon(Swatch::Coral, Point::new(0.9, 0.2)),
        Step::Drop(Swatch::LimeGreen, Point::new(0.1, 0.5)),
        Step::Drop(Swatch::Lavender, Point::new(0.85, 0.85)),
    ];

    let mut editor = LayoutEditor::new();
    for step in script {
        match step {
            Step::Drop(color, point) => {
                editor.on_drag_enter();
                let shown = editor.on_drag_move(color, point);
                if let Some(preview) = editor.preview() {
                    println!("preview {color:?} at ({:.2}, {:.2}):", point.x, point.y);
                    print!("{}", render_ascii(preview, COLS, ROWS, shown));
                }
                editor.on_drop(color, point);
            }
            Step::Abandon(color, point) => {
                editor.on_drag_enter();
                let shown = editor.on_drag_move(color, point);
                if let Some(preview) = editor.preview() {
                    println!(
                        "preview {color:?} at ({:.2}, {:.2}), then drag exits:",
                        point.x, point.y
                    );
                    print!("{}", render_ascii(preview, COLS, ROWS, shown));
                }
                editor.on_drag_exit();
            }
        }
        if let Some(tree) = editor.tree() {
            println!(
                "committed ({} tiles, depth {}):",
                tree.leaf_count(),
                tree.depth()
            );
            print!("{}", render_ascii(tree, COLS, ROWS, None));
            println!();
        }
    }

    if let Some(tree) = editor.tree() {
        let canvas = Rect::new(0.0, 0.0, 960.0, 540.0);
        println!("final rectangles on a 960x540 canvas:");
        for leaf in partition::leaf_rects(tree, canvas) {
            println!(
                "  {:?}  depth {}  {:>6.1} {:>6.1} {:>6.1} {:>6.1}",
                leaf.color, leaf.depth, leaf.rect.x0, leaf.rect.y0, leaf.rect.x1, leaf.rect.y1
            );
        }
    }
}
