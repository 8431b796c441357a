// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Understory split-layout demos.

use kurbo::{Point, Rect};
use understory_split_tree::{Region, RegionId, Swatch, partition};

/// One character per swatch, used by [`render_ascii`].
pub fn swatch_glyph(swatch: Swatch) -> char {
    match swatch {
        Swatch::SkyBlue => 's',
        Swatch::HotPink => 'p',
        Swatch::BrightYellow => 'y',
        Swatch::LimeGreen => 'l',
        Swatch::Coral => 'c',
        Swatch::Lavender => 'v',
        Swatch::Tangerine => 't',
        Swatch::Slate => 'g',
    }
}

/// Draw `tree` as a `cols` x `rows` character grid.
///
/// Each cell shows the glyph of the leaf under its center; the `highlight`
/// leaf, if any, is drawn in upper case.
pub fn render_ascii(
    tree: &Region,
    cols: usize,
    rows: usize,
    highlight: Option<RegionId>,
) -> String {
    let bounds = Rect::new(0.0, 0.0, cols as f64, rows as f64);
    let mut out = String::with_capacity((cols + 1) * rows);
    for row in 0..rows {
        for col in 0..cols {
            let center = Point::new(col as f64 + 0.5, row as f64 + 0.5);
            let glyph = match partition::leaf_at(tree, bounds, center) {
                Some(leaf) if Some(leaf.id) == highlight => {
                    swatch_glyph(leaf.color).to_ascii_uppercase()
                }
                Some(leaf) => swatch_glyph(leaf.color),
                None => ' ',
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_split_tree::Axis;

    #[test]
    fn renders_columns_and_highlight() {
        let left = Region::leaf(Swatch::HotPink, 0.5);
        let highlight = Some(left.id());
        let tree = Region::split(Axis::Vertical, [left, Region::leaf(Swatch::SkyBlue, 0.5)]);
        assert_eq!(render_ascii(&tree, 4, 2, highlight), "PPss\nPPss\n");
        assert_eq!(render_ascii(&tree, 4, 1, None), "ppss\n");
    }
}
