use crate::layout::{all_cells, Layout};
use crate::model::Cell;

pub fn pick_impl(layout: &Layout, x: f32, y: f32) -> Option<Cell> {
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    let r2 = layout.dot_radius * layout.dot_radius;
    let mut best: Option<(Cell, f32)> = None;
    for cell in all_cells() {
        let (cx, cy) = layout.cell_center(cell);
        let d2 = (cx - x).powi(2) + (cy - y).powi(2);
        // strict < keeps the first cell in scan order on ties
        if d2 <= r2 && best.map_or(true, |(_, bd)| d2 < bd) {
            best = Some((cell, d2));
        }
    }
    best.map(|(cell, _)| cell)
}

pub fn stroke_points_impl(layout: &Layout, path: &[Cell]) -> Vec<f32> {
    let mut out = Vec::with_capacity(path.len() * 2);
    for c in path {
        let (px, py) = layout.cell_center(*c);
        out.push(px);
        out.push(py);
    }
    out
}
