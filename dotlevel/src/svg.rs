use crate::layout::{all_cells, DOT_ACTIVE, DOT_IDLE, PATH_STROKE, STROKE_WIDTH};
use crate::Editor;
use std::fmt::Write;

pub fn to_svg_path_impl(ed: &Editor) -> String {
    let mut d = String::new();
    for (i, c) in ed.path.iter().enumerate() {
        let (x, y) = ed.layout.cell_center(*c);
        let cmd = if i == 0 { "M" } else { " L" };
        let _ = write!(d, "{} {} {}", cmd, x, y);
    }
    d
}

pub fn to_svg_impl(ed: &Editor) -> String {
    let layout = &ed.layout;
    let mut s = String::new();
    let _ = write!(
        s,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{0}" height="{0}" viewBox="0 0 {0} {0}">"#,
        layout.size
    );
    for cell in all_cells() {
        let (cx, cy) = layout.cell_center(cell);
        let _ = write!(
            s,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            cx, cy, layout.dot_radius, DOT_IDLE
        );
    }
    if ed.path.len() >= 2 {
        let mut pts = String::new();
        for (i, c) in ed.path.iter().enumerate() {
            let (x, y) = layout.cell_center(*c);
            if i > 0 {
                pts.push(' ');
            }
            let _ = write!(pts, "{},{}", x, y);
        }
        let _ = write!(
            s,
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
            pts, PATH_STROKE, STROKE_WIDTH
        );
    }
    for cell in ed.cells.iter() {
        let (cx, cy) = layout.cell_center(*cell);
        let _ = write!(
            s,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            cx, cy, layout.dot_radius, DOT_ACTIVE
        );
    }
    s.push_str("</svg>");
    s
}
