use dotlevel::model::{Cell, DrawMode, LevelPoint};
use dotlevel::{parse_level_id, Editor};

fn editor_with(cells: &[(u32, u32)], path: &[(u32, u32)]) -> Editor {
    let mut ed = Editor::new();
    for &(x, y) in cells {
        assert!(ed.toggle_cell(x, y));
    }
    ed.set_mode(DrawMode::Line);
    for &(x, y) in path {
        assert!(ed.append_path_point(x, y));
    }
    ed
}

#[test]
fn straight_line_links_neighbours() {
    let ed = editor_with(&[(0, 0), (1, 0), (2, 0)], &[(0, 0), (1, 0), (2, 0)]);
    let out = ed.export_level(0);
    assert_eq!(
        out.points,
        vec![
            LevelPoint { dot: [0, 0], join: vec![1] },
            LevelPoint { dot: [1, 0], join: vec![0, 2] },
            LevelPoint { dot: [2, 0], join: vec![1] },
        ]
    );
}

#[test]
fn points_follow_path_order_not_grid_order() {
    let ed = editor_with(&[(0, 0), (4, 4), (8, 8)], &[(8, 8), (4, 4), (0, 0)]);
    let out = ed.export_level(7);
    assert_eq!(out.id, 7);
    let dots: Vec<[u8; 2]> = out.points.iter().map(|p| p.dot).collect();
    assert_eq!(dots, vec![[8, 8], [4, 4], [0, 0]]);
    assert_eq!(out.points[0].join, vec![1]);
    assert_eq!(out.points[2].join, vec![1]);
}

#[test]
fn closed_loop_reuses_dedup_indices() {
    // Triangle traced back to its start.
    let ed = editor_with(
        &[(0, 0), (2, 0), (1, 2)],
        &[(0, 0), (2, 0), (1, 2), (0, 0)],
    );
    let out = ed.export_level(1);
    assert_eq!(out.points.len(), 3);
    assert_eq!(out.points[0].dot, [0, 0]);
    // First occurrence joins 1, revisit at the end joins 2.
    assert_eq!(out.points[0].join, vec![1, 2]);
    assert_eq!(out.points[1].join, vec![0, 2]);
    assert_eq!(out.points[2].join, vec![1, 0]);
}

#[test]
fn undrawn_cells_trail_in_scan_order() {
    let ed = editor_with(&[(5, 5), (0, 3), (3, 0), (1, 1), (2, 1)], &[(2, 1), (1, 1)]);
    let out = ed.export_level(0);
    let dots: Vec<[u8; 2]> = out.points.iter().map(|p| p.dot).collect();
    assert_eq!(dots, vec![[2, 1], [1, 1], [3, 0], [0, 3], [5, 5]]);
    assert!(out.points[2].join.is_empty());
    assert!(out.points[4].join.is_empty());
}

#[test]
fn no_active_cells_exports_empty_points() {
    let mut ed = editor_with(&[(0, 0), (1, 0)], &[(0, 0), (1, 0), (0, 0)]);
    ed.set_mode(DrawMode::Dots);
    assert!(ed.toggle_cell(0, 0));
    assert!(ed.toggle_cell(1, 0));
    assert_eq!(ed.path_len(), 3);
    assert!(ed.export_level(0).points.is_empty());
}

#[test]
fn removed_cell_keeps_path_indices() {
    let mut ed = editor_with(&[(0, 0), (1, 0), (2, 0)], &[(0, 0), (1, 0), (2, 0)]);
    ed.set_mode(DrawMode::Dots);
    assert!(ed.toggle_cell(1, 0));
    let out = ed.export_level(0);
    assert_eq!(out.points.len(), 2);
    assert_eq!(out.points[0].join, vec![1]);
    assert_eq!(out.points[1].dot, [2, 0]);
    assert_eq!(out.points[1].join, vec![1]);
    assert_eq!(ed.dedup_path().len(), 3);
}

#[test]
fn level_id_parsing() {
    assert_eq!(parse_level_id("abc"), 0);
    assert_eq!(parse_level_id(""), 0);
    assert_eq!(parse_level_id("  12 "), 12);
    assert_eq!(parse_level_id("1e2"), 100);
    assert_eq!(parse_level_id("4.0"), 4);
    assert_eq!(parse_level_id("4.5"), 0);
    assert_eq!(parse_level_id("-3"), 0);
    assert_eq!(parse_level_id("99999999999"), 0);
}

#[test]
fn generate_stores_output_and_renders_json() {
    let mut ed = editor_with(&[(0, 0), (1, 0)], &[(0, 0), (1, 0)]);
    assert_eq!(ed.output_json_string(), "{}");
    let id = ed.generate("abc").id;
    assert_eq!(id, 0);
    assert_eq!(
        ed.output_json_string(),
        r#"{"id":0,"points":[{"dot":[0,0],"join":[1]},{"dot":[1,0],"join":[0]}]}"#
    );
    assert!(ed.output_json_pretty().contains("\n  \"id\": 0"));
    ed.generate("5");
    assert_eq!(ed.output().map(|o| o.id), Some(5));
}

#[test]
fn dedup_path_is_exposed_in_first_occurrence_order() {
    let ed = editor_with(&[(0, 0), (1, 0)], &[(1, 0), (0, 0), (1, 0)]);
    assert_eq!(ed.dedup_path(), vec![Cell::new(1, 0), Cell::new(0, 0)]);
}
