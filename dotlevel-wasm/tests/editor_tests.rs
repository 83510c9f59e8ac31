use dotlevel_wasm::Editor;
use js_sys::{Float32Array, Reflect, Uint8Array};
use serde::Deserialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Deserialize, Debug, PartialEq)]
struct Point {
    dot: Vec<u8>,
    join: Vec<usize>,
}

#[derive(Deserialize, Debug)]
struct Level {
    id: u32,
    points: Vec<Point>,
}

#[wasm_bindgen_test]
fn dots_then_line_then_generate() {
    let mut ed = Editor::new();
    assert_eq!(ed.mode(), 0);
    assert!(ed.pointer_down(0, 0));
    assert!(ed.pointer_down(1, 0));
    assert!(ed.pointer_down(2, 0));
    assert_eq!(ed.cell_count(), 3);

    assert!(ed.set_mode(1));
    for x in 0..3 {
        assert!(ed.pointer_down(x, 0));
    }
    assert_eq!(ed.path_len(), 3);

    let level: Level = serde_wasm_bindgen::from_value(ed.generate("4")).unwrap();
    assert_eq!(level.id, 4);
    assert_eq!(level.points.len(), 3);
    assert_eq!(level.points[1], Point { dot: vec![1, 0], join: vec![0, 2] });
    assert_eq!(
        ed.output_json(false),
        r#"{"id":4,"points":[{"dot":[0,0],"join":[1]},{"dot":[1,0],"join":[0,2]},{"dot":[2,0],"join":[1]}]}"#
    );
}

#[wasm_bindgen_test]
fn bad_level_input_defaults_to_zero() {
    let mut ed = Editor::new();
    let level: Level = serde_wasm_bindgen::from_value(ed.generate("abc")).unwrap();
    assert_eq!(level.id, 0);
    assert!(level.points.is_empty());
    let level: Level = serde_wasm_bindgen::from_value(ed.generate("")).unwrap();
    assert_eq!(level.id, 0);
}

#[wasm_bindgen_test]
fn render_data_and_clear() {
    let mut ed = Editor::new();
    ed.toggle_cell(1, 2);
    ed.set_mode(1);
    ed.append_path_point(1, 2);
    ed.append_path_point(1, 2);

    let cd = ed.get_cell_data();
    let cells = Uint8Array::new(&Reflect::get(&cd, &JsValue::from_str("cells")).unwrap());
    let centers = Float32Array::new(&Reflect::get(&cd, &JsValue::from_str("centers")).unwrap());
    assert_eq!(cells.to_vec(), vec![1, 2]);
    assert_eq!(centers.to_vec(), vec![50.0, 85.0]);

    let pd = ed.get_path_data();
    let stroke = Float32Array::new(&Reflect::get(&pd, &JsValue::from_str("stroke")).unwrap());
    assert_eq!(stroke.length(), 4);
    assert_eq!(Uint8Array::new(&ed.dedup_path()).to_vec(), vec![1, 2]);

    ed.clear();
    assert_eq!(ed.cell_count(), 0);
    assert_eq!(ed.path_len(), 0);
    assert_eq!(ed.mode(), 0);
    assert!(ed.output().is_null());
}

#[wasm_bindgen_test]
fn pick_and_pointer_at() {
    let mut ed = Editor::new();
    let p: Vec<u8> = serde_wasm_bindgen::from_value(ed.pick_cell(85.0, 15.0)).unwrap();
    assert_eq!(p, vec![2, 0]);
    assert!(ed.pick_cell(32.0, 32.0).is_null());
    assert!(ed.pointer_at(85.0, 15.0));
    assert!(ed.is_active(2, 0));
}

#[wasm_bindgen_test]
fn json_roundtrip_and_svg() {
    let mut ed = Editor::new();
    ed.toggle_cell(0, 0);
    ed.toggle_cell(1, 1);
    ed.set_mode(1);
    ed.append_path_point(0, 0);
    ed.append_path_point(1, 1);

    let mut ed2 = Editor::new();
    assert!(ed2.from_json(ed.to_json()));
    assert_eq!(ed2.cell_count(), 2);
    assert_eq!(ed2.path_len(), 2);
    assert_eq!(ed2.mode(), 1);

    assert!(ed2.to_svg().contains("<polyline"));
    assert_eq!(ed2.to_svg_path(), "M 15 15 L 50 50");
}
