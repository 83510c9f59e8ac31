use crate::Editor;
use dotlevel::layout::{in_grid, Layout, GRID_SIZE, MAX_PATH_POINTS};
use dotlevel::model::DrawMode;
use js_sys::Promise;
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;
use crate::{error, interop, log};

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
impl Editor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Editor {
        crate::Editor::rs_new()
    }
    pub fn version(&self) -> u64 {
        self.rs_version()
    }

    // Mode: 0 = dots, 1 = line
    pub fn mode(&self) -> u8 {
        match self.inner.mode() {
            DrawMode::Dots => 0,
            DrawMode::Line => 1,
        }
    }
    pub fn set_mode(&mut self, mode: u8) -> bool {
        match DrawMode::from_u8(mode) {
            Some(m) => {
                self.inner.set_mode(m);
                true
            }
            None => false,
        }
    }
    pub fn set_mode_res(&mut self, mode: u8) -> JsValue {
        if DrawMode::from_u8(mode).is_none() {
            return error::invalid_mode(mode);
        }
        error::ok(JsValue::from_bool(self.set_mode(mode)))
    }

    // Dots + path
    pub fn toggle_cell(&mut self, x: u32, y: u32) -> bool {
        self.inner.toggle_cell(x, y)
    }
    pub fn toggle_cell_res(&mut self, x: u32, y: u32) -> JsValue {
        if let Some(e) = check_grid(x, y) {
            return e;
        }
        if self.inner.mode() != DrawMode::Dots {
            return error::wrong_mode(DrawMode::Dots.as_str());
        }
        self.inner.toggle_cell(x, y);
        error::ok(JsValue::from_bool(self.inner.is_active(x, y)))
    }
    pub fn append_path_point(&mut self, x: u32, y: u32) -> bool {
        self.inner.append_path_point(x, y)
    }
    pub fn append_path_point_res(&mut self, x: u32, y: u32) -> JsValue {
        if let Some(e) = check_grid(x, y) {
            return e;
        }
        if self.inner.mode() != DrawMode::Line {
            return error::wrong_mode(DrawMode::Line.as_str());
        }
        if !self.inner.is_active(x, y) {
            return error::inactive_cell(x, y);
        }
        if self.inner.path_is_full() {
            return error::caps_exceeded("path", MAX_PATH_POINTS);
        }
        self.inner.append_path_point(x, y);
        error::ok(JsValue::from_f64(self.inner.path_len() as f64))
    }
    pub fn pointer_down(&mut self, x: u32, y: u32) -> bool {
        self.inner.pointer_down(x, y)
    }
    pub fn pointer_at(&mut self, px: f32, py: f32) -> bool {
        self.inner.pointer_at(px, py)
    }
    pub fn pointer_at_res(&mut self, px: f32, py: f32) -> JsValue {
        if !px.is_finite() {
            return error::non_finite("px");
        }
        if !py.is_finite() {
            return error::non_finite("py");
        }
        error::ok(JsValue::from_bool(self.inner.pointer_at(px, py)))
    }
    pub fn is_active(&self, x: u32, y: u32) -> bool {
        self.inner.is_active(x, y)
    }
    pub fn cell_count(&self) -> u32 {
        self.inner.cell_count()
    }
    pub fn path_len(&self) -> u32 {
        self.inner.path_len()
    }
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    // Render data
    pub fn get_cell_data(&self) -> JsValue {
        let cells = self.inner.cells();
        let mut centers = Vec::with_capacity(cells.len() * 2);
        for c in &cells {
            let (x, y) = self.inner.cell_center(*c);
            centers.push(x);
            centers.push(y);
        }
        let obj = interop::new_obj();
        interop::set_kv(&obj, "cells", &interop::arr_u8(&interop::flat_pairs(&cells)).into());
        interop::set_kv(&obj, "centers", &interop::arr_f32(&centers).into());
        obj.into()
    }
    pub fn get_path_data(&self) -> JsValue {
        let obj = interop::new_obj();
        interop::set_kv(
            &obj,
            "points",
            &interop::arr_u8(&interop::flat_pairs(self.inner.path())).into(),
        );
        interop::set_kv(
            &obj,
            "stroke",
            &interop::arr_f32(&self.inner.path_stroke_points()).into(),
        );
        obj.into()
    }
    pub fn dedup_path(&self) -> JsValue {
        interop::arr_u8(&interop::flat_pairs(&self.inner.dedup_path())).into()
    }
    pub fn pick_cell(&self, px: f32, py: f32) -> JsValue {
        match self.inner.pick_cell(px, py) {
            Some(c) => serde_wasm_bindgen::to_value(&c.as_pair()).unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    }

    // Layout
    pub fn set_layout(&mut self, pitch: f32, offset: f32, dot_radius: f32, size: f32) -> bool {
        self.inner.set_layout(Layout { pitch, offset, dot_radius, size })
    }
    pub fn set_layout_res(&mut self, pitch: f32, offset: f32, dot_radius: f32, size: f32) -> JsValue {
        for (name, v) in [("pitch", pitch), ("offset", offset), ("dot_radius", dot_radius), ("size", size)] {
            if !v.is_finite() {
                return error::non_finite(name);
            }
        }
        for (name, v) in [("pitch", pitch), ("dot_radius", dot_radius), ("size", size)] {
            if v <= 0.0 {
                return error::out_of_range(name, 0.0, f64::INFINITY, v as f64);
            }
        }
        error::ok(JsValue::from_bool(self.set_layout(pitch, offset, dot_radius, size)))
    }
    pub fn get_layout(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.layout()).unwrap_or(JsValue::NULL)
    }

    // Export
    pub fn export_level(&self, level_id: u32) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.export_level(level_id)).unwrap_or(JsValue::NULL)
    }
    pub fn generate(&mut self, level_input: &str) -> JsValue {
        let level = self.inner.generate(level_input);
        serde_wasm_bindgen::to_value(level).unwrap_or(JsValue::NULL)
    }
    pub fn output(&self) -> JsValue {
        match self.inner.output() {
            Some(level) => serde_wasm_bindgen::to_value(level).unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    }
    pub fn output_json(&self, pretty: bool) -> String {
        if pretty {
            self.inner.output_json_pretty()
        } else {
            self.inner.output_json_string()
        }
    }
    pub fn log_output(&self) {
        log::info(&format!("output: {}", self.inner.output_json_pretty()));
    }
    pub fn log_output_res(&self) -> JsValue {
        if self.inner.output().is_none() {
            return error::no_output();
        }
        self.log_output();
        error::ok(JsValue::from_bool(true))
    }
    /// Writes the compact output JSON to the system clipboard.
    pub fn copy_output(&self) -> Option<Promise> {
        let window = web_sys::window()?;
        Some(window.navigator().clipboard().write_text(&self.inner.output_json_string()))
    }
    pub fn copy_output_res(&self) -> JsValue {
        if self.inner.output().is_none() {
            return error::no_output();
        }
        match self.copy_output() {
            Some(p) => error::ok(p.into()),
            None => error::err("clipboard_unavailable", "no browser window", None),
        }
    }

    // Snapshot JSON + SVG
    pub fn to_json(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.to_json_value()).unwrap_or(JsValue::NULL)
    }
    pub fn from_json(&mut self, v: JsValue) -> bool {
        match serde_wasm_bindgen::from_value::<serde_json::Value>(v) {
            Ok(val) => self.inner.from_json_value(val),
            Err(_) => false,
        }
    }
    pub fn from_json_res(&mut self, v: JsValue) -> JsValue {
        match serde_wasm_bindgen::from_value::<serde_json::Value>(v) {
            Ok(val) => match self.inner.from_json_value_strict(val) {
                Ok(ok) => error::ok(JsValue::from_bool(ok)),
                Err((code, msg)) => {
                    log::warn(code, &msg);
                    error::err(code, msg, None)
                }
            },
            Err(e) => error::err("json_parse", format!("{}", e), None),
        }
    }
    pub fn to_svg(&self) -> String {
        self.inner.to_svg()
    }
    pub fn to_svg_path(&self) -> String {
        self.inner.to_svg_path()
    }
}

fn check_grid(x: u32, y: u32) -> Option<JsValue> {
    if in_grid(x, y) {
        return None;
    }
    let max = (GRID_SIZE - 1) as f64;
    Some(if x as usize >= GRID_SIZE {
        error::out_of_range("x", 0.0, max, x as f64)
    } else {
        error::out_of_range("y", 0.0, max, y as f64)
    })
}
