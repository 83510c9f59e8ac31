use wasm_bindgen::JsValue;
use web_sys::console;

pub fn info(msg: &str) { console::log_1(&JsValue::from_str(msg)); }

pub fn warn(code: &str, msg: &str) {
    console::warn_1(&JsValue::from_str(&format!("[dotlevel] {}: {}", code, msg)));
}
