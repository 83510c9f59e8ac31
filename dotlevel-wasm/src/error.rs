// Result envelopes for the `_res` API: { ok, value } or { ok: false, error }.

use crate::interop::{new_obj, set_kv};
use js_sys::Object;
use wasm_bindgen::JsValue;

fn num(v: impl Into<f64>) -> JsValue { JsValue::from_f64(v.into()) }

fn data(pairs: &[(&str, JsValue)]) -> JsValue {
    let d = new_obj();
    for (k, v) in pairs { set_kv(&d, k, v); }
    d.into()
}

fn envelope(ok: bool) -> Object {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(ok));
    root
}

pub fn ok(v: JsValue) -> JsValue {
    let root = envelope(true);
    set_kv(&root, "value", &v);
    root.into()
}

pub fn err(code: &'static str, message: impl Into<String>, detail: Option<JsValue>) -> JsValue {
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = detail { set_kv(&e, "data", &d); }
    let root = envelope(false);
    set_kv(&root, "error", &e.into());
    root.into()
}

pub fn non_finite(param: &str) -> JsValue {
    err("non_finite", format!("{} is NaN or infinite", param), Some(data(&[("param", param.into())])))
}

pub fn out_of_range(param: &str, min: f64, max: f64, got: f64) -> JsValue {
    let d = data(&[("param", param.into()), ("min", num(min)), ("max", num(max)), ("got", num(got))]);
    err("out_of_range", format!("{} must lie in [{}, {}]", param, min, max), Some(d))
}

pub fn invalid_mode(got: u8) -> JsValue {
    err("invalid_mode", "mode must be 0 (dots) or 1 (line)", Some(data(&[("got", num(got))])))
}

pub fn wrong_mode(expected: &str) -> JsValue {
    let d = data(&[("expected", expected.into())]);
    err("wrong_mode", format!("only allowed in {} mode", expected), Some(d))
}

pub fn inactive_cell(x: u32, y: u32) -> JsValue {
    let d = data(&[("x", num(x)), ("y", num(y))]);
    err("inactive_cell", "path points must land on an active dot", Some(d))
}

pub fn caps_exceeded(what: &str, max: usize) -> JsValue {
    let d = data(&[("what", what.into()), ("max", num(max as f64))]);
    err("caps_exceeded", format!("{} holds at most {} entries", what, max), Some(d))
}

pub fn no_output() -> JsValue { err("no_output", "generate a level first", None) }
