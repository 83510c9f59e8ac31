use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;
mod log;

#[wasm_bindgen]
pub struct Editor { pub(crate) inner: dotlevel::Editor }

impl Editor {
    pub fn rs_new() -> Editor { Editor { inner: dotlevel::Editor::new() } }
    pub fn rs_version(&self) -> u64 { self.inner.version() }
}
