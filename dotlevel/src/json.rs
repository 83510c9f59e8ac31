use crate::layout::{in_grid, MAX_CELLS, MAX_PATH_POINTS, SNAPSHOT_VERSION};
use crate::model::{Cell, DrawMode, ExportedLevel};
use crate::Editor;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

pub fn to_json_impl(ed: &Editor) -> Value {
    #[derive(Serialize)]
    struct Doc {
        version: u32,
        mode: DrawMode,
        cells: Vec<[u8; 2]>,
        path: Vec<[u8; 2]>,
    }
    serde_json::to_value(Doc {
        version: SNAPSHOT_VERSION,
        mode: ed.mode,
        cells: ed.cells.iter().map(Cell::as_pair).collect(),
        path: ed.path.iter().map(Cell::as_pair).collect(),
    })
    .unwrap_or(Value::Null)
}

pub fn from_json_impl(ed: &mut Editor, v: Value) -> bool {
    from_json_impl_strict(ed, v).unwrap_or(false)
}

pub fn from_json_impl_strict(
    ed: &mut Editor,
    v: Value,
) -> Result<bool, (&'static str, String)> {
    #[derive(Deserialize)]
    struct DocDe {
        version: Option<u32>,
        mode: Option<DrawMode>,
        cells: Vec<[u32; 2]>,
        path: Option<Vec<[u32; 2]>>,
    }
    let doc: DocDe = serde_json::from_value(v).map_err(|e| ("json_parse", e.to_string()))?;
    let version = doc.version.unwrap_or(SNAPSHOT_VERSION);
    if version > SNAPSHOT_VERSION {
        return Err(("unsupported_version", format!("version {}", version)));
    }
    let path = doc.path.unwrap_or_default();
    if doc.cells.len() > MAX_CELLS {
        return Err(("caps_exceeded", format!("cells>{}", MAX_CELLS)));
    }
    if path.len() > MAX_PATH_POINTS {
        return Err(("caps_exceeded", format!("path>{}", MAX_PATH_POINTS)));
    }
    let mut cells = BTreeSet::new();
    for [x, y] in doc.cells {
        match Cell::checked(x, y) {
            Some(c) => {
                cells.insert(c);
            }
            None => return Err(("out_of_bounds", format!("cell [{}, {}]", x, y))),
        }
    }
    let mut trace = Vec::with_capacity(path.len());
    for [x, y] in path {
        if !in_grid(x, y) {
            return Err(("out_of_bounds", format!("path point [{}, {}]", x, y)));
        }
        let c = Cell::new(x as u8, y as u8);
        if !cells.contains(&c) {
            return Err(("invalid_structure", format!("path point [{}, {}] is not an active cell", x, y)));
        }
        trace.push(c);
    }
    ed.cells = cells;
    ed.path = trace;
    ed.mode = doc.mode.unwrap_or_default();
    ed.output = None;
    ed.bump();
    Ok(true)
}

pub fn output_string_impl(out: Option<&ExportedLevel>, pretty: bool) -> String {
    let Some(level) = out else {
        return "{}".into();
    };
    let rendered = if pretty {
        serde_json::to_string_pretty(level)
    } else {
        serde_json::to_string(level)
    };
    rendered.unwrap_or_else(|_| "{}".into())
}
