pub mod model;
pub mod layout;
pub mod algorithms {
    pub mod adjacency;
    pub mod picking;
}
mod json;
mod svg;

use layout::Layout;
use model::{Cell, DrawMode, ExportedLevel};
use std::collections::BTreeSet;

/// Editing session state: active dots, the traced path and the draw mode.
///
/// Owned by the caller and mutated only through `&mut self`; there is no
/// shared or global state behind it.
#[derive(Clone, Debug)]
pub struct Editor {
    pub(crate) cells: BTreeSet<Cell>,
    pub(crate) path: Vec<Cell>, // append-only while drawing
    pub(crate) mode: DrawMode,
    pub(crate) output: Option<ExportedLevel>,
    pub(crate) layout: Layout,
    pub(crate) ver: u64,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses the raw level field. Accepts a non-negative integer, or an integral
/// decimal or exponent form ("4.0", "1e2"), fitting in `u32`; anything else
/// yields 0.
pub fn parse_level_id(input: &str) -> u32 {
    let s = input.trim();
    if s.is_empty() {
        return 0;
    }
    if let Ok(v) = s.parse::<u32>() {
        return v;
    }
    // Numeric inputs also accept forms like "1e2" or "4.0".
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v.fract() == 0.0 && v >= 0.0 && v <= u32::MAX as f64 => v as u32,
        _ => 0,
    }
}

impl Editor {
    pub fn new() -> Self {
        Editor {
            cells: BTreeSet::new(),
            path: Vec::new(),
            mode: DrawMode::Dots,
            output: None,
            layout: Layout::default(),
            ver: 1,
        }
    }

    /// Monotonic state version; increments on every mutation.
    pub fn version(&self) -> u64 {
        self.ver
    }

    pub(crate) fn bump(&mut self) {
        self.ver = self.ver.wrapping_add(1);
    }

    // Mode
    pub fn mode(&self) -> DrawMode {
        self.mode
    }
    pub fn set_mode(&mut self, mode: DrawMode) {
        if self.mode != mode {
            self.mode = mode;
            self.bump();
        }
    }

    // Cells
    pub fn toggle_cell(&mut self, x: u32, y: u32) -> bool {
        if self.mode != DrawMode::Dots {
            return false;
        }
        let Some(cell) = Cell::checked(x, y) else {
            return false;
        };
        if !self.cells.remove(&cell) {
            self.cells.insert(cell);
        }
        self.bump();
        true
    }
    pub fn is_active(&self, x: u32, y: u32) -> bool {
        Cell::checked(x, y).map_or(false, |c| self.cells.contains(&c))
    }
    pub fn cells(&self) -> Vec<Cell> {
        self.cells.iter().copied().collect()
    }
    pub fn cell_count(&self) -> u32 {
        self.cells.len() as u32
    }

    // Path
    pub fn append_path_point(&mut self, x: u32, y: u32) -> bool {
        if self.mode != DrawMode::Line || self.path_is_full() {
            return false;
        }
        match Cell::checked(x, y) {
            Some(cell) if self.cells.contains(&cell) => {
                self.path.push(cell);
                self.bump();
                true
            }
            _ => false,
        }
    }
    /// Path is capped so every snapshot stays loadable.
    pub fn path_is_full(&self) -> bool {
        self.path.len() >= layout::MAX_PATH_POINTS
    }
    pub fn path(&self) -> &[Cell] {
        &self.path
    }
    pub fn path_len(&self) -> u32 {
        self.path.len() as u32
    }
    pub fn dedup_path(&self) -> Vec<Cell> {
        algorithms::adjacency::dedup_path(&self.path)
    }

    /// Pointer/touch entry point; dispatches on the current draw mode.
    pub fn pointer_down(&mut self, x: u32, y: u32) -> bool {
        match self.mode {
            DrawMode::Dots => self.toggle_cell(x, y),
            DrawMode::Line => self.append_path_point(x, y),
        }
    }

    // Clear
    pub fn clear(&mut self) {
        self.cells.clear();
        self.path.clear();
        self.output = None;
        self.mode = DrawMode::Dots;
        self.bump();
    }

    // Export
    pub fn export_level(&self, level_id: u32) -> ExportedLevel {
        algorithms::adjacency::export_impl(&self.cells, &self.path, level_id)
    }
    pub fn generate(&mut self, level_input: &str) -> &ExportedLevel {
        let level = self.export_level(parse_level_id(level_input));
        self.output.insert(level)
    }
    pub fn output(&self) -> Option<&ExportedLevel> {
        self.output.as_ref()
    }
    pub fn output_json_string(&self) -> String {
        json::output_string_impl(self.output.as_ref(), false)
    }
    pub fn output_json_pretty(&self) -> String {
        json::output_string_impl(self.output.as_ref(), true)
    }

    // Layout + picking
    pub fn layout(&self) -> Layout {
        self.layout
    }
    pub fn set_layout(&mut self, layout: Layout) -> bool {
        if !layout.is_valid() {
            return false;
        }
        self.layout = layout;
        self.bump();
        true
    }
    pub fn pick_cell(&self, px: f32, py: f32) -> Option<Cell> {
        algorithms::picking::pick_impl(&self.layout, px, py)
    }
    pub fn pointer_at(&mut self, px: f32, py: f32) -> bool {
        match self.pick_cell(px, py) {
            Some(c) => self.pointer_down(c.x as u32, c.y as u32),
            None => false,
        }
    }
    pub fn cell_center(&self, cell: Cell) -> (f32, f32) {
        self.layout.cell_center(cell)
    }
    pub fn path_stroke_points(&self) -> Vec<f32> {
        algorithms::picking::stroke_points_impl(&self.layout, &self.path)
    }

    // Snapshot JSON + SVG
    pub fn to_json_value(&self) -> serde_json::Value {
        json::to_json_impl(self)
    }
    pub fn from_json_value(&mut self, v: serde_json::Value) -> bool {
        json::from_json_impl(self, v)
    }
    pub fn from_json_value_strict(
        &mut self,
        v: serde_json::Value,
    ) -> Result<bool, (&'static str, String)> {
        json::from_json_impl_strict(self, v)
    }
    pub fn to_svg(&self) -> String {
        svg::to_svg_impl(self)
    }
    pub fn to_svg_path(&self) -> String {
        svg::to_svg_path_impl(self)
    }
}
