// Grid geometry, canvas layout and ingestion limits

use serde::{Deserialize, Serialize};

use crate::model::Cell;

pub const GRID_SIZE: usize = 9;
pub const MAX_CELLS: usize = GRID_SIZE * GRID_SIZE;

// Snapshot caps
pub const MAX_PATH_POINTS: usize = 65_536;
pub const SNAPSHOT_VERSION: u32 = 1;

// Canvas defaults (px)
pub const DEFAULT_PITCH: f32 = 35.0;
pub const DEFAULT_OFFSET: f32 = 15.0;
pub const DEFAULT_DOT_RADIUS: f32 = 10.0;
pub const DEFAULT_CANVAS_SIZE: f32 = 320.0;
pub const STROKE_WIDTH: f32 = 10.0;

// Palette
pub const DOT_IDLE: &str = "#ddd";
pub const DOT_ACTIVE: &str = "#7232d2a4";
pub const PATH_STROKE: &str = "#7232d240";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub pitch: f32,
    pub offset: f32,
    pub dot_radius: f32,
    pub size: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            pitch: DEFAULT_PITCH,
            offset: DEFAULT_OFFSET,
            dot_radius: DEFAULT_DOT_RADIUS,
            size: DEFAULT_CANVAS_SIZE,
        }
    }
}

impl Layout {
    pub fn is_valid(&self) -> bool {
        in_positive_bounds(self.pitch)
            && in_positive_bounds(self.dot_radius)
            && in_positive_bounds(self.size)
            && self.offset.is_finite()
    }

    pub fn cell_center(&self, cell: Cell) -> (f32, f32) {
        (
            cell.x as f32 * self.pitch + self.offset,
            cell.y as f32 * self.pitch + self.offset,
        )
    }
}

#[inline]
pub fn in_positive_bounds(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

#[inline]
pub fn in_grid(x: u32, y: u32) -> bool {
    (x as usize) < GRID_SIZE && (y as usize) < GRID_SIZE
}

/// Every grid cell in row-major order.
pub fn all_cells() -> impl Iterator<Item = Cell> {
    (0..GRID_SIZE as u8).flat_map(|y| (0..GRID_SIZE as u8).map(move |x| Cell::new(x, y)))
}
