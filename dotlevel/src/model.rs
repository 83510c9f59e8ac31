use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::layout::GRID_SIZE;

/// Grid coordinate of a selectable dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: u8,
    pub y: u8,
}

impl Cell {
    pub const fn new(x: u8, y: u8) -> Self {
        Cell { x, y }
    }

    /// Builds a cell only when both coordinates fall inside the grid.
    pub fn checked(x: u32, y: u32) -> Option<Self> {
        if x < GRID_SIZE as u32 && y < GRID_SIZE as u32 {
            Some(Cell::new(x as u8, y as u8))
        } else {
            None
        }
    }

    pub fn as_pair(&self) -> [u8; 2] {
        [self.x, self.y]
    }

    /// Row-major position, 0..81.
    pub fn scan_index(&self) -> usize {
        self.y as usize * GRID_SIZE + self.x as usize
    }
}

// Row-major: display order and grid scan order.
impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawMode {
    #[default]
    Dots,
    Line,
}

impl DrawMode {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(DrawMode::Dots),
            1 => Some(DrawMode::Line),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DrawMode::Dots => "dots",
            DrawMode::Line => "line",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelPoint {
    pub dot: [u8; 2],
    pub join: Vec<usize>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedLevel {
    pub id: u32,
    pub points: Vec<LevelPoint>,
}
