//! Adjacency derivation: turns the traced path into per-dot join lists.
//!
//! The dedup list is the path with revisits removed, first occurrence wins.
//! Join indices always point into that list, so a dot's neighbours are
//! addressed by where they first appeared on the path.

use crate::model::{Cell, ExportedLevel, LevelPoint};
use std::collections::{BTreeSet, HashMap, HashSet};

pub fn dedup_path(path: &[Cell]) -> Vec<Cell> {
    let mut seen = HashSet::with_capacity(path.len());
    path.iter().copied().filter(|c| seen.insert(*c)).collect()
}

struct Entry {
    first: Option<usize>,
    cell: Cell,
    join: Vec<usize>,
}

impl Entry {
    // Drawn dots by first path index, undrawn ones after them in scan order.
    fn sort_key(&self) -> (u8, usize) {
        match self.first {
            Some(i) => (0, i),
            None => (1, self.cell.scan_index()),
        }
    }
}

fn collect_entry(cell: Cell, path: &[Cell], slots: &HashMap<Cell, usize>) -> Entry {
    let mut first = None;
    let mut join = Vec::new();
    for (i, p) in path.iter().enumerate() {
        if *p != cell {
            continue;
        }
        first.get_or_insert(i);
        // Joins repeat when a dot is revisited; kept as-is.
        for n in [i.checked_sub(1), i.checked_add(1)].into_iter().flatten() {
            if let Some(&k) = path.get(n).and_then(|q| slots.get(q)) {
                join.push(k);
            }
        }
    }
    Entry { first, cell, join }
}

pub fn export_impl(cells: &BTreeSet<Cell>, path: &[Cell], id: u32) -> ExportedLevel {
    let unique = dedup_path(path);
    let slots: HashMap<Cell, usize> = unique.iter().enumerate().map(|(i, c)| (*c, i)).collect();
    let mut entries: Vec<Entry> = cells
        .iter()
        .map(|c| collect_entry(*c, path, &slots))
        .collect();
    entries.sort_by_key(Entry::sort_key);
    ExportedLevel {
        id,
        points: entries
            .into_iter()
            .map(|e| LevelPoint {
                dot: e.cell.as_pair(),
                join: e.join,
            })
            .collect(),
    }
}
