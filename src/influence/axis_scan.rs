//! Axis scan influence algorithm.
//!
//! Walks outward from each cell in the four cardinal directions, collecting
//! contiguous room cells until a wall or the grid edge stops the scan.
//!
//! Each cell reads only the immutable room mask, so cells are independent and
//! the parallel variant spreads them over the rayon pool.

use rayon::prelude::*;

use crate::grid::{Coordinate, Direction};
use crate::room::{Neighbours, RoomGraph};

use super::InfluenceAlgorithm;

/// Axis-aligned visibility scan.
#[derive(Debug, Clone, Default)]
pub struct AxisScan {
    /// Scan cells on the rayon thread pool instead of the calling thread.
    pub parallel: bool,
}

impl AxisScan {
    /// Sequential scan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan using rayon.
    pub fn parallel() -> Self {
        AxisScan { parallel: true }
    }

    /// Compute neighbours for every cell from a flat row-major room mask.
    /// Returns one entry per cell, same order as the mask.
    pub fn scan_flat(&self, mask: &[bool], width: usize, height: usize) -> Vec<Neighbours> {
        if self.parallel {
            (0..width * height)
                .into_par_iter()
                .map(|idx| scan_cell(mask, width, height, idx / width, idx % width))
                .collect()
        } else {
            (0..width * height)
                .map(|idx| scan_cell(mask, width, height, idx / width, idx % width))
                .collect()
        }
    }
}

impl InfluenceAlgorithm for AxisScan {
    fn calculate(&self, graph: &mut RoomGraph) {
        let (width, height) = (graph.width(), graph.height());
        let mask = graph.room_mask();
        let scanned = self.scan_flat(&mask, width, height);

        for (room, neighbours) in graph.iter_mut().zip(scanned) {
            room.influence_range = neighbours.len();
            room.neighbours = neighbours;
        }
    }
}

/// Neighbours of `(row, col)` in all four directions.
/// Wall cells are scanned too; their lists are simply never used.
fn scan_cell(mask: &[bool], w: usize, h: usize, row: usize, col: usize) -> Neighbours {
    let mut neighbours = Neighbours::default();
    for direction in Direction::ALL {
        neighbours.set(direction, scan_direction(mask, w, h, row, col, direction));
    }
    neighbours
}

/// Room cells from `(row, col)` outward, stopping before the first wall or at the edge.
#[inline]
fn scan_direction(
    mask: &[bool],
    w: usize,
    h: usize,
    row: usize,
    col: usize,
    direction: Direction,
) -> Vec<Coordinate> {
    let mut cells = Vec::new();
    let (mut r, mut c) = (row, col);
    while let Some((nr, nc)) = direction.step(r, c, h, w) {
        if !mask[nr * w + nc] {
            break;
        }
        cells.push(Coordinate::new(nc, nr));
        (r, c) = (nr, nc);
    }
    cells
}
