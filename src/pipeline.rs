//! End-to-end solve: build the room graph, compute influence, place bulbs, project.

use crate::grid::Coordinate;
use crate::influence::{AxisScan, InfluenceAlgorithm, influence_to_string};
use crate::light_map::LightMap;
use crate::matrix::Matrix;
use crate::placement::place_light_bulbs;
use crate::room::RoomGraph;

/// Result of one solve.
#[derive(Debug, Clone)]
pub struct Solution {
    pub graph: RoomGraph,
    pub light_map: LightMap,
    /// Bulb positions in the order they were placed
    pub bulbs: Vec<Coordinate>,
}

/// Solve with the default sequential axis scan.
pub fn solve(matrix: &Matrix) -> Solution {
    solve_with(matrix, &AxisScan::new())
}

/// Solve with a caller-chosen influence algorithm.
pub fn solve_with(matrix: &Matrix, algorithm: &impl InfluenceAlgorithm) -> Solution {
    let mut graph = RoomGraph::build(matrix);
    algorithm.calculate(&mut graph);
    if log::log_enabled!(log::Level::Trace) {
        log::trace!("Influence ranges:\n{}", influence_to_string(&graph));
    }
    let bulbs = place_light_bulbs(&mut graph);
    let light_map = LightMap::from_graph(&graph);

    log::debug!(
        "Solved {}x{} floor plan: {} bulbs, {} lit cells",
        matrix.width(),
        matrix.height(),
        bulbs.len(),
        light_map.lit_count()
    );

    Solution {
        graph,
        light_map,
        bulbs,
    }
}
