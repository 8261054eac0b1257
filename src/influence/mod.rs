//! Influence calculation (room topology only)
//!
//! For every cell, find the room cells it can see along the four cardinal
//! directions. The result depends only on which cells are rooms, never on
//! lighting state, so it is computed once before placement.

pub mod axis_scan;

pub use axis_scan::AxisScan;

use crate::room::RoomGraph;

/// Trait for influence algorithms.
///
/// Implementations fill `neighbours` and `influence_range` of every room in
/// the graph. Running one twice on the same graph must give the same result.
pub trait InfluenceAlgorithm {
    /// Populate neighbour lists and influence ranges in place.
    fn calculate(&self, graph: &mut RoomGraph);
}

/// Converts the influence ranges of a graph to a formatted string for debugging
pub fn influence_to_string(graph: &RoomGraph) -> String {
    let mut result = String::new();
    for row in graph.rows() {
        for room in row {
            if room.is_room {
                result.push_str(&format!("{:3} ", room.influence_range));
            } else {
                result.push_str("  # ");
            }
        }
        result.push('\n');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix;

    #[test]
    fn test_influence_to_string() {
        let matrix = Matrix::new(vec![vec![1, 1, 0], vec![1, 0, 1]]).unwrap();
        let mut graph = RoomGraph::build(&matrix);
        AxisScan::new().calculate(&mut graph);

        assert_eq!(influence_to_string(&graph), "  2   1   # \n  1   #   0 \n");
    }
}
