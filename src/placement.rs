//! Greedy bulb placement.
//!
//! Rooms are visited once in descending influence order; every room that is
//! still dark gets a bulb, which lights itself and everything it can see.
//! This is a heuristic and does not guarantee the minimum bulb count.

use std::cmp::Reverse;

use crate::grid::Coordinate;
use crate::room::RoomGraph;

/// Positions ordered by influence range, highest first.
///
/// The sort is stable over row-major order, so equal ranges keep their
/// (row, col) ascending order.
pub fn rank_by_influence(graph: &RoomGraph) -> Vec<Coordinate> {
    let mut ranked: Vec<(usize, Coordinate)> = graph
        .iter()
        .map(|room| (room.influence_range, room.position))
        .collect();
    ranked.sort_by_key(|&(range, _)| Reverse(range));
    ranked.into_iter().map(|(_, position)| position).collect()
}

/// Place bulbs in `graph` and return their positions in placement order.
///
/// Requires influence data to be populated.
pub fn place_light_bulbs(graph: &mut RoomGraph) -> Vec<Coordinate> {
    let mut bulbs = Vec::new();

    for position in rank_by_influence(graph) {
        let room = graph.get(position);
        if !room.is_room || room.has_light_bulb() || room.is_lighted() {
            continue;
        }

        let visible: Vec<Coordinate> = room.neighbours.iter().copied().collect();
        graph.get_mut(position).place_bulb();
        for neighbour in visible {
            graph.get_mut(neighbour).light();
        }

        log::trace!(
            "Bulb at ({}, {}) sees {} cells",
            position.x,
            position.y,
            graph.get(position).influence_range
        );
        bulbs.push(position);
    }

    bulbs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::influence::{AxisScan, InfluenceAlgorithm};
    use crate::matrix::Matrix;

    fn prepared(rows: Vec<Vec<u8>>) -> RoomGraph {
        let matrix = Matrix::new(rows).unwrap();
        let mut graph = RoomGraph::build(&matrix);
        AxisScan::new().calculate(&mut graph);
        graph
    }

    #[test]
    fn test_rank_ties_keep_row_major_order() {
        let graph = prepared(vec![vec![1, 1, 1]]);
        assert_eq!(
            rank_by_influence(&graph),
            vec![Coordinate::new(0, 0), Coordinate::new(1, 0), Coordinate::new(2, 0)]
        );
    }

    #[test]
    fn test_rank_descending() {
        // Centre of a plus shape sees four cells, arms see two each
        let graph = prepared(vec![vec![0, 1, 0], vec![1, 1, 1], vec![0, 1, 0]]);
        let ranked = rank_by_influence(&graph);
        assert_eq!(ranked[0], Coordinate::new(1, 1));
    }

    #[test]
    fn test_plus_shape_single_bulb() {
        let mut graph = prepared(vec![vec![0, 1, 0], vec![1, 1, 1], vec![0, 1, 0]]);
        let bulbs = place_light_bulbs(&mut graph);
        assert_eq!(bulbs, vec![Coordinate::new(1, 1)]);
        assert!(graph.iter().filter(|r| r.is_room).all(|r| r.is_lighted()));
    }

    #[test]
    fn test_lit_cells_are_skipped() {
        // 1 1
        // 1 0
        // (0,0) sees two cells, the others one each; one bulb covers all
        let mut graph = prepared(vec![vec![1, 1], vec![1, 0]]);
        let bulbs = place_light_bulbs(&mut graph);
        assert_eq!(bulbs, vec![Coordinate::new(0, 0)]);
        assert!(!graph.get(Coordinate::new(1, 1)).is_lighted());
    }

    #[test]
    fn test_greedy_order() {
        // 1 1 1
        // 0 1 0
        // Centre top (1,0) sees 3, so it goes first and covers everything.
        let mut graph = prepared(vec![vec![1, 1, 1], vec![0, 1, 0]]);
        assert_eq!(place_light_bulbs(&mut graph), vec![Coordinate::new(1, 0)]);

        // 1 1 1
        // 1 0 1
        // (0,0) wins the tie with (2,0) and lights the top row, leaving
        // (2,1) dark for a second bulb.
        let mut graph = prepared(vec![vec![1, 1, 1], vec![1, 0, 1]]);
        let bulbs = place_light_bulbs(&mut graph);
        assert_eq!(bulbs, vec![Coordinate::new(0, 0), Coordinate::new(2, 1)]);
    }

    #[test]
    fn test_prelit_room_is_skipped() {
        // 1 1 0 1
        // (0,0) would win the tie, but it is already lit, so the pass moves on
        let mut graph = prepared(vec![vec![1, 1, 0, 1]]);
        graph.get_mut(Coordinate::new(0, 0)).light();

        let bulbs = place_light_bulbs(&mut graph);
        assert_eq!(bulbs, vec![Coordinate::new(1, 0), Coordinate::new(3, 0)]);

        let first = graph.get(Coordinate::new(0, 0));
        assert!(first.is_lighted());
        assert!(!first.has_light_bulb());
    }

    #[test]
    fn test_prelit_rooms_stay_lit() {
        // 1 1 1
        // 1 0 1
        // 1 1 1
        // Corners see four cells each. With (2,2) and (1,0) lit up front, only
        // (0,0) of the corners gets a bulb and the right and bottom middles
        // are left for later bulbs.
        let mut graph = prepared(vec![vec![1, 1, 1], vec![1, 0, 1], vec![1, 1, 1]]);
        let prelit = [Coordinate::new(2, 2), Coordinate::new(1, 0)];
        for position in prelit {
            graph.get_mut(position).light();
        }

        let bulbs = place_light_bulbs(&mut graph);
        assert_eq!(
            bulbs,
            vec![Coordinate::new(0, 0), Coordinate::new(2, 1), Coordinate::new(1, 2)]
        );
        for position in prelit {
            let room = graph.get(position);
            assert!(room.is_lighted());
            assert!(!room.has_light_bulb());
        }
        assert!(graph.iter().filter(|r| r.is_room).all(|r| r.is_lighted()));
    }
}
