//! End-to-end tests for the light picker

use crate::{
    AxisScan, Coordinate, Direction, InfluenceAlgorithm, LightCell, Matrix, RoomGraph,
    light_map_to_string, place_light_bulbs, solve, solve_with,
};

fn matrix(rows: Vec<Vec<u8>>) -> Matrix {
    Matrix::new(rows).unwrap()
}

/// Floor plan with a deterministic scatter of walls
fn scattered(width: usize, height: usize, seed: usize) -> Matrix {
    let rows = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| ((x * 31 + y * 17 + seed * 7) % 5 != 0) as u8)
                .collect()
        })
        .collect();
    matrix(rows)
}

/// Room cells reachable from `bulb` in a straight line without crossing a wall
fn visible_from(m: &Matrix, bulb: Coordinate) -> Vec<Coordinate> {
    let mut cells = vec![bulb];
    for direction in Direction::ALL {
        let (mut r, mut c) = (bulb.y, bulb.x);
        while let Some((nr, nc)) = direction.step(r, c, m.height(), m.width()) {
            if !m.is_room(nr, nc) {
                break;
            }
            cells.push(Coordinate::new(nc, nr));
            (r, c) = (nr, nc);
        }
    }
    cells
}

#[test]
fn test_single_room() {
    let solution = solve(&matrix(vec![vec![1]]));
    assert_eq!(solution.graph.get(Coordinate::new(0, 0)).influence_range, 0);
    assert_eq!(solution.light_map.to_values(), vec![vec![2]]);
}

#[test]
fn test_single_row() {
    let solution = solve(&matrix(vec![vec![1, 1, 1]]));
    let first = solution.graph.get(Coordinate::new(0, 0));
    assert_eq!(
        first.neighbours.get(Direction::Right),
        &[Coordinate::new(1, 0), Coordinate::new(2, 0)]
    );
    for x in 0..3 {
        assert_eq!(solution.graph.get(Coordinate::new(x, 0)).influence_range, 2);
    }
    assert_eq!(solution.bulbs, vec![Coordinate::new(0, 0)]);
    assert_eq!(solution.light_map.to_values(), vec![vec![2, 1, 1]]);
}

#[test]
fn test_rooms_split_by_wall() {
    let solution = solve(&matrix(vec![vec![1, 0, 1]]));
    assert_eq!(solution.graph.get(Coordinate::new(0, 0)).influence_range, 0);
    assert_eq!(solution.graph.get(Coordinate::new(2, 0)).influence_range, 0);
    assert_eq!(solution.light_map.to_values(), vec![vec![2, 0, 2]]);
}

#[test]
fn test_no_rooms() {
    let solution = solve(&matrix(vec![vec![0]]));
    assert!(solution.bulbs.is_empty());
    assert_eq!(solution.light_map.to_values(), vec![vec![0]]);
}

#[test]
fn test_every_room_lit() {
    for seed in 0..8 {
        let m = scattered(13, 9, seed);
        let solution = solve(&m);
        for room in solution.graph.iter().filter(|room| room.is_room) {
            assert!(room.is_lighted(), "room at {:?} left dark (seed {})", room.position, seed);
        }
    }
}

#[test]
fn test_bulb_invariants() {
    for seed in 0..8 {
        let solution = solve(&scattered(11, 11, seed));
        for room in solution.graph.iter() {
            if room.has_light_bulb() {
                assert!(room.is_room, "bulb placed on a wall at {:?}", room.position);
                assert!(room.is_lighted());
            }
            if !room.is_room {
                assert!(!room.is_lighted());
            }
        }
        assert_eq!(solution.light_map.bulb_count(), solution.bulbs.len());
    }
}

#[test]
fn test_coverage_matches_line_of_sight() {
    let m = scattered(10, 7, 3);
    let solution = solve(&m);

    let mut expected = vec![vec![false; m.width()]; m.height()];
    for &bulb in &solution.bulbs {
        for cell in visible_from(&m, bulb) {
            expected[cell.y][cell.x] = true;
        }
    }

    for room in solution.graph.iter() {
        assert_eq!(room.is_lighted(), expected[room.position.y][room.position.x]);
    }
}

#[test]
fn test_neighbours_never_reference_walls() {
    let m = scattered(12, 8, 5);
    let solution = solve(&m);
    for room in solution.graph.iter() {
        for cell in room.neighbours.iter() {
            assert!(m.is_room(cell.y, cell.x));
        }
        assert_eq!(room.influence_range, room.neighbours.len());
    }
}

#[test]
fn test_influence_unchanged_by_placement() {
    let m = scattered(9, 9, 1);
    let mut graph = RoomGraph::build(&m);
    AxisScan::new().calculate(&mut graph);
    let before: Vec<usize> = graph.iter().map(|room| room.influence_range).collect();

    place_light_bulbs(&mut graph);
    let after: Vec<usize> = graph.iter().map(|room| room.influence_range).collect();
    assert_eq!(before, after);
}

#[test]
fn test_deterministic_output() {
    let m = scattered(20, 15, 2);
    let a = solve(&m);
    let b = solve(&m);
    let c = solve_with(&m, &AxisScan::parallel());

    assert_eq!(light_map_to_string(&a.light_map), light_map_to_string(&b.light_map));
    assert_eq!(a.bulbs, b.bulbs);
    assert_eq!(a.light_map, c.light_map);
    assert_eq!(a.bulbs, c.bulbs);
}

#[test]
fn test_l_shaped_corridor() {
    // 1 1 1 1
    // 1 0 0 0
    // 1 0 0 0
    let solution = solve(&matrix(vec![
        vec![1, 1, 1, 1],
        vec![1, 0, 0, 0],
        vec![1, 0, 0, 0],
    ]));
    assert_eq!(solution.bulbs, vec![Coordinate::new(0, 0)]);
    assert_eq!(solution.light_map.get(0, 0), LightCell::Bulb);
    assert_eq!(solution.light_map.lit_count(), 6);
    println!("L corridor:\n{}", light_map_to_string(&solution.light_map));
}
