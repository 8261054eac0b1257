//! Room graph: one `Room` record per floor-plan cell.

use crate::grid::{Coordinate, Direction, traverse};
use crate::matrix::Matrix;

/// Room cells visible from a cell along each direction, nearest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Neighbours([Vec<Coordinate>; 4]);

impl Neighbours {
    pub fn get(&self, direction: Direction) -> &[Coordinate] {
        &self.0[direction.index()]
    }

    pub fn set(&mut self, direction: Direction, cells: Vec<Coordinate>) {
        self.0[direction.index()] = cells;
    }

    /// Total number of visible cells over all four directions.
    pub fn len(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every visible coordinate, direction by direction.
    pub fn iter(&self) -> impl Iterator<Item = &Coordinate> {
        self.0.iter().flatten()
    }
}

/// A single floor-plan cell and its lighting state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub is_room: bool,
    pub influence_range: usize,
    pub neighbours: Neighbours,
    pub position: Coordinate,
    is_lighted: bool,
    has_light_bulb: bool,
}

impl Room {
    pub fn new(is_room: bool, position: Coordinate) -> Self {
        Room {
            is_room,
            influence_range: 0,
            neighbours: Neighbours::default(),
            position,
            is_lighted: false,
            has_light_bulb: false,
        }
    }

    pub fn is_lighted(&self) -> bool {
        self.is_lighted
    }

    pub fn has_light_bulb(&self) -> bool {
        self.has_light_bulb
    }

    /// Mark this cell lit. Lighting never reverts.
    #[inline]
    pub fn light(&mut self) {
        self.is_lighted = true;
    }

    /// Put a bulb here. A bulb always lights its own cell.
    pub fn place_bulb(&mut self) {
        self.has_light_bulb = true;
        self.is_lighted = true;
    }
}

/// Row-major grid of rooms with the same shape as the source matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomGraph {
    rooms: Vec<Vec<Room>>,
}

impl RoomGraph {
    /// Build a fresh graph from a floor plan, every room unlit and without neighbours.
    pub fn build(matrix: &Matrix) -> Self {
        let mut rooms: Vec<Vec<Room>> = Vec::with_capacity(matrix.height());

        traverse(matrix.rows(), |row, col| {
            let room = Room::new(matrix.is_room(row, col), Coordinate::new(col, row));
            // Rows arrive in order, so a new row index is always rooms.len().
            if rooms.len() == row {
                rooms.push(Vec::with_capacity(matrix.width()));
            }
            rooms[row].push(room);
        });

        RoomGraph { rooms }
    }

    pub fn height(&self) -> usize {
        self.rooms.len()
    }

    pub fn width(&self) -> usize {
        self.rooms[0].len()
    }

    pub fn rows(&self) -> &[Vec<Room>] {
        &self.rooms
    }

    pub fn get(&self, position: Coordinate) -> &Room {
        &self.rooms[position.y][position.x]
    }

    pub fn get_mut(&mut self, position: Coordinate) -> &mut Room {
        &mut self.rooms[position.y][position.x]
    }

    /// Rooms in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().flatten()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Room> {
        self.rooms.iter_mut().flatten()
    }

    /// Flat row-major mask of which cells are rooms.
    pub fn room_mask(&self) -> Vec<bool> {
        self.iter().map(|room| room.is_room).collect()
    }
}
