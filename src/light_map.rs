//! Flat tri-state projection of a solved room graph, handed to renderers.

use crate::room::{Room, RoomGraph};

/// State of one cell in a light map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightCell {
    /// Dark room, or not a room at all
    Unlit = 0,
    Lit = 1,
    /// Lit and holding a bulb
    Bulb = 2,
}

impl LightCell {
    pub fn value(self) -> u8 {
        self as u8
    }

    fn from_room(room: &Room) -> Self {
        if room.has_light_bulb() {
            LightCell::Bulb
        } else if room.is_lighted() {
            LightCell::Lit
        } else {
            LightCell::Unlit
        }
    }
}

/// Row-major grid of `LightCell`s with the shape of the source floor plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightMap {
    cells: Vec<Vec<LightCell>>,
}

impl LightMap {
    /// Project a graph. The graph is not modified.
    pub fn from_graph(graph: &RoomGraph) -> Self {
        let cells = graph
            .rows()
            .iter()
            .map(|row| row.iter().map(LightCell::from_room).collect())
            .collect();
        LightMap { cells }
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn get(&self, row: usize, col: usize) -> LightCell {
        self.cells[row][col]
    }

    pub fn rows(&self) -> &[Vec<LightCell>] {
        &self.cells
    }

    /// Numeric form: 0 unlit, 1 lit, 2 bulb.
    pub fn to_values(&self) -> Vec<Vec<u8>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.value()).collect())
            .collect()
    }

    pub fn bulb_count(&self) -> usize {
        self.count(|cell| cell == LightCell::Bulb)
    }

    /// Lit cells, bulb cells included.
    pub fn lit_count(&self) -> usize {
        self.count(|cell| cell != LightCell::Unlit)
    }

    fn count(&self, pred: impl Fn(LightCell) -> bool) -> usize {
        self.cells.iter().flatten().filter(|&&cell| pred(cell)).count()
    }
}

/// Converts a light map to a formatted string for debugging
pub fn light_map_to_string(light_map: &LightMap) -> String {
    let mut result = String::new();
    for row in light_map.rows() {
        let line: Vec<String> = row.iter().map(|cell| cell.value().to_string()).collect();
        result.push_str(&line.join(" "));
        result.push('\n');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Coordinate;
    use crate::matrix::Matrix;

    #[test]
    fn test_projection_values() {
        let matrix = Matrix::new(vec![vec![1, 1, 0, 1]]).unwrap();
        let mut graph = RoomGraph::build(&matrix);
        graph.get_mut(Coordinate::new(0, 0)).place_bulb();
        graph.get_mut(Coordinate::new(1, 0)).light();

        let light_map = LightMap::from_graph(&graph);
        assert_eq!(light_map.to_values(), vec![vec![2, 1, 0, 0]]);
        assert_eq!(light_map.bulb_count(), 1);
        assert_eq!(light_map.lit_count(), 2);
        assert_eq!((light_map.height(), light_map.width()), (1, 4));
    }

    #[test]
    fn test_to_string() {
        let matrix = Matrix::new(vec![vec![1, 0], vec![0, 1]]).unwrap();
        let mut graph = RoomGraph::build(&matrix);
        graph.get_mut(Coordinate::new(1, 1)).place_bulb();
        assert_eq!(light_map_to_string(&LightMap::from_graph(&graph)), "0 0\n0 2\n");
    }
}
