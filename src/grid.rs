//! Grid primitives: coordinates, the four cardinal directions and row-major traversal.

/// Position of a cell in a grid. `x` is the column, `y` is the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub fn new(x: usize, y: usize) -> Self {
        Coordinate { x, y }
    }
}

/// Axis-aligned scan direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in the order neighbour lists are stored.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Slot of this direction in a `[T; 4]` keyed by direction.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }

    /// Step one cell from `(row, col)` in this direction.
    /// Returns `None` when the step would leave a `height` x `width` grid.
    #[inline]
    pub fn step(self, row: usize, col: usize, height: usize, width: usize) -> Option<(usize, usize)> {
        match self {
            Direction::Left => col.checked_sub(1).map(|c| (row, c)),
            Direction::Right => (col + 1 < width).then_some((row, col + 1)),
            Direction::Up => row.checked_sub(1).map(|r| (r, col)),
            Direction::Down => (row + 1 < height).then_some((row + 1, col)),
        }
    }
}

/// Returns `(height, width)` of a rectangular 2D array, or `None` when it is
/// empty or ragged.
pub fn dimensions<T>(matrix: &[Vec<T>]) -> Option<(usize, usize)> {
    let width = matrix.first()?.len();
    if width == 0 || matrix.iter().any(|row| row.len() != width) {
        return None;
    }
    Some((matrix.len(), width))
}

/// Calls `visit(row, col)` once per cell of `matrix` in row-major order.
///
/// # Panics
/// Panics if `matrix` is empty or ragged. Callers validate shape beforehand.
pub fn traverse<T>(matrix: &[Vec<T>], mut visit: impl FnMut(usize, usize)) {
    let Some((height, width)) = dimensions(matrix) else {
        panic!("malformed input: traverse requires a non-empty rectangular matrix");
    };
    for row in 0..height {
        for col in 0..width {
            visit(row, col);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traverse_row_major() {
        let matrix = vec![vec![0u8; 3]; 2];
        let mut visited = Vec::new();
        traverse(&matrix, |r, c| visited.push((r, c)));
        assert_eq!(visited, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    #[should_panic]
    fn test_traverse_rejects_ragged() {
        let matrix = vec![vec![1u8, 1], vec![1u8]];
        traverse(&matrix, |_, _| {});
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(dimensions(&vec![vec![1u8; 4]; 3]), Some((3, 4)));
        assert_eq!(dimensions::<u8>(&[]), None);
        assert_eq!(dimensions(&[Vec::<u8>::new()]), None);
    }

    #[test]
    fn test_direction_step_edges() {
        assert_eq!(Direction::Left.step(0, 0, 2, 2), None);
        assert_eq!(Direction::Up.step(0, 1, 2, 2), None);
        assert_eq!(Direction::Right.step(1, 1, 2, 2), None);
        assert_eq!(Direction::Down.step(1, 0, 2, 2), None);
        assert_eq!(Direction::Right.step(0, 0, 2, 2), Some((0, 1)));
        assert_eq!(Direction::Down.step(0, 0, 2, 2), Some((1, 0)));
    }
}
