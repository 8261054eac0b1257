//! Floor-plan input: the validated 0/1 matrix and its CSV source.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::MatrixError;

/// Rectangular floor plan where `1` marks a room cell and `0` a wall or void.
///
/// Construction validates shape and cell domain, so every `Matrix` is safe to
/// hand to the solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: Vec<Vec<u8>>,
}

impl Matrix {
    pub fn new(rows: Vec<Vec<u8>>) -> Result<Self, MatrixError> {
        let expected = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(MatrixError::Empty),
        };

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(MatrixError::RaggedRow {
                    row,
                    expected,
                    found: cells.len(),
                });
            }
            if let Some(column) = cells.iter().position(|&v| v > 1) {
                return Err(MatrixError::InvalidCell {
                    row,
                    column,
                    value: cells[column].to_string(),
                });
            }
        }

        Ok(Matrix { rows })
    }

    /// All-room matrix of the given size. Zero dimensions are clamped to one.
    pub fn filled(height: usize, width: usize) -> Self {
        Matrix {
            rows: vec![vec![1; width.max(1)]; height.max(1)],
        }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    #[inline]
    pub fn is_room(&self, row: usize, col: usize) -> bool {
        self.rows[row][col] != 0
    }

    /// Flip a cell between room and wall. Out-of-range positions are ignored.
    pub fn toggle(&mut self, row: usize, col: usize) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = 1 - *cell;
        }
    }
}

/// Parse a comma-delimited floor plan. The first line is a header and is skipped.
pub fn parse_rooms_csv<R: Read>(reader: R) -> Result<Matrix, MatrixError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (row, record) in csv_reader.records().enumerate() {
        let record = record?;
        let cells = record
            .iter()
            .enumerate()
            .map(|(column, field)| parse_cell(row, column, field))
            .collect::<Result<Vec<u8>, _>>()?;
        rows.push(cells);
    }

    Matrix::new(rows)
}

/// Read a floor plan from a CSV file on disk.
pub fn read_rooms_csv(path: impl AsRef<Path>) -> Result<Matrix, MatrixError> {
    let path = path.as_ref();
    log::debug!("Reading floor plan from {}", path.display());
    let file = File::open(path)?;
    parse_rooms_csv(file)
}

fn parse_cell(row: usize, column: usize, field: &str) -> Result<u8, MatrixError> {
    let trimmed = field.trim();
    match trimmed.parse::<i64>() {
        Ok(0) => Ok(0),
        Ok(1) => Ok(1),
        _ => Err(MatrixError::InvalidCell {
            row,
            column,
            value: trimmed.to_string(),
        }),
    }
}
