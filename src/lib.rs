//! Greedy light-bulb placement for grid floor plans.
//!
//! A floor plan is a 0/1 matrix of walls and rooms. Each room sees the rooms in
//! a straight, unobstructed line along the four axes; bulbs are placed greedily
//! in descending order of that visibility until every room is lit.

pub mod config;
pub mod error;
pub mod grid;
pub mod influence;
pub mod interactive;
pub mod light_map;
pub mod matrix;
pub mod pipeline;
pub mod placement;
pub mod render;
pub mod room;
pub mod shell;

#[cfg(test)]
mod tests;

// Re-export public API
pub use config::{OutputFormat, PickerConfig};
pub use error::{MatrixError, PickerError};
pub use grid::{Coordinate, Direction, traverse};
pub use influence::{AxisScan, InfluenceAlgorithm, influence_to_string};
pub use interactive::{InteractiveViewer, ViewerConfig};
pub use light_map::{LightCell, LightMap, light_map_to_string};
pub use matrix::{Matrix, parse_rooms_csv, read_rooms_csv};
pub use pipeline::{Solution, solve, solve_with};
pub use placement::{place_light_bulbs, rank_by_influence};
pub use render::{render_html, save_html, save_ppm};
pub use room::{Neighbours, Room, RoomGraph};
pub use shell::{Report, process_path, process_request, run_shell};
