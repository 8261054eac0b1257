//! Interactive visualization module for editing floor plans and watching bulb placement

mod viewer;

pub use viewer::{InteractiveViewer, ViewerConfig};
