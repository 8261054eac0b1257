//! Per-invocation configuration for the command-line front end.

use std::path::PathBuf;

use clap::ValueEnum;

/// Artifact written for each solved floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// HTML table document
    Html,
    /// ASCII PPM image
    Ppm,
}

/// Where floor plans are read from and results written to.
#[derive(Debug, Clone)]
pub struct PickerConfig {
    pub inputs_dir: PathBuf,
    pub outputs_dir: PathBuf,
    pub format: OutputFormat,
    /// Pixels per cell for PPM output
    pub ppm_scale: usize,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            inputs_dir: PathBuf::from("inputs"),
            outputs_dir: PathBuf::from("outputs"),
            format: OutputFormat::Html,
            ppm_scale: 16,
        }
    }
}

impl PickerConfig {
    /// Path of an input file name inside `inputs_dir`.
    pub fn resolve_input(&self, name: &str) -> PathBuf {
        self.inputs_dir.join(name)
    }
}
