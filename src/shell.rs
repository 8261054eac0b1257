//! Line-oriented prompt: each line names a floor plan in the inputs folder,
//! which is solved and written to the outputs folder.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::{OutputFormat, PickerConfig};
use crate::error::PickerError;
use crate::light_map::LightMap;
use crate::matrix::read_rooms_csv;
use crate::pipeline::solve;
use crate::render::{save_html, save_ppm_in};

pub const PROMPT: &str = "light-picker > ";
const EXIT_COMMAND: &str = ".exit";

/// Summary of one processed floor plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub output: PathBuf,
    pub bulbs: usize,
    pub lit: usize,
    pub rooms: usize,
    pub light_map: LightMap,
}

/// Solve the floor plan `name` from `config.inputs_dir` and write the result.
pub fn process_request(config: &PickerConfig, name: &str) -> Result<Report, PickerError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PickerError::EmptyName);
    }
    process_path(config, &config.resolve_input(name))
}

/// Solve the floor plan at `path` and write the result to `config.outputs_dir`.
pub fn process_path(config: &PickerConfig, path: &Path) -> Result<Report, PickerError> {
    if !path.is_file() {
        return Err(PickerError::MissingInput(path.to_path_buf()));
    }

    let matrix = read_rooms_csv(path)?;
    let solution = solve(&matrix);
    let rooms = solution.graph.iter().filter(|room| room.is_room).count();

    let output = match config.format {
        OutputFormat::Html => save_html(&solution.light_map, &config.outputs_dir)?,
        OutputFormat::Ppm => save_ppm_in(&solution.light_map, &config.outputs_dir, config.ppm_scale)?,
    };

    Ok(Report {
        output,
        bulbs: solution.bulbs.len(),
        lit: solution.light_map.lit_count(),
        rooms,
        light_map: solution.light_map,
    })
}

/// Run the prompt until `.exit` or end of input. Request errors are reported
/// and the loop continues.
pub fn run_shell<R: BufRead, W: Write>(config: &PickerConfig, input: R, mut output: W) -> io::Result<()> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let name = line.trim();

        if name == EXIT_COMMAND {
            break;
        }

        if !name.is_empty() {
            writeln!(output, "Processing {} file.", name)?;
        }
        match process_request(config, name) {
            Ok(report) => {
                writeln!(output, "Output saved at: {}", report.output.display())?;
                writeln!(
                    output,
                    "{} bulbs light {} of {} rooms",
                    report.bulbs, report.lit, report.rooms
                )?;
            }
            Err(e) => {
                log::warn!("Request {:?} failed: {}", name, e);
                writeln!(output, "{}", e)?;
                writeln!(
                    output,
                    "Try with a different name, make sure the file is inside \"{}\" folder.",
                    config.inputs_dir.display()
                )?;
            }
        }

        write!(output, "{}", PROMPT)?;
        output.flush()?;
    }

    writeln!(output)?;
    writeln!(output, "Quitting light-picker app...")?;
    Ok(())
}
