use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use light_picker::{
    AxisScan, InfluenceAlgorithm, InteractiveViewer, Matrix, OutputFormat, PickerConfig,
    RoomGraph, ViewerConfig, light_map_to_string, process_path, read_rooms_csv, run_shell,
    solve, solve_with,
};

/// Place light bulbs so every room of a floor plan is lit
#[derive(Parser, Debug)]
#[command(name = "light-picker", version, about)]
struct Cli {
    /// Floor-plan CSV to solve once; without it an interactive prompt starts
    file: Option<PathBuf>,

    /// Folder the prompt looks up file names in
    #[arg(long, default_value = "inputs")]
    inputs: PathBuf,

    /// Folder results are written to
    #[arg(long, default_value = "outputs")]
    outputs: PathBuf,

    /// Output artifact format
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Pixels per cell for PPM output and the viewer
    #[arg(long, default_value_t = 16)]
    scale: usize,

    /// Also print the light map to stdout
    #[arg(long)]
    print: bool,

    /// Open the minifb viewer
    #[arg(long, conflicts_with = "benchmark")]
    interactive: bool,

    /// Time the influence pass and the full solve
    #[arg(long)]
    benchmark: bool,
}

impl Cli {
    fn config(&self) -> PickerConfig {
        PickerConfig {
            inputs_dir: self.inputs.clone(),
            outputs_dir: self.outputs.clone(),
            format: self.format,
            ppm_scale: self.scale,
        }
    }

    /// FILE as given when it exists, otherwise looked up in the inputs folder
    fn input_path(&self) -> Option<PathBuf> {
        self.file.as_ref().map(|file| {
            if file.exists() {
                file.clone()
            } else {
                self.inputs.join(file)
            }
        })
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    if cli.benchmark {
        run_benchmark();
        ExitCode::SUCCESS
    } else if cli.interactive {
        run_interactive(&cli)
    } else if let Some(path) = cli.input_path() {
        run_once(&cli, path)
    } else {
        run_prompt(&cli)
    }
}

fn run_once(cli: &Cli, path: PathBuf) -> ExitCode {
    println!("Processing {} file.", path.display());
    match process_path(&cli.config(), &path) {
        Ok(report) => {
            if cli.print {
                print!("{}", light_map_to_string(&report.light_map));
            }
            println!("{} bulbs light {} of {} rooms", report.bulbs, report.lit, report.rooms);
            println!("Output saved at: {}", report.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_prompt(cli: &Cli) -> ExitCode {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match run_shell(&cli.config(), stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Prompt stopped: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_interactive(cli: &Cli) -> ExitCode {
    let matrix = match cli.input_path().map(|path| read_rooms_csv(path)).transpose() {
        Ok(matrix) => matrix,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let config = ViewerConfig {
        scale: cli.scale.max(8),
        ..ViewerConfig::default()
    };

    match InteractiveViewer::new(config, matrix) {
        Ok(mut viewer) => {
            if let Err(e) = viewer.run() {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to create viewer: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Floor plan with a regular pattern of walls so scans stop at varied lengths
fn benchmark_plan(width: usize, height: usize) -> Matrix {
    let rows = (0..height)
        .map(|y| (0..width).map(|x| ((x * 7 + y * 13) % 11 != 0) as u8).collect())
        .collect();
    Matrix::new(rows).unwrap_or_else(|_| Matrix::filled(height, width))
}

fn run_benchmark() {
    use std::time::Instant;

    println!("=== Axis Scan Benchmark ===\n");

    let sizes = [(50, 50), (100, 100), (200, 200)];
    let iterations = 20;

    for (width, height) in sizes {
        println!("Grid size: {}x{}", width, height);
        println!("-----------------------");

        let matrix = benchmark_plan(width, height);
        let graph = RoomGraph::build(&matrix);

        // Influence pass only, on a fresh copy each time
        let sequential = AxisScan::new();
        let start = Instant::now();
        for _ in 0..iterations {
            let mut g = graph.clone();
            sequential.calculate(&mut g);
        }
        let avg_sequential_ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;

        let parallel = AxisScan::parallel();
        let start = Instant::now();
        for _ in 0..iterations {
            let mut g = graph.clone();
            parallel.calculate(&mut g);
        }
        let avg_parallel_ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;

        // Whole pipeline
        let start = Instant::now();
        let mut bulbs = 0;
        for _ in 0..iterations {
            bulbs = solve(&matrix).bulbs.len();
        }
        let avg_solve_ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;

        let start = Instant::now();
        for _ in 0..iterations {
            let _ = solve_with(&matrix, &parallel);
        }
        let avg_solve_parallel_ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;

        println!("  Sequential scan: {:.3} ms/iter", avg_sequential_ms);
        println!("  Parallel scan:   {:.3} ms/iter", avg_parallel_ms);
        println!("  Speedup: {:.2}x", avg_sequential_ms / avg_parallel_ms);
        println!("  Full solve (sequential): {:.3} ms/iter", avg_solve_ms);
        println!("  Full solve (parallel):   {:.3} ms/iter", avg_solve_parallel_ms);
        println!("  Bulbs placed: {}", bulbs);
        println!();
    }
}
