//! Interactive floor-plan viewer - click cells to toggle walls and watch the bulbs move

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use crate::light_map::{LightCell, LightMap};
use crate::matrix::Matrix;
use crate::influence::AxisScan;
use crate::pipeline::{Solution, solve_with};
use crate::render::cell_rgb;

/// Configuration for the interactive viewer
#[derive(Clone)]
pub struct ViewerConfig {
    /// Grid size (width x height in cells), used when no floor plan is given
    pub grid_size: (usize, usize),
    /// Pixel scale factor (each cell = scale x scale pixels)
    pub scale: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            grid_size: (24, 16),
            scale: 32,
        }
    }
}

/// Interactive viewer for experimenting with floor plans
pub struct InteractiveViewer {
    config: ViewerConfig,
    matrix: Matrix,
    solution: Solution,
    algorithm: AxisScan,
    window: Window,
    buffer: Vec<u32>,
    last_toggled: Option<(usize, usize)>,
}

impl InteractiveViewer {
    /// Create a new viewer, seeded with `matrix` or an all-room grid of `config.grid_size`
    pub fn new(config: ViewerConfig, matrix: Option<Matrix>) -> Result<Self, String> {
        let matrix = matrix.unwrap_or_else(|| Matrix::filled(config.grid_size.1, config.grid_size.0));
        let scale = config.scale.max(1);
        let window_w = matrix.width() * scale;
        let window_h = matrix.height() * scale;

        let window = Window::new(
            "Light Picker - Interactive Viewer (ESC to exit)",
            window_w,
            window_h,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| e.to_string())?;

        let algorithm = AxisScan::parallel();
        let solution = solve_with(&matrix, &algorithm);

        Ok(Self {
            config: ViewerConfig { scale, ..config },
            matrix,
            solution,
            algorithm,
            window,
            buffer: vec![0u32; window_w * window_h],
            last_toggled: None,
        })
    }

    /// Run the interactive viewer loop
    pub fn run(&mut self) -> Result<(), String> {
        let (grid_w, grid_h) = (self.matrix.width(), self.matrix.height());
        let scale = self.config.scale;

        self.window.set_target_fps(60);

        println!("=== Interactive Light Picker ===");
        println!("Controls:");
        println!("  Left Click - Toggle room/wall");
        println!("  C          - Reset to all rooms");
        println!("  ESC        - Exit");
        println!();

        self.render_to_buffer();

        while self.window.is_open() && !self.window.is_key_down(Key::Escape) {
            if self.window.is_key_pressed(Key::C, KeyRepeat::No) {
                self.matrix = Matrix::filled(grid_h, grid_w);
                self.resolve();
                println!("Floor plan reset");
            }

            if self.window.get_mouse_down(MouseButton::Left) {
                if let Some((mx, my)) = self.window.get_mouse_pos(MouseMode::Discard) {
                    let col = (mx as usize / scale).min(grid_w - 1);
                    let row = (my as usize / scale).min(grid_h - 1);
                    // Only toggle once per cell while the button is held
                    if self.last_toggled != Some((row, col)) {
                        self.matrix.toggle(row, col);
                        self.last_toggled = Some((row, col));
                        self.resolve();
                    }
                }
            } else {
                self.last_toggled = None;
            }

            self.window
                .update_with_buffer(&self.buffer, grid_w * scale, grid_h * scale)
                .map_err(|e| e.to_string())?;
        }

        Ok(())
    }

    /// Solve the current floor plan and redraw
    fn resolve(&mut self) {
        self.solution = solve_with(&self.matrix, &self.algorithm);
        log::info!(
            "{} bulbs light {} cells",
            self.solution.bulbs.len(),
            self.solution.light_map.lit_count()
        );
        self.render_to_buffer();
    }

    /// Render the current light map to the pixel buffer
    fn render_to_buffer(&mut self) {
        let scale = self.config.scale;
        fill_buffer(&mut self.buffer, &self.solution.light_map, &self.matrix, scale);
    }
}

/// Paint a light map into a minifb buffer (0x00RRGGBB), each cell `scale` x `scale` pixels.
/// Walls are drawn darker than unlit rooms so the floor plan stays readable.
fn fill_buffer(buffer: &mut [u32], light_map: &LightMap, matrix: &Matrix, scale: usize) {
    let stride = light_map.width() * scale;

    for (gy, row) in light_map.rows().iter().enumerate() {
        for (gx, &cell) in row.iter().enumerate() {
            let (r, g, b) = if cell == LightCell::Unlit && !matrix.is_room(gy, gx) {
                (24, 24, 24)
            } else {
                cell_rgb(cell)
            };
            let color_u32 = ((r as u32) << 16) | ((g as u32) << 8) | b as u32;

            for sy in 0..scale {
                for sx in 0..scale {
                    // One-pixel grid line on the top and left edge of every cell
                    let pixel = if sx == 0 || sy == 0 {
                        color_u32 & 0x00DF_DFDF
                    } else {
                        color_u32
                    };
                    let idx = (gy * scale + sy) * stride + gx * scale + sx;
                    buffer[idx] = pixel;
                }
            }
        }
    }
}
