//! Rendering functions for converting light maps to viewable files

use crate::light_map::{LightCell, LightMap};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

const HTML_STYLE: &str = "\
body { display: flex; justify-content: center; align-items: center; min-height: 100vh; margin: 0; background: #22c55e; }
table { border-collapse: collapse; }
td { width: 2.5rem; height: 2rem; border: 2px solid #6b7280; text-align: center; font-size: 1.25rem; }
td.lit { background: #fef08a; }
td.unlit { background: #6b7280; }";

/// RGB color used for a cell in image output
#[inline]
pub fn cell_rgb(cell: LightCell) -> (u8, u8, u8) {
    match cell {
        LightCell::Unlit => (64, 64, 64),   // Gray for walls and dark rooms
        LightCell::Lit => (254, 240, 138),  // Warm yellow
        LightCell::Bulb => (245, 158, 11),  // Orange
    }
}

/// Render a light map as a standalone HTML document with one table
pub fn render_html(light_map: &LightMap) -> String {
    let mut table = String::from("<table>\n");
    for row in light_map.rows() {
        table.push_str("<tr>");
        for &cell in row {
            let class = if cell == LightCell::Unlit { "unlit" } else { "lit" };
            let marker = if cell == LightCell::Bulb {
                "<span class=\"bulb\">💡</span>"
            } else {
                ""
            };
            table.push_str(&format!("<td class=\"{}\">{}</td>", class, marker));
        }
        table.push_str("</tr>\n");
    }
    table.push_str("</table>");

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Results from light bulb picker</title>\n<style>\n{}\n</style>\n</head>\n\
         <body>\n{}\n</body>\n</html>\n",
        HTML_STYLE, table
    )
}

/// Save a light map as a timestamped HTML file inside `folder`, creating it if needed.
/// Returns the path written.
pub fn save_html(light_map: &LightMap, folder: &Path) -> io::Result<PathBuf> {
    let (mut file, path) = create_timestamped(folder, "html")?;
    file.write_all(render_html(light_map).as_bytes())?;
    log::info!("Output saved at: {}", path.display());
    Ok(path)
}

/// Save a light map to a PPM file, each cell drawn as `scale` x `scale` pixels
pub fn save_ppm(light_map: &LightMap, filename: &Path, scale: usize) -> io::Result<()> {
    write_ppm(light_map, File::create(filename)?, scale)
}

fn write_ppm(light_map: &LightMap, file: File, scale: usize) -> io::Result<()> {
    let scale = scale.max(1);
    let img_width = light_map.width() * scale;
    let img_height = light_map.height() * scale;

    let mut file = BufWriter::new(file);
    writeln!(file, "P3")?;
    writeln!(file, "{} {}", img_width, img_height)?;
    writeln!(file, "255")?;

    for img_y in 0..img_height {
        for img_x in 0..img_width {
            let (r, g, b) = cell_rgb(light_map.get(img_y / scale, img_x / scale));
            write!(file, "{} {} {} ", r, g, b)?;
        }
        writeln!(file)?;
    }

    file.flush()
}

/// Save a light map as a timestamped PPM file inside `folder`.
pub fn save_ppm_in(light_map: &LightMap, folder: &Path, scale: usize) -> io::Result<PathBuf> {
    let (file, path) = create_timestamped(folder, "ppm")?;
    write_ppm(light_map, file, scale)?;
    log::info!("Output saved at: {}", path.display());
    Ok(path)
}

/// Create a new file `<folder>/<UTC timestamp>.<extension>`, never replacing an
/// existing one: a taken name gets a `-1`, `-2`, ... suffix.
/// Colons are replaced so the name is portable.
fn create_timestamped(folder: &Path, extension: &str) -> io::Result<(File, PathBuf)> {
    fs::create_dir_all(folder)?;
    let stamp = chrono::Utc::now()
        .format("%Y-%m-%dT%H-%M-%S%.3fZ")
        .to_string();

    let mut attempt = 0usize;
    loop {
        let name = if attempt == 0 {
            format!("{}.{}", stamp, extension)
        } else {
            format!("{}-{}.{}", stamp, attempt, extension)
        };
        let path = folder.join(name);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((file, path)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => return Err(e),
        }
    }
}
