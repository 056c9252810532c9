//! Chromatogram rendering to PNG.

use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

use crate::error::{OutputError, Result};

/// Geometry and colors for a rendered chromatogram.
#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
    /// Margin around the plot area, in pixels; axes sit on its inner edge.
    pub margin: u32,
    pub background: Rgb<u8>,
    pub axis: Rgb<u8>,
    pub trace: Rgb<u8>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 900,
            height: 600,
            margin: 48,
            background: Rgb([255, 255, 255]),
            axis: Rgb([0, 0, 0]),
            trace: Rgb([31, 119, 180]),
        }
    }
}

/// Download file name for one sample's chart: `chromatogram<name>.png`.
pub fn chromatogram_file_name(display_name: &str) -> String {
    format!("chromatogram{display_name}.png")
}

/// Rasterize one sample's intensity-vs-time polyline.
///
/// `times` and `intensities` must be the same non-zero length; the x axis
/// spans the time range, the y axis the intensity range (padded when the
/// trace is flat so it still draws mid-plot).
pub fn render_chromatogram(
    times: &[f64],
    intensities: &[f64],
    options: &ChartOptions,
) -> Result<RgbImage> {
    if times.len() != intensities.len() {
        return Err(OutputError::TraceLengthMismatch {
            times: times.len(),
            intensities: intensities.len(),
        });
    }
    if times.is_empty() {
        return Err(OutputError::EmptyTrace);
    }

    let mut img = RgbImage::from_pixel(options.width, options.height, options.background);

    let margin = options.margin as i32;
    let left = margin;
    let right = options.width as i32 - margin;
    let top = margin;
    let bottom = options.height as i32 - margin;

    draw_line(&mut img, left, top, left, bottom, options.axis);
    draw_line(&mut img, left, bottom, right, bottom, options.axis);

    let (x_min, x_max) = padded_range(times);
    let (y_min, y_max) = padded_range(intensities);
    let x_scale = f64::from(right - left) / (x_max - x_min);
    let y_scale = f64::from(bottom - top) / (y_max - y_min);

    let project = |t: f64, i: f64| -> (i32, i32) {
        let x = left + ((t - x_min) * x_scale).round() as i32;
        let y = bottom - ((i - y_min) * y_scale).round() as i32;
        (x, y)
    };

    let mut previous = project(times[0], intensities[0]);
    for (&t, &i) in times.iter().zip(intensities).skip(1) {
        let current = project(t, i);
        draw_line(
            &mut img,
            previous.0,
            previous.1,
            current.0,
            current.1,
            options.trace,
        );
        previous = current;
    }

    Ok(img)
}

/// Render and write one sample's chart as PNG.
pub fn write_chromatogram_png(
    times: &[f64],
    intensities: &[f64],
    options: &ChartOptions,
    path: &Path,
) -> Result<()> {
    let img = render_chromatogram(times, intensities, options)?;
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

fn padded_range(values: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min == max {
        // Flat trace: pad so the scale stays finite.
        (min - 1.0, max + 1.0)
    } else {
        (min, max)
    }
}

/// Bresenham segment, clipped to the image bounds.
fn draw_line(img: &mut RgbImage, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb<u8>) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);
    loop {
        if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
            img.put_pixel(x as u32, y as u32, color);
        }
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
