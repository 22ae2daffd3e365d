//! ASCII/Unicode plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - measured points: `o`
//! - fitted line: `-`

use crate::domain::RegimeAnalysis;

/// Render a terminal plot for one regime: measurements plus the fitted line.
pub fn render_ascii_plot(analysis: &RegimeAnalysis, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (h_min, h_max) = analysis
        .series
        .thickness_range()
        .unwrap_or((50e-6, 90e-6));

    // Determine the WVTR range from measurements and the fitted line.
    let (y_min, y_max) = wvtr_range(analysis).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Draw the fitted line first (so points can overlay).
    draw_curve(
        &mut grid,
        &analysis.line.thickness_m,
        &analysis.line.wvtr,
        h_min,
        h_max,
        y_min,
        y_max,
    );

    for (&h, &w) in analysis.series.thickness_m.iter().zip(&analysis.series.wvtr) {
        let x = map_x(h, h_min, h_max, width);
        let y = map_y(w, y_min, y_max, height);
        grid[y][x] = 'o';
    }

    // Build the final string, with a small header carrying the ranges in
    // lab-notebook units (µm).
    let mut out = String::new();
    out.push_str(&format!(
        "Plot: {} | thickness=[{:.3}, {:.3}] µm | WVTR=[{:.2}, {:.2}] g/m²·day\n",
        analysis.series.regime.display_name(),
        h_min * 1e6,
        h_max * 1e6,
        y_min,
        y_max
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn wvtr_range(analysis: &RegimeAnalysis) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for &w in analysis.series.wvtr.iter().chain(analysis.line.wvtr.iter()) {
        min_y = min_y.min(w);
        max_y = max_y.max(w);
    }

    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(h: f64, h_min: f64, h_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((h - h_min) / (h_max - h_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(w: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((w - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(
    grid: &mut [Vec<char>],
    thickness_m: &[f64],
    wvtr: &[f64],
    h_min: f64,
    h_max: f64,
    y_min: f64,
    y_max: f64,
) {
    if thickness_m.len() < 2 {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for (&h, &w) in thickness_m.iter().zip(wvtr) {
        let x = map_x(h, h_min, h_max, width);
        let y = map_y(w, y_min, y_max, height);
        if let Some((x0, y0)) = prev {
            draw_line(grid, x0, y0, x, y, '-');
        } else {
            grid[y][x] = '-';
        }
        prev = Some((x, y));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
