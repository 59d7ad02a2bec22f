use macroquad::color::{hsl_to_rgb, rgb_to_hsl};
use macroquad::prelude::*;

use crate::application::SimulationState;
use crate::domain::{Cell, Grid, Zone};

/// Gap between a cell's circle and its square
pub const CELL_PADDING: f32 = 3.0;
/// Degrees the hue travels over a cell's lifetime
pub const AGE_HUE_SHIFT: f32 = 300.0;
/// Degrees per tick the zone base hues drift
pub const ZONE_HUE_DRIFT: f32 = 0.5;
/// Hue separation between neighboring zones
pub const ZONE_HUE_SEPARATION: f32 = 90.0;
/// Share of lightness an old cell loses
pub const AGE_DIMMING: f32 = 0.6;

/// Grid size that fits a viewport.
/// Any non-positive input yields an empty grid.
pub fn viewport_grid_size(width: f32, height: f32, cell_size: f32) -> (usize, usize) {
    if !(width > 0.0 && height > 0.0 && cell_size > 0.0) {
        return (0, 0);
    }
    let cells = |dimension: f32| ((dimension / cell_size).floor() as usize).max(1);
    (cells(width), cells(height))
}

/// 0 for a newborn, 1 for a cell at its zone's age limit
pub fn age_ratio(age: u32, max_age: u32) -> f32 {
    if max_age <= 1 {
        return 1.0;
    }
    (age.saturating_sub(1) as f32 / (max_age - 1) as f32).min(1.0)
}

/// Maps cell state to color, starting from one base color
#[derive(Clone, Copy, Debug)]
pub struct CellPalette {
    /// Degrees
    base_hue: f32,
    saturation: f32,
    lightness: f32,
}

impl CellPalette {
    pub fn new(base: Color) -> Self {
        let (h, s, l) = rgb_to_hsl(base);
        Self {
            base_hue: h * 360.0,
            saturation: s,
            lightness: l,
        }
    }

    /// Hue in degrees for a cell in `zone` at the given age ratio
    pub fn hue(&self, zone: Zone, age_ratio: f32, hue_tick: u64) -> f32 {
        let drift = (hue_tick as f64 * ZONE_HUE_DRIFT as f64 % 360.0) as f32;
        let zone_offset = (zone.id() as f32 * ZONE_HUE_SEPARATION + drift) % 360.0;
        let cell_hue = (self.base_hue + zone_offset) % 360.0;
        (cell_hue + age_ratio * AGE_HUE_SHIFT) % 360.0
    }

    /// Color for a cell, or None when there is nothing to draw
    pub fn color(&self, cell: Cell, zone: Zone, max_age: u32, hue_tick: u64, fade_frames: u8) -> Option<Color> {
        let age = cell.age()?;
        let opacity = cell.opacity(fade_frames);
        if opacity <= 0.0 {
            return None;
        }
        let ratio = age_ratio(age, max_age);
        let hue = self.hue(zone, ratio, hue_tick);
        let lightness = self.lightness * (1.0 - ratio * AGE_DIMMING);
        let mut color = hsl_to_rgb(hue / 360.0, self.saturation, lightness);
        color.a = opacity;
        Some(color)
    }
}

impl Default for CellPalette {
    fn default() -> Self {
        Self::new(Color::from_rgba(9, 255, 0, 255))
    }
}

/// Draw every visible cell as a small circle on a black background
pub fn draw_grid(grid: &Grid, state: &SimulationState, palette: &CellPalette, cell_size: f32) {
    clear_background(BLACK);

    let radius = ((cell_size / 2.0) - CELL_PADDING).max(0.5) / 4.0;
    let half = cell_size / 2.0;
    let fade_frames = grid.fade_frames();

    for (x, y, cell) in grid.iter_cells() {
        let zone = grid.zone_of(x, y);
        let max_age = zone.max_age(grid.zones().base_max_age());
        if let Some(color) = palette.color(cell, zone, max_age, state.hue_tick, fade_frames) {
            draw_circle(x as f32 * cell_size + half, y as f32 * cell_size + half, radius, color);
        }
    }
}
