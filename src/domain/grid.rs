use rand::Rng;
use rayon::prelude::*;

use super::{Cell, GridError, RuleSet, Zone, ZoneModel};

/// Grid manages the 2D cellular automaton.
/// Two buffers of identical shape are kept: the current generation and
/// its successor. A step writes every successor cell from the current
/// snapshot only, then swaps the two buffers.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    fade_frames: u8,
    zones: ZoneModel,
    cells: Vec<Cell>,
    next: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize, base_max_age: u32, fade_frames: u8) -> Self {
        Self {
            width,
            height,
            fade_frames: fade_frames.max(1),
            zones: ZoneModel::new(width, height, base_max_age),
            cells: vec![Cell::Dead; width * height],
            next: vec![Cell::Dead; width * height],
        }
    }

    /// Build a grid around an existing row-major cell buffer
    pub fn from_cells(
        width: usize,
        height: usize,
        cells: Vec<Cell>,
        base_max_age: u32,
        fade_frames: u8,
    ) -> Result<Self, GridError> {
        if cells.len() != width * height {
            return Err(GridError::DimensionMismatch { width, height, actual: cells.len() });
        }
        let mut grid = Self::new(width, height, base_max_age, fade_frames);
        grid.cells = cells;
        Ok(grid)
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn fade_frames(&self) -> u8 {
        self.fade_frames
    }

    pub const fn zones(&self) -> &ZoneModel {
        &self.zones
    }

    pub fn zone_of(&self, x: usize, y: usize) -> Zone {
        self.zones.zone_of(x, y)
    }

    pub fn max_age_of(&self, x: usize, y: usize) -> u32 {
        self.zones.max_age_of(x, y)
    }

    /// Opacity of a cell under this grid's fade speed
    pub fn opacity_of(&self, cell: Cell) -> f32 {
        cell.opacity(self.fade_frames)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[self.get_index(x, y)])
    }

    /// Overwrite a cell in the current generation
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Count present neighbors using toroidal wrapping.
    /// Fading cells still count.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        if self.cells.is_empty() {
            return 0;
        }
        let (w, h) = (self.width, self.height);

        (0..3)
            .flat_map(|dy| (0..3).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 1 || dy != 1)
            .map(|(dx, dy)| {
                let nx = (x + w + dx - 1) % w;
                let ny = (y + h + dy - 1) % h;
                self.cells[self.get_index(nx, ny)]
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Successor of one cell, computed from the current generation only
    pub fn next_cell(&self, x: usize, y: usize, rules: &RuleSet) -> Cell {
        let zone = self.zones.zone_of(x, y);
        let max_age = zone.max_age(self.zones.base_max_age());
        let neighbors = self.count_live_neighbors(x, y);
        self.cells[self.get_index(x, y)].evolve(rules, zone, neighbors, max_age, self.fade_frames)
    }

    /// Advance one generation (serial)
    pub fn step(&mut self, rules: &RuleSet) {
        self.assert_shape();
        let mut next = std::mem::take(&mut self.next);
        let width = self.width;
        next.iter_mut().enumerate().for_each(|(idx, slot)| {
            *slot = self.next_cell(idx % width, idx / width, rules);
        });
        self.next = next;
        std::mem::swap(&mut self.cells, &mut self.next);
    }

    /// Advance one generation with rows computed in parallel
    pub fn step_parallel(&mut self, rules: &RuleSet) {
        self.assert_shape();
        if self.cells.is_empty() {
            return;
        }
        let mut next = std::mem::take(&mut self.next);
        let this = &*self;
        next.par_chunks_mut(this.width).enumerate().for_each(|(y, row)| {
            row.iter_mut().enumerate().for_each(|(x, slot)| {
                *slot = this.next_cell(x, y, rules);
            });
        });
        self.next = next;
        std::mem::swap(&mut self.cells, &mut self.next);
    }

    /// Reseed: each cell is born fully visible with probability `density`.
    /// With a positive density at least one cell is always placed.
    pub fn seed<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R) {
        let density = if density.is_finite() { density.clamp(0.0, 1.0) } else { 0.0 };
        let seeded = Cell::seeded(self.fade_frames);

        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(density) { seeded } else { Cell::Dead };
        });
        self.next.fill(Cell::Dead);

        if density > 0.0 && !self.cells.is_empty() && self.is_extinct() {
            let idx = rng.random_range(0..self.cells.len());
            self.cells[idx] = seeded;
        }
    }

    /// No cell present anywhere, fading ones included
    pub fn is_extinct(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_alive())
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }

    fn assert_shape(&self) {
        assert_eq!(self.cells.len(), self.width * self.height, "cell buffer does not match {}x{}", self.width, self.height);
        assert_eq!(self.cells.len(), self.next.len(), "generation buffers differ in size");
    }
}
