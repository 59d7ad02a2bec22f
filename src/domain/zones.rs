//! Fixed 2x2 partition of the grid into environmental zones.
//!
//! Each quadrant bends the rules a little: the top-right makes birth
//! easier, the bottom-left makes survival harder and the bottom-right
//! halves the lifespan. The top-left runs the drawn rules untouched.

use super::rules::MAX_NEIGHBORS;

/// Zones per axis
pub const ZONE_DIVISIONS: usize = 2;

/// One quadrant of the grid
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Zone {
    /// Top-left, no modifier
    Baseline,
    /// Top-right, one extra neighbor counted for birth
    FertileBirth,
    /// Bottom-left, one neighbor fewer counted for survival
    HarshSurvival,
    /// Bottom-right, half the usual lifespan
    FastAging,
}

impl Zone {
    pub const ALL: [Zone; 4] = [Zone::Baseline, Zone::FertileBirth, Zone::HarshSurvival, Zone::FastAging];

    /// Row-major index within the 2x2 layout
    pub const fn id(self) -> usize {
        match self {
            Zone::Baseline => 0,
            Zone::FertileBirth => 1,
            Zone::HarshSurvival => 2,
            Zone::FastAging => 3,
        }
    }

    pub const fn from_id(id: usize) -> Option<Self> {
        match id {
            0 => Some(Zone::Baseline),
            1 => Some(Zone::FertileBirth),
            2 => Some(Zone::HarshSurvival),
            3 => Some(Zone::FastAging),
            _ => None,
        }
    }

    /// Neighbor count used when checking the birth rule
    pub const fn birth_count(self, raw: u8) -> u8 {
        match self {
            Zone::FertileBirth if raw < MAX_NEIGHBORS => raw + 1,
            Zone::FertileBirth => MAX_NEIGHBORS,
            _ => raw,
        }
    }

    /// Neighbor count used when checking the survival rule
    pub const fn survival_count(self, raw: u8) -> u8 {
        match self {
            Zone::HarshSurvival => raw.saturating_sub(1),
            _ => raw,
        }
    }

    /// Lifespan cap for cells in this zone
    pub fn max_age(self, base_max_age: u32) -> u32 {
        match self {
            Zone::FastAging => (base_max_age / 2).max(1),
            _ => base_max_age,
        }
    }
}

/// Maps coordinates to zones for a grid of fixed size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ZoneModel {
    width: usize,
    height: usize,
    base_max_age: u32,
}

impl ZoneModel {
    pub fn new(width: usize, height: usize, base_max_age: u32) -> Self {
        Self {
            width,
            height,
            base_max_age: base_max_age.max(1),
        }
    }

    pub const fn base_max_age(&self) -> u32 {
        self.base_max_age
    }

    /// Equivalent to `floor(x / (width / 2))`, exact for odd sizes too
    pub fn zone_of(&self, x: usize, y: usize) -> Zone {
        debug_assert!(x < self.width && y < self.height, "({x}, {y}) outside {}x{}", self.width, self.height);
        let col = (x * ZONE_DIVISIONS / self.width.max(1)).min(ZONE_DIVISIONS - 1);
        let row = (y * ZONE_DIVISIONS / self.height.max(1)).min(ZONE_DIVISIONS - 1);
        Zone::from_id(row * ZONE_DIVISIONS + col).unwrap_or(Zone::Baseline)
    }

    pub fn max_age_of(&self, x: usize, y: usize) -> u32 {
        self.zone_of(x, y).max_age(self.base_max_age)
    }
}
