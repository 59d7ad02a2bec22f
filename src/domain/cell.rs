use super::{RuleSet, Zone};

/// Cell is the fundamental unit of the automaton.
/// A live cell remembers how many generations it has survived and how far
/// it has faded in or out. Opacity is kept in whole fade steps so that it
/// moves by exactly `1 / fade_frames` per generation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive { age: u32, fade: u8 },
}

impl Cell {
    /// A cell that was just born: age 1, one fade step visible
    pub const fn newborn() -> Self {
        Cell::Alive { age: 1, fade: 1 }
    }

    /// A fully visible cell of age 1, used when seeding
    pub const fn seeded(fade_frames: u8) -> Self {
        Cell::Alive { age: 1, fade: fade_frames }
    }

    /// Present on the grid, including cells that are fading out
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive { .. })
    }

    pub const fn age(self) -> Option<u32> {
        match self {
            Cell::Alive { age, .. } => Some(age),
            Cell::Dead => None,
        }
    }

    /// Opacity in [0, 1]
    pub fn opacity(self, fade_frames: u8) -> f32 {
        match self {
            Cell::Alive { fade, .. } if fade_frames > 0 => (fade.min(fade_frames)) as f32 / fade_frames as f32,
            Cell::Alive { .. } => 1.0,
            Cell::Dead => 0.0,
        }
    }

    /// Pure transition for one generation.
    /// `neighbors` is the raw live-neighbor count; the zone adjusts it
    /// before the birth or survival check.
    pub fn evolve(self, rules: &RuleSet, zone: Zone, neighbors: u8, max_age: u32, fade_frames: u8) -> Self {
        match self {
            Cell::Dead if rules.is_birth(zone.birth_count(neighbors)) => Cell::newborn(),
            Cell::Dead => Cell::Dead,
            Cell::Alive { age, fade } if rules.is_survival(zone.survival_count(neighbors)) && age < max_age => {
                Cell::Alive {
                    age: age + 1,
                    fade: fade.saturating_add(1).min(fade_frames),
                }
            }
            // dying: by rule or by old age
            Cell::Alive { age, fade } => match fade.saturating_sub(1) {
                0 => Cell::Dead,
                fade => Cell::Alive { age, fade },
            },
        }
    }
}
