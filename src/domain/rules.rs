use std::fmt;
use std::ops::Range;

use rand::Rng;
use rand::seq::IndexedRandom;

/// Highest neighbor count a Moore neighborhood can produce
pub const MAX_NEIGHBORS: u8 = 8;

/// Birth pool for Life-like draws. Repetition encodes weight.
const GOL_BIRTH_WEIGHTED: &[u8] = &[0, 1, 2, 2, 3, 3, 3, 3, 3, 4, 4, 5, 6, 7, 8];

/// Survival pool for Life-like draws. Repetition encodes weight.
const GOL_SURVIVAL_WEIGHTED: &[u8] = &[0, 1, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 4, 4, 5, 6, 7, 8];

const UNIFORM_NEIGHBORS: &[u8] = &[0, 1, 2, 3, 4, 5, 6, 7, 8];

/// Set of neighbor counts (0-8) stored as a 9-bit mask.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NeighborSet(u16);

impl NeighborSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Add a count. Values above 8 are ignored.
    pub fn insert(&mut self, count: u8) {
        if count <= MAX_NEIGHBORS {
            self.0 |= 1 << count;
        }
    }

    pub const fn contains(self, count: u8) -> bool {
        count <= MAX_NEIGHBORS && (self.0 >> count) & 1 == 1
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Counts in ascending order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..=MAX_NEIGHBORS).filter(move |&n| self.contains(n))
    }
}

impl FromIterator<u8> for NeighborSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |mut set, n| {
            set.insert(n);
            set
        })
    }
}

impl fmt::Display for NeighborSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|n| write!(f, "{n}"))
    }
}

impl fmt::Debug for NeighborSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Birth/survival rule applied to every cell for one generation
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RuleSet {
    pub birth: NeighborSet,
    pub survival: NeighborSet,
}

impl RuleSet {
    pub fn new(birth: impl IntoIterator<Item = u8>, survival: impl IntoIterator<Item = u8>) -> Self {
        Self {
            birth: birth.into_iter().collect(),
            survival: survival.into_iter().collect(),
        }
    }

    /// Conway's Game of Life (B3/S23)
    pub fn conway() -> Self {
        Self::new([3], [2, 3])
    }

    pub const fn is_birth(&self, neighbors: u8) -> bool {
        self.birth.contains(neighbors)
    }

    pub const fn is_survival(&self, neighbors: u8) -> bool {
        self.survival.contains(neighbors)
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}/S{}", self.birth, self.survival)
    }
}

/// Which distribution a draw came from
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RuleMode {
    /// Weighted toward the counts Life-like rules favour
    LifeLike,
    /// Uniform over 0-8
    Uniform,
}

/// One output of the generator: the rules for the next tick and the
/// density used the next time the grid is reseeded.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RuleDraw {
    pub rules: RuleSet,
    pub density: f64,
    pub mode: RuleMode,
}

/// Produces a fresh random rule set on every call.
#[derive(Clone, Debug)]
pub struct RuleGenerator {
    life_like_probability: f64,
    density_range: Range<f64>,
}

impl RuleGenerator {
    pub fn new(life_like_probability: f64, density_range: Range<f64>) -> Self {
        Self {
            life_like_probability: if life_like_probability.is_finite() {
                life_like_probability.clamp(0.0, 1.0)
            } else {
                0.5
            },
            density_range,
        }
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> RuleDraw {
        let mode = if rng.random_bool(self.life_like_probability) {
            RuleMode::LifeLike
        } else {
            RuleMode::Uniform
        };

        let (mut birth, mut survival) = match mode {
            RuleMode::LifeLike => {
                let birth_count = rng.random_range(1..=2);
                let survival_count = rng.random_range(2..=3);
                (
                    pick_weighted_distinct(GOL_BIRTH_WEIGHTED, birth_count, rng),
                    pick_weighted_distinct(GOL_SURVIVAL_WEIGHTED, survival_count, rng),
                )
            }
            RuleMode::Uniform => {
                let birth_count = rng.random_range(1..=4);
                let survival_count = rng.random_range(1..=4);
                (
                    pick_uniform_distinct(UNIFORM_NEIGHBORS, birth_count, rng),
                    pick_uniform_distinct(UNIFORM_NEIGHBORS, survival_count, rng),
                )
            }
        };

        if birth.is_empty() {
            birth = pick_uniform_distinct(UNIFORM_NEIGHBORS, 1, rng);
        }
        if survival.is_empty() {
            survival = pick_uniform_distinct(UNIFORM_NEIGHBORS, 2, rng);
        }

        let density = if self.density_range.is_empty() {
            self.density_range.start
        } else {
            rng.random_range(self.density_range.clone())
        };

        RuleDraw {
            rules: RuleSet { birth, survival },
            density,
            mode,
        }
    }
}

/// Collapse a pool with repeated entries into (value, weight) pairs
fn weights_of(pool: &[u8]) -> Vec<(u8, u32)> {
    pool.iter().fold(Vec::new(), |mut acc: Vec<(u8, u32)>, &n| {
        match acc.iter_mut().find(|(value, _)| *value == n) {
            Some((_, weight)) => *weight += 1,
            None => acc.push((n, 1)),
        }
        acc
    })
}

/// Weighted sampling without replacement: once a value is picked all of
/// its copies leave the pool. Stops early when the pool runs out, so the
/// result may hold fewer than `count` values (possibly none).
pub fn pick_weighted_distinct<R: Rng + ?Sized>(pool: &[u8], count: usize, rng: &mut R) -> NeighborSet {
    let weighted = weights_of(pool);
    let count = count.min(weighted.len());
    weighted
        .choose_multiple_weighted(rng, count, |&(_, weight)| weight)
        .map(|picked| picked.map(|&(value, _)| value).collect())
        .unwrap_or_default()
}

/// Uniform sampling without replacement
pub fn pick_uniform_distinct<R: Rng + ?Sized>(pool: &[u8], count: usize, rng: &mut R) -> NeighborSet {
    pool.choose_multiple(rng, count).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn generator() -> RuleGenerator {
        RuleGenerator::new(0.5, 0.1..0.7)
    }

    #[test]
    fn test_neighbor_set_ignores_duplicates() {
        let set: NeighborSet = [3, 3, 2, 3].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_neighbor_set_rejects_out_of_range() {
        let mut set = NeighborSet::empty();
        set.insert(9);
        assert!(set.is_empty());
        assert!(!set.contains(9));
    }

    #[test]
    fn test_rule_notation() {
        assert_eq!(RuleSet::conway().to_string(), "B3/S23");
        assert_eq!(RuleSet::new([3, 6], [2, 3]).to_string(), "B36/S23");
    }

    #[test]
    fn test_generated_sets_are_never_empty() {
        let generator = generator();
        for seed in 0..2000 {
            let mut rng = StdRng::seed_from_u64(seed);
            let draw = generator.generate(&mut rng);
            assert!(!draw.rules.birth.is_empty(), "seed {seed}");
            assert!(!draw.rules.survival.is_empty(), "seed {seed}");
            assert!(draw.rules.birth.iter().all(|n| n <= MAX_NEIGHBORS));
            assert!(draw.rules.survival.iter().all(|n| n <= MAX_NEIGHBORS));
        }
    }

    #[test]
    fn test_set_sizes_follow_mode() {
        let generator = generator();
        for seed in 0..2000 {
            let mut rng = StdRng::seed_from_u64(seed);
            let draw = generator.generate(&mut rng);
            match draw.mode {
                RuleMode::LifeLike => {
                    assert!((1..=2).contains(&draw.rules.birth.len()));
                    assert!((2..=3).contains(&draw.rules.survival.len()));
                }
                RuleMode::Uniform => {
                    assert!((1..=4).contains(&draw.rules.birth.len()));
                    assert!((1..=4).contains(&draw.rules.survival.len()));
                }
            }
        }
    }

    #[test]
    fn test_density_stays_in_range() {
        let generator = generator();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let density = generator.generate(&mut rng).density;
            assert!((0.1..0.7).contains(&density));
        }
    }

    #[test]
    fn test_both_modes_occur() {
        let generator = generator();
        let mut rng = StdRng::seed_from_u64(42);
        let modes: Vec<_> = (0..200).map(|_| generator.generate(&mut rng).mode).collect();
        assert!(modes.contains(&RuleMode::LifeLike));
        assert!(modes.contains(&RuleMode::Uniform));
    }

    #[test]
    fn test_weighted_pick_prefers_heavy_values() {
        let mut rng = StdRng::seed_from_u64(3);
        let threes = (0..2000)
            .filter(|_| pick_weighted_distinct(GOL_BIRTH_WEIGHTED, 1, &mut rng).contains(3))
            .count();
        let eights = (0..2000)
            .filter(|_| pick_weighted_distinct(GOL_BIRTH_WEIGHTED, 1, &mut rng).contains(8))
            .count();
        // 5/15 versus 1/15
        assert!(threes > eights * 2, "threes={threes} eights={eights}");
    }

    #[test]
    fn test_weighted_pick_exhausts_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let picked = pick_weighted_distinct(&[2, 2, 5], 4, &mut rng);
        assert_eq!(picked.iter().collect::<Vec<_>>(), vec![2, 5]);
    }

    #[test]
    fn test_weighted_pick_from_empty_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick_weighted_distinct(&[], 2, &mut rng).is_empty());
    }

    #[test]
    fn test_non_finite_probability_falls_back() {
        let mut rng = StdRng::seed_from_u64(0);
        for p in [f64::NAN, f64::INFINITY] {
            let draw = RuleGenerator::new(p, 0.1..0.7).generate(&mut rng);
            assert!(!draw.rules.birth.is_empty());
        }
        let draw = RuleGenerator::new(7.0, 0.1..0.7).generate(&mut rng);
        assert_eq!(draw.mode, RuleMode::LifeLike);
    }

    #[test]
    fn test_weights_collapse_repeats() {
        assert_eq!(weights_of(&[1, 2, 2, 3, 3, 3]), vec![(1, 1), (2, 2), (3, 3)]);
    }
}
