//! Weighted tables and the draw routine over them.
use crate::random::RandomSource;
use ::log::debug;

/// Reasons a table can't be turned into a [`WeightedCatalog`].
#[derive(::thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogError {
    #[error("a weighted catalog needs at least one entry")]
    Empty,
    #[error("entry {index} has weight zero")]
    ZeroWeight { index: usize },
    #[error("sum of weights is too high for `u64`")]
    TotalOverflow,
}

#[derive(Debug, Clone)]
pub struct Entry<T> {
    weight: u64,
    value: T,
}
impl<T> Entry<T> {
    pub fn weight(&self) -> u64 {
        self.weight
    }
    pub fn value(&self) -> &T {
        &self.value
    }
}

/// An immutable, ordered table of weighted entries.
///
/// Entry `i` is drawn with probability `weight(i) / total_weight()`.
/// Each draw takes exactly one `uniform_int(total_weight())` from the
/// random source, so a seeded source gives the same sequence of entries
/// every time.
#[derive(Debug, Clone)]
pub struct WeightedCatalog<T> {
    entries: Vec<Entry<T>>,
    /// `cumulative[i]` is the sum of the weights of entries `0..=i`.
    cumulative: Vec<u64>,
    total: u64,
}

impl<T> WeightedCatalog<T> {
    /// Build a catalog from `(weight, value)` pairs, in draw order.
    /// Zero weights are refused rather than dropped.
    pub fn new<I>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (u64, T)>,
    {
        let mut total = 0u64;
        let mut cumulative = Vec::new();
        let entries = entries
            .into_iter()
            .enumerate()
            .map(|(index, (weight, value))| {
                if weight == 0 {
                    return Err(CatalogError::ZeroWeight { index });
                }
                total = total.checked_add(weight).ok_or(CatalogError::TotalOverflow)?;
                cumulative.push(total);
                Ok(Entry { weight, value })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        debug!("built weighted catalog of {} entries, total weight {}", entries.len(), total);
        Ok(Self {
            entries,
            cumulative,
            total,
        })
    }

    pub fn total_weight(&self) -> u64 {
        self.total
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    /// Always `false`. Construction refuses empty tables.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn get(&self, index: usize) -> Option<&Entry<T>> {
        self.entries.get(index)
    }
    pub fn iter(&self) -> impl Iterator<Item = &Entry<T>> {
        self.entries.iter()
    }
    /// The exact chance of drawing entry `index`.
    pub fn probability(&self, index: usize) -> Option<f64> {
        self.entries
            .get(index)
            .map(|entry| entry.weight as f64 / self.total as f64)
    }

    /// Draw an entry index.
    pub fn draw_index(&self, rng: &mut dyn RandomSource) -> usize {
        let pick = rng.uniform_int(self.total);
        // First entry whose running total exceeds the pick.
        let index = self.cumulative.partition_point(|&upto| upto <= pick);
        debug_assert!(index < self.entries.len());
        index
    }

    /// Draw an entry.
    pub fn draw(&self, rng: &mut dyn RandomSource) -> &Entry<T> {
        &self.entries[self.draw_index(rng)]
    }
}

#[cfg(test)]
mod tests {
    use super::{CatalogError, WeightedCatalog};
    use crate::testing::{chi_squared, Scripted};
    use ::rand::SeedableRng;
    use ::rand_pcg::Pcg32;

    #[test]
    fn refuses_empty() {
        let table: Vec<(u64, ())> = Vec::new();
        assert_eq!(WeightedCatalog::new(table).unwrap_err(), CatalogError::Empty);
    }

    #[test]
    fn refuses_zero_weight() {
        let err = WeightedCatalog::new(vec![(3, 'a'), (0, 'b'), (1, 'c')]).unwrap_err();
        assert_eq!(err, CatalogError::ZeroWeight { index: 1 });
    }

    #[test]
    fn refuses_overflowing_total() {
        let err = WeightedCatalog::new(vec![(u64::MAX, 'a'), (1, 'b')]).unwrap_err();
        assert_eq!(err, CatalogError::TotalOverflow);
    }

    #[test]
    fn picks_map_onto_cumulative_weights() {
        let catalog = WeightedCatalog::new(vec![(1, 'a'), (2, 'b'), (3, 'c')]).unwrap();
        // Picks 0 | 1 2 | 3 4 5
        let mut rng = Scripted::new(&[0, 1, 2, 3, 5]);
        let drawn: String = (0..5).map(|_| *catalog.draw(&mut rng).value()).collect();
        assert_eq!(drawn, "abbcc");
        assert!(rng.exhausted());
    }

    #[test]
    fn construction_is_repeatable() {
        let table = || vec![(10, "x"), (5, "y"), (1, "z")];
        let (a, b) = (WeightedCatalog::new(table()).unwrap(), WeightedCatalog::new(table()).unwrap());
        assert_eq!(a.total_weight(), b.total_weight());
        let weights = |c: &WeightedCatalog<&str>| c.iter().map(|e| e.weight()).collect::<Vec<_>>();
        assert_eq!(weights(&a), weights(&b));
        assert_eq!(a.total_weight(), 16);
    }

    #[test]
    fn seeded_draws_replay() {
        let catalog = WeightedCatalog::new((1..=12).map(|w| (w, w))).unwrap();
        let run = |seed| {
            let mut rng = Pcg32::seed_from_u64(seed);
            (0..500).map(|_| catalog.draw_index(&mut rng)).collect::<Vec<_>>()
        };
        assert_eq!(run(99), run(99));
        assert_ne!(run(99), run(100));
    }

    #[test]
    fn frequencies_follow_weights() {
        let catalog = WeightedCatalog::new(vec![(1, ()), (2, ()), (3, ()), (4, ()), (10, ())]).unwrap();
        let mut rng = Pcg32::seed_from_u64(0xa02bdbf7bb3c0a7);
        let mut counts = vec![0u64; catalog.len()];
        let draws = 200_000;
        for _ in 0..draws {
            counts[catalog.draw_index(&mut rng)] += 1;
        }
        let expected: Vec<f64> = (0..catalog.len())
            .map(|i| catalog.probability(i).unwrap() * draws as f64)
            .collect();
        // 4 degrees of freedom, p = 0.001
        assert!(chi_squared(&counts, &expected) < 18.47, "{:?}", counts);
    }

    #[test]
    fn single_entry_always_drawn() {
        let catalog = WeightedCatalog::new(vec![(7, "only")]).unwrap();
        let mut rng = Pcg32::seed_from_u64(5);
        assert!((0..100).all(|_| *catalog.draw(&mut rng).value() == "only"));
        assert_eq!(catalog.probability(0), Some(1.0));
        assert_eq!(catalog.probability(1), None);
    }
}
