//! Fold assignment for k-fold cross-validation.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::error::{EdgenetError, Result};

/// Assignment of every sample to exactly one fold.
///
/// Fold ids are 1-based (`1..=n_folds`), matching the external interface.
/// Assignments are either generated with a seeded shuffle (folds as even as
/// possible, every fold non-empty for `n_folds <= n`) or supplied by the
/// caller and validated: the vector length must equal the sample count and
/// the ids must cover `1..=k` without gaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldAssignment {
    ids: Vec<usize>,
    n_folds: usize,
}

impl FoldAssignment {
    /// Generate a fold assignment by shuffling sample indices and dealing
    /// them round-robin into `n_folds` groups.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` if `n_folds < 2` or `n_folds > n_samples` (an
    /// empty fold would otherwise be unavoidable).
    pub fn generate(n_samples: usize, n_folds: usize, seed: u64) -> Result<Self> {
        if n_folds < 2 || n_folds > n_samples {
            return Err(EdgenetError::InvalidDimensions {
                name: "fold count",
                expected: n_samples,
                got: n_folds,
            });
        }

        let mut order: Vec<usize> = (0..n_samples).collect();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        order.shuffle(&mut rng);

        let mut ids = vec![0usize; n_samples];
        for (position, &sample) in order.iter().enumerate() {
            ids[sample] = position % n_folds + 1;
        }

        Ok(Self { ids, n_folds })
    }

    /// Adopt a caller-supplied assignment verbatim after validation.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` if the vector length differs from `n_samples`,
    /// any id falls outside `1..=k` (k = the largest id), or some fold in
    /// `1..=k` is empty.
    pub fn from_ids(ids: Vec<usize>, n_samples: usize) -> Result<Self> {
        if ids.len() != n_samples {
            return Err(EdgenetError::InvalidDimensions {
                name: "fold assignment length",
                expected: n_samples,
                got: ids.len(),
            });
        }

        let n_folds = ids.iter().copied().max().unwrap_or(0);
        if n_folds < 2 {
            return Err(EdgenetError::InvalidDimensions {
                name: "fold count",
                expected: n_samples,
                got: n_folds,
            });
        }

        let mut seen = vec![false; n_folds];
        for &id in &ids {
            if id == 0 {
                return Err(EdgenetError::InvalidDimensions {
                    name: "fold id range",
                    expected: n_folds,
                    got: 0,
                });
            }
            seen[id - 1] = true;
        }
        let covered = seen.iter().filter(|&&s| s).count();
        if covered != n_folds {
            return Err(EdgenetError::InvalidDimensions {
                name: "fold id coverage",
                expected: n_folds,
                got: covered,
            });
        }

        Ok(Self { ids, n_folds })
    }

    /// Number of folds.
    #[inline]
    pub fn n_folds(&self) -> usize {
        self.n_folds
    }

    /// The per-sample fold ids (1-based).
    #[inline]
    pub fn ids(&self) -> &[usize] {
        &self.ids
    }

    /// Number of samples covered by this assignment.
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when no samples are assigned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Split sample indices into (training, held-out) for one fold.
    pub fn split(&self, fold: usize) -> (Vec<usize>, Vec<usize>) {
        debug_assert!(fold >= 1 && fold <= self.n_folds);
        let mut train = Vec::with_capacity(self.ids.len());
        let mut held_out = Vec::new();
        for (sample, &id) in self.ids.iter().enumerate() {
            if id == fold {
                held_out.push(sample);
            } else {
                train.push(sample);
            }
        }
        (train, held_out)
    }
}
