//! Parallelism configuration shared across the crate.
//!
//! Per-fold cross-validation fits are independent, so the loss function can
//! fan them out over worker threads. The thread pool is set up once at the
//! public entry points via [`run_with_threads`]; inner components only
//! consult the [`Parallelism`] flag and never manage pools themselves.

use rayon::prelude::*;

/// Whether parallel execution is allowed.
///
/// When `Parallel`, components may use `rayon` parallel iterators.
/// When `Sequential`, components must iterate in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parallelism {
    Sequential,
    Parallel,
}

impl Parallelism {
    /// Create from thread count semantics.
    ///
    /// - 0 = auto (parallel if the rayon pool has multiple threads)
    /// - 1 = sequential
    /// - >1 = parallel
    #[inline]
    pub fn from_threads(n_threads: usize) -> Self {
        if n_threads == 1 || (n_threads == 0 && rayon::current_num_threads() == 1) {
            Parallelism::Sequential
        } else {
            Parallelism::Parallel
        }
    }

    /// Returns `true` if parallel execution is allowed.
    #[inline]
    pub fn is_parallel(self) -> bool {
        matches!(self, Parallelism::Parallel)
    }

    /// Map over items, in parallel when allowed.
    #[inline]
    pub fn maybe_par_map<T, B, I, F>(self, iter: I, f: F) -> Vec<B>
    where
        T: Send,
        B: Send,
        I: IntoIterator<Item = T> + IntoParallelIterator<Item = T>,
        F: Fn(T) -> B + Sync + Send,
    {
        if self.is_parallel() {
            iter.into_par_iter().map(f).collect()
        } else {
            iter.into_iter().map(f).collect()
        }
    }
}

/// Run a closure with the appropriate thread pool.
///
/// Thread count semantics:
/// - `0` = auto (use all available cores)
/// - `1` = sequential (no thread pool)
/// - `n > 1` = use exactly `n` threads
#[inline]
pub fn run_with_threads<T: Send>(n_threads: usize, f: impl FnOnce(Parallelism) -> T + Send) -> T {
    let parallelism = Parallelism::from_threads(n_threads);

    match parallelism {
        Parallelism::Sequential => f(Parallelism::Sequential),
        Parallelism::Parallel => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n_threads)
                .build()
                .expect("Failed to create thread pool");
            pool.install(|| f(Parallelism::Parallel))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallelism_from_threads() {
        assert!(!Parallelism::from_threads(1).is_parallel());
        assert!(Parallelism::from_threads(2).is_parallel());
        assert!(Parallelism::from_threads(8).is_parallel());
    }

    #[test]
    fn maybe_par_map_matches_sequential() {
        let seq: Vec<_> = Parallelism::Sequential.maybe_par_map(0..5usize, |i| i * 2);
        let par: Vec<_> = Parallelism::Parallel.maybe_par_map(0..5usize, |i| i * 2);
        assert_eq!(seq, par);
        assert_eq!(seq, vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn run_with_threads_explicit() {
        let n = run_with_threads(2, |_| rayon::current_num_threads());
        assert_eq!(n, 2);
    }

    #[test]
    fn run_with_threads_sequential() {
        let out = run_with_threads(1, |p| {
            assert!(!p.is_parallel());
            42
        });
        assert_eq!(out, 42);
    }
}
