//! Cross-validation view over a model data container.

use ndarray::{Array2, Axis};

use crate::error::{EdgenetError, Result};

use super::folds::FoldAssignment;
use super::model_data::ModelData;

/// A [`ModelData`] container paired with a fold assignment.
///
/// Borrows the full-data container read-only; per-fold training containers
/// are materialized on demand (cross-products recomputed for the training
/// rows, prior graphs shared). The full-data container is never mutated.
#[derive(Debug)]
pub struct CvData<'a> {
    data: &'a ModelData,
    folds: FoldAssignment,
}

impl<'a> CvData<'a> {
    /// Pair a container with a fold assignment covering its samples.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` when the assignment length differs from the
    /// container's sample count.
    pub fn new(data: &'a ModelData, folds: FoldAssignment) -> Result<Self> {
        if folds.len() != data.n_samples() {
            return Err(EdgenetError::InvalidDimensions {
                name: "fold assignment length",
                expected: data.n_samples(),
                got: folds.len(),
            });
        }
        Ok(Self { data, folds })
    }

    /// The underlying full-data container.
    #[inline]
    pub fn data(&self) -> &ModelData {
        self.data
    }

    /// The fold assignment in use.
    #[inline]
    pub fn folds(&self) -> &FoldAssignment {
        &self.folds
    }

    /// Materialize the training container for one fold (all other folds).
    pub(crate) fn training_data(&self, fold: usize) -> ModelData {
        let (train, _) = self.folds.split(fold);
        self.data.subset(&train)
    }

    /// The held-out design and response rows for one fold.
    pub(crate) fn held_out(&self, fold: usize) -> (Array2<f64>, Array2<f64>) {
        let (_, held_out) = self.folds.split(fold);
        (
            self.data.design().select(Axis(0), &held_out),
            self.data.response().select(Axis(0), &held_out),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::Family;
    use ndarray::array;

    fn data() -> ModelData {
        let x = array![[1.0], [2.0], [3.0], [4.0]];
        let y = array![[1.0], [2.0], [3.0], [4.0]];
        let g = Array2::<f64>::zeros((1, 1));
        ModelData::new(x, y, g.view(), g.view(), Family::Gaussian).unwrap()
    }

    #[test]
    fn training_and_held_out_partition_samples() {
        let full = data();
        let folds = FoldAssignment::from_ids(vec![1, 2, 1, 2], 4).unwrap();
        let cv = CvData::new(&full, folds).unwrap();

        let train = cv.training_data(1);
        let (x_held, y_held) = cv.held_out(1);
        assert_eq!(train.n_samples(), 2);
        assert_eq!(x_held, array![[1.0], [3.0]]);
        assert_eq!(y_held, array![[1.0], [3.0]]);
    }

    #[test]
    fn rejects_mismatched_assignment() {
        let full = data();
        let folds = FoldAssignment::from_ids(vec![1, 2, 1], 3).unwrap();
        assert!(CvData::new(&full, folds).is_err());
    }
}
