use rand::Rng;
use serde::{Serialize, Deserialize};

/// Row-major matrix of `f64`. Layers use one row per neuron, with the last
/// column of each row holding that neuron's bias.
#[derive(Debug, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Fills a matrix with independent draws uniform on [-0.5, 0.5).
    ///
    /// The generator is supplied by the caller so that every matrix in a
    /// network draws from the same seeded stream.
    pub fn uniform<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>() - 0.5;
            }
        }

        res
    }

    /// Wraps an existing rectangular grid of values.
    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        let rows = data.len();
        let cols = data.first().map_or(0, |row| row.len());
        assert!(
            data.iter().all(|row| row.len() == cols),
            "all matrix rows must have the same length"
        );
        Matrix { rows, cols, data }
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.data[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zeros_has_requested_shape() {
        let m = Matrix::zeros(3, 5);
        assert_eq!(m.rows, 3);
        assert_eq!(m.cols, 5);
        assert_eq!(m.data.len(), 3);
        assert!(m.data.iter().all(|row| row.len() == 5));
        assert!(m.data.iter().flatten().all(|&x| x == 0.0));
    }

    #[test]
    fn uniform_stays_in_init_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let m = Matrix::uniform(10, 10, &mut rng);
        assert_eq!(m.rows, 10);
        assert_eq!(m.cols, 10);
        assert!(m.data.iter().flatten().all(|&x| (-0.5..0.5).contains(&x)));
    }

    #[test]
    fn uniform_is_reproducible_for_equal_seeds() {
        let a = Matrix::uniform(4, 4, &mut StdRng::seed_from_u64(7));
        let b = Matrix::uniform(4, 4, &mut StdRng::seed_from_u64(7));
        assert_eq!(a.data, b.data);
    }

    #[test]
    fn from_data_infers_shape() {
        let m = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
        assert_eq!(m.rows, 3);
        assert_eq!(m.cols, 2);
        assert_eq!(m.row(1), &[3.0, 4.0]);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn from_data_rejects_ragged_rows() {
        Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0]]);
    }
}
