use nalgebra::{DMatrix, DVector};

use crate::error::{Error, Result};

/// Fewest locations that still leave one intermediate between start and end.
pub const MIN_LOCATIONS: usize = 3;

/// Square cost table; `get(i, j)` is the cost of moving directly from `i` to `j`.
///
/// Every entry is finite. Symmetry holds for coordinate-built matrices only.
#[derive(Clone, Debug, PartialEq)]
pub struct CostMatrix {
    m: DMatrix<f64>,
}

impl CostMatrix {
    /// Euclidean distances between points of equal dimensionality.
    ///
    /// Only the upper triangle is computed; the lower half is filled by adding
    /// the transpose, so `get(i, j) == get(j, i)` bit-for-bit and the diagonal is 0.
    pub fn from_coords<P: AsRef<[f64]>>(coords: &[P]) -> Result<Self> {
        let dim = match coords.first() {
            Some(p) => p.as_ref().len(),
            None => return Err(Error::insufficient(0)),
        };
        if dim == 0 {
            return Err(Error::invalid_input("points must have at least one coordinate"));
        }
        for (i, p) in coords.iter().enumerate() {
            let p = p.as_ref();
            if p.len() != dim {
                return Err(Error::invalid_input(format!(
                    "point {i} has {} coordinates, expected {dim}",
                    p.len()
                )));
            }
            if !p.iter().all(|x| x.is_finite()) {
                return Err(Error::invalid_input(format!("point {i} has a non-finite coordinate")));
            }
        }
        let n = coords.len();
        if n < MIN_LOCATIONS {
            return Err(Error::insufficient(n));
        }

        let pts: Vec<DVector<f64>> = coords
            .iter()
            .map(|p| DVector::from_column_slice(p.as_ref()))
            .collect();
        let mut upper = DMatrix::zeros(n, n);
        for j in 0..n {
            for k in (j + 1)..n {
                upper[(j, k)] = (&pts[j] - &pts[k]).norm();
            }
        }
        let m = &upper + upper.transpose();
        Ok(Self { m })
    }

    /// Accept a caller-supplied matrix as-is. No symmetry is required.
    pub fn from_matrix(m: DMatrix<f64>) -> Result<Self> {
        if !m.is_square() {
            return Err(Error::invalid_input(format!(
                "cost matrix must be square, got {}x{}",
                m.nrows(),
                m.ncols()
            )));
        }
        if let Some(idx) = m.iter().position(|v| !v.is_finite()) {
            // column-major storage
            let (i, j) = (idx % m.nrows(), idx / m.nrows());
            return Err(Error::invalid_input(format!("cost[{i}][{j}] is not finite")));
        }
        if m.nrows() < MIN_LOCATIONS {
            return Err(Error::insufficient(m.nrows()));
        }
        Ok(Self { m })
    }

    /// Row-major nested rows, e.g. parsed from JSON.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let n = rows.len();
        for (i, r) in rows.iter().enumerate() {
            if r.as_ref().len() != n {
                return Err(Error::invalid_input(format!(
                    "cost matrix must be square: row {i} has {} entries, expected {n}",
                    r.as_ref().len()
                )));
            }
        }
        Self::from_matrix(DMatrix::from_fn(n, n, |i, j| rows[i].as_ref()[j]))
    }

    /// Number of locations.
    #[inline]
    pub fn len(&self) -> usize {
        self.m.nrows()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.m.nrows() == 0
    }

    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.m[(from, to)]
    }

    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.m
    }

    /// Sum of consecutive edge costs along `path`; 0 for fewer than two stops.
    pub fn path_length(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }

    pub fn is_symmetric(&self, tol: f64) -> bool {
        let n = self.len();
        (0..n).all(|i| ((i + 1)..n).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= tol))
    }

    /// Nested rows, the inverse of `from_rows`.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.m.row_iter().map(|r| r.iter().copied().collect()).collect()
    }
}
