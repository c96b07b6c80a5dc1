//! Dense pairwise similarity matrix
//!
//! Built once from unit-length term vectors. Time is O(N² × average
//! non-zeros) and memory is O(N²) f32 cells (about 400 MB at 10k products),
//! which keeps the practical catalog size in the low thousands to ten
//! thousand products. There is no incremental
//! update: a changed catalog needs a full rebuild.

use prodsim_core::{Error, Result, SparseVector};
use rayon::prelude::*;

/// Symmetric N×N cosine-similarity matrix, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    cells: Vec<f32>,
}

impl SimilarityMatrix {
    /// Compute all pairwise cosine similarities of unit-length vectors.
    ///
    /// Values are clamped to [0, 1] and the diagonal is exactly 1.0. A zero
    /// vector scores 0.0 against every other row. Rows are filled in
    /// parallel; every cell is the same sparse merge so the result does not
    /// depend on scheduling.
    pub fn build(vectors: &[SparseVector]) -> Self {
        let n = vectors.len();
        let mut cells = vec![0.0f32; n * n];
        if n == 0 {
            return Self { n, cells };
        }

        cells
            .par_chunks_mut(n)
            .enumerate()
            .for_each(|(i, row)| {
                let vi = &vectors[i];
                for (j, cell) in row.iter_mut().enumerate() {
                    *cell = if i == j {
                        1.0
                    } else {
                        vi.dot(&vectors[j]).clamp(0.0, 1.0)
                    };
                }
            });

        Self { n, cells }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Similarity between rows `i` and `j`
    pub fn get(&self, i: usize, j: usize) -> Result<f32> {
        self.check(i)?;
        self.check(j)?;
        Ok(self.cells[i * self.n + j])
    }

    /// Row `i` as a slice
    pub fn row(&self, i: usize) -> Result<&[f32]> {
        self.check(i)?;
        Ok(&self.cells[i * self.n..(i + 1) * self.n])
    }

    /// Square sub-matrix among `indices`, in the given order
    pub fn submatrix(&self, indices: &[usize]) -> Result<Vec<Vec<f32>>> {
        for &i in indices {
            self.check(i)?;
        }
        Ok(indices
            .iter()
            .map(|&i| indices.iter().map(|&j| self.cells[i * self.n + j]).collect())
            .collect())
    }

    #[inline]
    fn check(&self, index: usize) -> Result<()> {
        if index < self.n {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange { index, len: self.n })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prodsim_core::TfidfVectorizer;

    fn matrix(docs: &[&str]) -> SimilarityMatrix {
        let vectors = TfidfVectorizer::default().fit_transform(docs).unwrap();
        SimilarityMatrix::build(&vectors)
    }

    #[test]
    fn test_symmetric_with_unit_diagonal() {
        let m = matrix(&[
            "wireless bluetooth earbuds",
            "bluetooth speaker with bass",
            "cotton kurti dress",
            "the of and",
        ]);
        assert_eq!(m.len(), 4);
        for i in 0..4 {
            assert_eq!(m.get(i, i).unwrap(), 1.0);
            for j in 0..4 {
                let s = m.get(i, j).unwrap();
                assert_eq!(s, m.get(j, i).unwrap());
                assert!((0.0..=1.0).contains(&s));
            }
        }
        // zero vector matches nothing else
        assert_eq!(m.get(3, 0).unwrap(), 0.0);
        assert!(m.get(0, 1).unwrap() > 0.0);
        assert_eq!(m.get(0, 2).unwrap(), 0.0);
    }

    #[test]
    fn test_out_of_range() {
        let m = matrix(&["leather wallet", "leather belt"]);
        assert!(matches!(
            m.get(0, 2),
            Err(Error::IndexOutOfRange { index: 2, len: 2 })
        ));
        assert!(m.row(5).is_err());
        assert!(m.submatrix(&[0, 9]).is_err());
    }

    #[test]
    fn test_submatrix_order() {
        let m = matrix(&["leather wallet", "leather belt", "steel bottle"]);
        let sub = m.submatrix(&[2, 0]).unwrap();
        assert_eq!(sub.len(), 2);
        assert_eq!(sub[0][0], 1.0);
        assert_eq!(sub[0][1], m.get(2, 0).unwrap());
        assert_eq!(sub[1][0], m.get(0, 2).unwrap());
    }

    #[test]
    fn test_rebuild_is_bit_identical() {
        let docs = ["wireless earbuds", "wired earphones earbuds", "earbuds case"];
        assert_eq!(matrix(&docs), matrix(&docs));
    }
}
