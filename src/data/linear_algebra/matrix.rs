//! # Matrix implementations
//!
//! A dense, row major matrix. Dimensions are fixed at creation, which is all the tableau needs:
//! it never adds or removes rows or columns while pivoting.
use std::slice::Iter;

use crate::data::number_types::traits::OrderedField;

/// Uses a `Vec<Vec<F>>` as underlying data structure. Dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F> DenseMatrix<F>
where
    F: OrderedField,
{
    /// Create a `DenseMatrix` from the provided data.
    ///
    /// # Arguments
    ///
    /// * `data`: Rows of the matrix, all of length `nr_columns`.
    /// * `nr_columns`: Number of columns, needed explicitly to support matrices without rows.
    pub fn from_data(data: Vec<Vec<F>>, nr_columns: usize) -> Self {
        debug_assert!(data.iter().all(|row| row.len() == nr_columns));

        let nr_rows = data.len();
        Self { data, nr_rows, nr_columns }
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> Iter<'_, F> {
        debug_assert!(i < self.nr_rows);

        self.data[i].iter()
    }

    /// Divide all values in row `i` by `divisor`.
    ///
    /// When dividing by an element of the row itself, pass a copy of that element: it changes
    /// while dividing.
    pub fn divide_row(&mut self, i: usize, divisor: &F) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(!divisor.is_zero());

        for value in &mut self.data[i] {
            *value /= divisor.clone();
        }
    }

    /// Subtract `factor` times row `read_row` from row `write_row`, skipping column `skip`.
    ///
    /// The skipped column is typically the pivot column, which gets its values assigned
    /// explicitly afterwards.
    pub fn subtract_multiple_of_row(
        &mut self,
        read_row: usize,
        write_row: usize,
        factor: &F,
        skip: usize,
    ) {
        debug_assert!(read_row < self.nr_rows);
        debug_assert!(write_row < self.nr_rows);
        debug_assert_ne!(read_row, write_row);

        if factor.is_zero() {
            return;
        }

        let (read, write) = if read_row < write_row {
            let (left, right) = self.data.split_at_mut(write_row);
            (&left[read_row], &mut right[0])
        } else {
            let (left, right) = self.data.split_at_mut(read_row);
            (&right[0], &mut left[write_row])
        };

        for (j, (target, source)) in write.iter_mut().zip(read.iter()).enumerate() {
            if j != skip {
                *target -= source.clone() * factor.clone();
            }
        }
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> &F {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        &self.data[i][j]
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set_value(&mut self, i: usize, j: usize, value: F) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j] = value;
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}
