//! Row-major storage for trajectories.

use ndarray::iter::AxisIter;
use ndarray::prelude::*;
use std::iter::Enumerate;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The operands of an elementwise operation have different shapes.
    #[error("dimensions of grids do not match, got {left:?} and {right:?}")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
}

/// Dense two-dimensional buffer of `f64`, one contiguous allocation in
/// row-major order.
///
/// Rows are handed out as views into the buffer, so writing through a row
/// view is visible through every other access to the same element.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    data: Array2<f64>,
}

impl Grid {
    /// Creates a zero-filled grid with shape `(rows, columns)`.
    pub fn new(rows: usize, columns: usize) -> Grid {
        Grid {
            data: Array2::zeros((rows, columns)),
        }
    }

    pub fn from_array(data: Array2<f64>) -> Grid {
        // Keep the standard layout so that rows are contiguous slices.
        let data = if data.is_standard_layout() {
            data
        } else {
            data.as_standard_layout().into_owned()
        };
        Grid { data }
    }

    /// Returns `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn columns(&self) -> usize {
        self.data.ncols()
    }

    /// View of row `index`.
    ///
    /// **Panics** if `index` is out of bounds.
    pub fn row(&self, index: usize) -> ArrayView1<'_, f64> {
        self.data.row(index)
    }

    /// Mutable view of row `index`.
    ///
    /// **Panics** if `index` is out of bounds.
    pub fn row_mut(&mut self, index: usize) -> ArrayViewMut1<'_, f64> {
        self.data.row_mut(index)
    }

    /// Iterates over `(row_index, row_view)` pairs in increasing row order.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            inner: self.data.outer_iter().enumerate(),
        }
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    pub fn into_array(self) -> Array2<f64> {
        self.data
    }

    /// Adds `other` to `self` elementwise, in place, and returns `self` for
    /// chaining.
    pub fn add(&mut self, other: &Grid) -> Result<&mut Grid, GridError> {
        if self.shape() != other.shape() {
            return Err(GridError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        self.data += &other.data;
        Ok(self)
    }
}

impl std::ops::Index<(usize, usize)> for Grid {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &f64 {
        &self.data[index]
    }
}

impl std::ops::IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut f64 {
        &mut self.data[index]
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = (usize, ArrayView1<'a, f64>);
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Entries<'a> {
        self.entries()
    }
}

/// Iterator returned by [`Grid::entries`].
pub struct Entries<'a> {
    inner: Enumerate<AxisIter<'a, f64, Ix1>>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (usize, ArrayView1<'a, f64>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> ExactSizeIterator for Entries<'a> {}
