use ndarray::prelude::*;

use ndarray_fixed_step::{Grid, GridError};

fn counting(rows: usize, columns: usize) -> Grid {
    let data = Array::range(0., (rows * columns) as f64, 1.)
        .into_shape((rows, columns))
        .unwrap();
    Grid::from_array(data)
}

#[test]
fn new_is_zero_filled() {
    let grid = Grid::new(3, 2);
    assert_eq!(grid.shape(), (3, 2));
    assert_eq!(grid.rows(), 3);
    assert_eq!(grid.columns(), 2);
    assert!(grid.view().iter().all(|&x| x == 0.));
}

#[test]
fn rows_are_row_major() {
    let grid = counting(2, 3);
    assert_eq!(grid.row(0), aview1(&[0., 1., 2.]));
    assert_eq!(grid.row(1), aview1(&[3., 4., 5.]));
    assert_eq!(grid[(1, 0)], 3.);
}

#[test]
fn row_views_alias_storage() {
    let mut grid = Grid::new(3, 4);
    grid.row_mut(1)[2] = 5.;
    grid.row_mut(2).fill(-1.);
    assert_eq!(grid[(1, 2)], 5.);
    assert_eq!(grid.view()[[1, 2]], 5.);
    assert_eq!(grid.row(2), aview1(&[-1., -1., -1., -1.]));

    grid[(0, 3)] = 7.;
    assert_eq!(grid.row(0)[3], 7.);
}

#[test]
fn entries_in_row_order() {
    let grid = counting(4, 2);
    let entries: Vec<_> = grid.entries().collect();
    assert_eq!(entries.len(), 4);
    for (i, (index, row)) in entries.into_iter().enumerate() {
        assert_eq!(index, i);
        assert_eq!(row, grid.row(i));
    }

    let mut seen = 0;
    for (index, row) in &grid {
        assert_eq!(row.len(), 2);
        assert_eq!(row[0], (2 * index) as f64);
        seen += 1;
    }
    assert_eq!(seen, 4);
    // Each call starts a new pass.
    assert_eq!(grid.entries().count(), 4);
}

#[test]
fn from_array_keeps_logical_order() {
    let grid = Grid::from_array(array![[1., 2.], [3., 4.]].reversed_axes());
    assert_eq!(grid.row(0), aview1(&[1., 3.]));
    assert_eq!(grid.row(1), aview1(&[2., 4.]));
}

#[test]
fn add_shape_mismatch() {
    let mut a = Grid::new(2, 3);
    let b = Grid::new(3, 2);
    let err = a.add(&b).unwrap_err();
    assert_eq!(
        err,
        GridError::DimensionMismatch {
            left: (2, 3),
            right: (3, 2),
        }
    );
    let message = err.to_string();
    assert!(message.contains("(2, 3)"));
    assert!(message.contains("(3, 2)"));
    // The left operand is untouched.
    assert_eq!(a, Grid::new(2, 3));
}

#[test]
fn add_in_place_and_chain() {
    let mut a = counting(2, 3);
    let b = Grid::from_array(Array2::from_elem((2, 3), 10.));
    a.add(&b).unwrap().add(&b).unwrap();
    assert_eq!(a.into_array(), array![[20., 21., 22.], [23., 24., 25.]]);
}
