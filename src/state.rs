use ndarray::prelude::*;

use crate::grid::Grid;

/// Cursor shared between the driver and a stepper.
///
/// The driver moves `step_index` and `eq_index`; everything else is fixed for
/// the duration of an integration. Steppers only read it.
#[derive(Debug)]
pub struct IterationState<'a, E> {
    /// Step size.
    pub(crate) dt: f64,
    /// Index of the equation whose next value is being computed.
    pub(crate) eq_index: usize,
    pub(crate) equations: &'a [E],
    /// Index of the row the next value is computed from.
    pub(crate) step_index: usize,
    /// Time grid, length `steps + 1`.
    pub(crate) t: Array1<f64>,
    /// Solution grid, shape `(steps + 1, equations.len())`.
    pub(crate) y: Grid,
}

impl<'a, E> IterationState<'a, E> {
    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn eq_index(&self) -> usize {
        self.eq_index
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn equations(&self) -> &'a [E] {
        self.equations
    }

    /// The equation selected by `eq_index`.
    pub fn equation(&self) -> &'a E {
        &self.equations[self.eq_index]
    }

    /// Time at `step_index`.
    pub fn time(&self) -> f64 {
        self.t[self.step_index]
    }

    /// State row at `step_index`.
    ///
    /// This row is completely written before any value of the next row is
    /// computed.
    pub fn current_row(&self) -> ArrayView1<'_, f64> {
        self.y.row(self.step_index)
    }

    pub fn time_grid(&self) -> ArrayView1<'_, f64> {
        self.t.view()
    }

    pub fn solution_grid(&self) -> &Grid {
        &self.y
    }
}
