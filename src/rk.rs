//! Explicit fixed-step steppers.

use ndarray::prelude::*;

use crate::equation::Equation;
use crate::state::IterationState;

/// Rule that computes a single cell of the solution grid.
///
/// Given the cursor at `(step_index, eq_index)`, `next_value` returns the
/// value of variable `eq_index` at `step_index + 1`. It must read state only
/// from the row at `step_index`.
pub trait Stepper {
    /// Order of the method.
    const ORDER: usize;

    /// Number of equation evaluations per cell.
    const EVALUATIONS: usize;

    fn next_value<E: Equation>(&self, state: &IterationState<'_, E>) -> f64;
}

/// Forward Euler method.
///
/// `y[n] + dt * f(t, y)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Euler;

impl Stepper for Euler {
    const ORDER: usize = 1;

    const EVALUATIONS: usize = 1;

    fn next_value<E: Equation>(&self, state: &IterationState<'_, E>) -> f64 {
        let n = state.eq_index();
        let t = state.time();
        let y = state.current_row();
        y[n] + state.dt() * state.equation().derivative(t, y)
    }
}

/// Classical Runge–Kutta method of order 4.
///
/// The probe states are formed by adding the slope of the selected equation
/// to *every* component of the current row:
///
/// ```text
/// k1 = f(t,        y)
/// k2 = f(t + dt/2, y + dt/2 * k1)
/// k3 = f(t + dt/2, y + dt/2 * k2)
/// k4 = f(t + dt,   y + dt   * k3)
/// y[n] + 1/6 * (k1 + 2 k2 + 2 k3 + k4) * dt
/// ```
///
/// For a single equation this is the textbook method. For coupled systems it
/// is not, since every component is shifted by the same scalar slope, and the
/// accuracy drops accordingly. Stored trajectories depend on this exact
/// formula, so it must not be replaced by the per-component variant.
#[derive(Clone, Copy, Debug, Default)]
pub struct RungeKutta4;

/// `y + h * k`, applied to every component.
fn probe(y: ArrayView1<'_, f64>, h: f64, k: f64) -> Array1<f64> {
    y.mapv(|y| y + h * k)
}

impl Stepper for RungeKutta4 {
    const ORDER: usize = 4;

    const EVALUATIONS: usize = 4;

    fn next_value<E: Equation>(&self, state: &IterationState<'_, E>) -> f64 {
        let dt = state.dt();
        let dt2 = dt / 2.;
        let n = state.eq_index();
        let eq = state.equation();
        let t = state.time();
        let y = state.current_row();

        let k1 = eq.derivative(t, y);
        let k2 = eq.derivative(t + dt2, probe(y, dt2, k1).view());
        let k3 = eq.derivative(t + dt2, probe(y, dt2, k2).view());
        let k4 = eq.derivative(t + dt, probe(y, dt, k3).view());
        y[n] + (1. / 6.) * (k1 + 2. * k2 + 2. * k3 + k4) * dt
    }
}
