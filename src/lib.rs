pub mod equation;
pub mod fixed;
pub mod grid;
pub mod output;
pub mod rk;
pub mod state;

use ndarray::prelude::*;

pub use equation::{BoxedEquation, Equation, EquationFn};
pub use fixed::{CreateFixedStepError, FixedStep, Solution, StepError};
pub use grid::{Grid, GridError};
pub use rk::{Euler, RungeKutta4, Stepper};
pub use state::IterationState;

pub trait OdeIntegrate {
    type Error: std::error::Error;

    /// Returns the number of elements in the state.
    fn len(&self) -> usize;
    /// Perform one step.
    fn step(&mut self) -> Result<(), Self::Error>;
    /// Current time.
    fn time(&self) -> f64;
    /// The ending time.
    fn time_bound(&self) -> f64;
    /// Current state.
    fn state(&self) -> ArrayView1<'_, f64>;
    /// Returns `true` if the integration has reached `time_bound`.
    fn finished(&self) -> bool {
        self.time() == self.time_bound()
    }
    /// Integrate until reaching `time_bound`.
    fn run_to_bound(&mut self) -> Result<(), Self::Error> {
        while !self.finished() {
            self.step()?;
        }
        Ok(())
    }
}

/// Integrates `equations` from `t = 0` to `horizon` in `steps` equal steps.
///
/// Row 0 of the returned grid is `y0`; row `i + 1` is computed from row `i`
/// by calling `stepper` once per equation. Preconditions are not checked:
/// `steps` must be at least 1 and `y0` must hold one value per equation (see
/// [`FixedStep::checked`] for a validating alternative).
pub fn integrate<E, S>(
    equations: &[E],
    y0: ArrayView1<'_, f64>,
    horizon: f64,
    steps: usize,
    stepper: S,
) -> Solution
where
    E: Equation,
    S: Stepper,
{
    let mut integrator = FixedStep::new(equations, y0, horizon, steps, stepper);
    while !integrator.finished() {
        integrator.advance();
    }
    integrator.into_solution()
}

/// [`integrate`] with the forward Euler method.
pub fn euler<E: Equation>(
    equations: &[E],
    y0: ArrayView1<'_, f64>,
    horizon: f64,
    steps: usize,
) -> Solution {
    integrate(equations, y0, horizon, steps, Euler)
}

/// [`integrate`] with the classical Runge–Kutta method.
pub fn runge_kutta4<E: Equation>(
    equations: &[E],
    y0: ArrayView1<'_, f64>,
    horizon: f64,
    steps: usize,
) -> Solution {
    integrate(equations, y0, horizon, steps, RungeKutta4)
}
