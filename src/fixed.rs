//! Fixed-step integration driver.

use log::{debug, trace};
use ndarray::prelude::*;
use thiserror::Error;

use crate::equation::Equation;
use crate::grid::Grid;
use crate::rk::Stepper;
use crate::state::IterationState;
use crate::OdeIntegrate;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CreateFixedStepError {
    #[error("step count must be at least 1")]
    ZeroSteps,
    #[error("horizon {0} is not finite")]
    HorizonNotFinite(f64),
    /// The initial condition does not have one value per equation.
    #[error("initial condition has {initial} values but the system has {equations} equations")]
    UnequalLengths { initial: usize, equations: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StepError {
    #[error("all {steps} steps have already been taken")]
    Finished { steps: usize },
}

/// Time grid and trajectory produced by an integration.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// Time grid, length `steps + 1`.
    pub t: Array1<f64>,
    /// Row `i` is the state at `t[i]`.
    pub y: Grid,
}

impl Solution {
    /// Number of time points.
    pub fn len(&self) -> usize {
        self.t.len()
    }

    /// Iterates over `(t[i], y[i])`.
    pub fn iter(&self) -> impl Iterator<Item = (f64, ArrayView1<'_, f64>)> + '_ {
        self.y.entries().map(move |(i, row)| (self.t[i], row))
    }
}

/// Fixed-step integrator for a system of scalar equations.
///
/// Each call to `step` advances time by `dt = horizon / steps` and fills the
/// next row of the solution grid, one equation at a time, with the value
/// computed by the stepper `S`. All values of a row are computed from the
/// previous, complete row.
pub struct FixedStep<'a, E, S>
where
    E: Equation,
    S: Stepper,
{
    state: IterationState<'a, E>,
    stepper: S,
    /// Total number of steps.
    steps: usize,
    horizon: f64,
}

impl<'a, E, S> FixedStep<'a, E, S>
where
    E: Equation,
    S: Stepper,
{
    /// Creates a new integrator starting from `y0` at `t = 0`.
    ///
    /// No argument checking is performed. `steps == 0` produces a non-finite
    /// `dt` and a grid holding only the initial row.
    ///
    /// **Panics** if `y0` cannot be assigned to a row of length
    /// `equations.len()`.
    pub fn new(
        equations: &'a [E],
        y0: ArrayView1<'_, f64>,
        horizon: f64,
        steps: usize,
        stepper: S,
    ) -> FixedStep<'a, E, S> {
        let dt = horizon / steps as f64;
        let t = Array1::zeros(steps + 1);
        let mut y = Grid::new(steps + 1, equations.len());
        y.row_mut(0).assign(&y0);

        debug!(
            "integrating {} equations to t = {} in {} steps (dt = {}, {} evaluations per cell)",
            equations.len(),
            horizon,
            steps,
            dt,
            S::EVALUATIONS,
        );

        FixedStep {
            state: IterationState {
                dt,
                eq_index: 0,
                equations,
                step_index: 0,
                t,
                y,
            },
            stepper,
            steps,
            horizon,
        }
    }

    /// Like `new`, but rejects arguments that would produce undefined results.
    pub fn checked(
        equations: &'a [E],
        y0: ArrayView1<'_, f64>,
        horizon: f64,
        steps: usize,
        stepper: S,
    ) -> Result<FixedStep<'a, E, S>, CreateFixedStepError> {
        if steps == 0 {
            return Err(CreateFixedStepError::ZeroSteps);
        }
        if !horizon.is_finite() {
            return Err(CreateFixedStepError::HorizonNotFinite(horizon));
        }
        if y0.len() != equations.len() {
            return Err(CreateFixedStepError::UnequalLengths {
                initial: y0.len(),
                equations: equations.len(),
            });
        }
        Ok(FixedStep::new(equations, y0, horizon, steps, stepper))
    }

    pub fn dt(&self) -> f64 {
        self.state.dt
    }

    /// Total number of steps.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Number of steps taken so far.
    pub fn step_index(&self) -> usize {
        self.state.step_index
    }

    pub fn iteration_state(&self) -> &IterationState<'a, E> {
        &self.state
    }

    pub fn into_solution(self) -> Solution {
        Solution {
            t: self.state.t,
            y: self.state.y,
        }
    }

    /// Fills row `step_index + 1`. The caller ensures it exists.
    pub(crate) fn advance(&mut self) {
        let k = self.state.step_index;
        self.state.t[k + 1] = self.state.t[k] + self.state.dt;
        for n in 0..self.state.equations.len() {
            self.state.eq_index = n;
            let next = self.stepper.next_value(&self.state);
            self.state.y[(k + 1, n)] = next;
        }
        self.state.step_index = k + 1;

        trace!("step {} done, t = {}", k + 1, self.state.t[k + 1]);
        if self.state.step_index == self.steps {
            debug!("integration finished at t = {}", self.state.t[k + 1]);
        }
    }
}

impl<'a, E, S> OdeIntegrate for FixedStep<'a, E, S>
where
    E: Equation,
    S: Stepper,
{
    type Error = StepError;

    fn len(&self) -> usize {
        self.state.equations.len()
    }

    fn step(&mut self) -> Result<(), StepError> {
        if self.finished() {
            return Err(StepError::Finished { steps: self.steps });
        }
        self.advance();
        Ok(())
    }

    fn time(&self) -> f64 {
        self.state.time()
    }

    fn time_bound(&self) -> f64 {
        self.horizon
    }

    fn state(&self) -> ArrayView1<'_, f64> {
        self.state.current_row()
    }

    /// Time accumulates by repeated addition of `dt`, so it is compared by
    /// step count rather than against `time_bound`.
    fn finished(&self) -> bool {
        self.state.step_index >= self.steps
    }
}
