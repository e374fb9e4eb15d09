//! Right-hand sides of scalar ODEs.

use ndarray::prelude::*;

/// One equation of a coupled first-order system.
///
/// `derivative(t, y)` receives the time and the whole state row (one value per
/// equation of the system, in system order) and returns the derivative of the
/// variable owned by this equation. Implementations must not rely on being
/// called only on grid points; Runge–Kutta steppers evaluate at intermediate
/// times and probe states.
pub trait Equation {
    fn derivative(&self, t: f64, y: ArrayView1<'_, f64>) -> f64;
}

impl<F> Equation for F
where
    F: for<'y> Fn(f64, ArrayView1<'y, f64>) -> f64,
{
    fn derivative(&self, t: f64, y: ArrayView1<'_, f64>) -> f64 {
        self(t, y)
    }
}

/// Plain function equation. Distinct functions coerce to this type, so they
/// can share one system slice.
pub type EquationFn = for<'y> fn(f64, ArrayView1<'y, f64>) -> f64;

/// Boxed equation, for systems built from capturing closures.
pub type BoxedEquation = Box<dyn for<'y> Fn(f64, ArrayView1<'y, f64>) -> f64>;
