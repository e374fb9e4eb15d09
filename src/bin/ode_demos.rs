use clap::{Parser, ValueEnum};
use ndarray::prelude::*;
use std::error::Error;
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;

use ndarray_fixed_step::output::save_trajectory;
use ndarray_fixed_step::{euler, runge_kutta4, EquationFn};

#[derive(Debug, Parser)]
#[command(version, about = "Integrates the demo ODE systems and writes their trajectories", long_about = None)]
struct Cli {
    /// Directory the trajectory files are written to
    #[arg(short, long, default_value = ".data")]
    output: PathBuf,
    /// Demos to run; all of them if none is given
    #[arg(value_enum)]
    demos: Vec<Demo>,
    /// Log integration progress
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Demo {
    All,
    ExponentialDecay,
    HarmonicOscillator,
    ExbDrift,
}

fn decay(_t: f64, y: ArrayView1<f64>) -> f64 {
    -y[0]
}

/// Exponential decay `y' = -y`, forward Euler.
fn exponential_decay(output: &Path) -> Result<(), Box<dyn Error>> {
    let eqs: [EquationFn; 1] = [decay];
    let y0 = array![1.];
    let (t_end, steps) = (4., 200);
    let solution = euler(&eqs, y0.view(), t_end, steps);

    let header = [
        "Exponential decay".to_string(),
        String::new(),
        "Method: Forward euler".to_string(),
        "  start: t = 0".to_string(),
        format!("  end: t = {}", t_end),
        format!("  steps: {}", steps),
        "Equation: y' = -y".to_string(),
        format!("Initial condition: y(t = 0) = {}", y0[0]),
    ];
    save_trajectory(output.join("exponential_decay_euler.csv"), &header, &solution)?;
    Ok(())
}

/// Harmonic oscillator `x'' = -x` as the system `y1' = y2, y2' = -y1`,
/// classical Runge–Kutta.
fn harmonic_oscillator(output: &Path) -> Result<(), Box<dyn Error>> {
    let eqs: [EquationFn; 2] = [|_t, y| y[1], |_t, y| -y[0]];
    let y0 = array![0., 1.];
    let (t_end, steps) = (4., 1_000);
    let solution = runge_kutta4(&eqs, y0.view(), t_end, steps);

    let header = [
        "Harmonic oscillator".to_string(),
        String::new(),
        "Method: Runge-Kutta (4th Order)".to_string(),
        "  start: t = 0".to_string(),
        format!("  end: t = {}", t_end),
        format!("  steps: {}", steps),
        "Equation: x'' = -x".to_string(),
        "Initial conditions:".to_string(),
        format!("  x(t = 0) = {}", y0[0]),
        format!("  x'(t = 0) = {}", y0[1]),
    ];
    save_trajectory(output.join("harmonic_oscillator_rk4.csv"), &header, &solution)?;
    Ok(())
}

/// E x B drift of a positively charged particle in homogeneous fields
/// `E || x`, `B || z`, in units of the cyclotron frequency.
///
/// With `z1 = x, z2 = x', z3 = y, z4 = y'`:
/// `z1' = z2, z2' = 1 + z4, z3' = z4, z4' = -z2`.
fn exb_drift(output: &Path) -> Result<(), Box<dyn Error>> {
    let eqs: [EquationFn; 4] = [
        |_t, z| z[1],
        |_t, z| 1. + z[3],
        |_t, z| z[3],
        |_t, z| -z[1],
    ];
    let y0 = array![0., 1., 0., 1.];
    let (t_end, steps) = (4., 40_000);
    let solution = runge_kutta4(&eqs, y0.view(), t_end, steps);

    let mut header = vec![
        "ExB-Drift of a particle".to_string(),
        String::new(),
        "Method: Runge-Kutta (4th Order)".to_string(),
        "  start: t = 0".to_string(),
        format!("  end: t = {}", t_end),
        format!("  steps: {}", steps),
        "Equations:".to_string(),
        "  z1' = z2".to_string(),
        "  z2' = 1 + z4".to_string(),
        "  z3' = z4".to_string(),
        "  z4' = -z2".to_string(),
        "Initial conditions:".to_string(),
    ];
    header.extend(
        y0.iter()
            .enumerate()
            .map(|(i, z)| format!("  z{}(t = 0) = {}", i + 1, z)),
    );
    save_trajectory(output.join("E-B-drift_rk4.csv"), &header, &solution)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let all = cli.demos.is_empty() || cli.demos.contains(&Demo::All);
    let run = |demo| all || cli.demos.contains(&demo);

    if run(Demo::ExponentialDecay) {
        exponential_decay(&cli.output)?;
    }
    if run(Demo::HarmonicOscillator) {
        harmonic_oscillator(&cli.output)?;
    }
    if run(Demo::ExbDrift) {
        exb_drift(&cli.output)?;
    }
    Ok(())
}
