//! Integrates the Van der Pol oscillator with RK4 and writes the trace to
//! `rk4_vanderpol.txt`.
//!
//! ```sh
//! cargo run -p planar-demos --example van_der_pol
//! ```

use planar_analysis::systems::VanDerPol;
use planar_solvers::Rk4Solver;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let system = VanDerPol::default();

    let mut solver = Rk4Solver::default();
    solver.set_initial_values(2.0, 0.0);
    solver.set_grid_by_step(0.0, 0.001, 100.0)?;
    solver.set_rhs(&system);
    solver.solve()?;
    solver.dump_to_file("rk4_vanderpol.txt")?;

    let x = solver.x_trace()?;
    let (lo, hi) = x
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    println!(
        "mu = {}: {} samples, x in [{lo:.4}, {hi:.4}] -> rk4_vanderpol.txt",
        system.mu,
        x.len(),
    );

    Ok(())
}
