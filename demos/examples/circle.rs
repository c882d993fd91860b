//! Integrates one circuit of the unit circle with every scheme and writes
//! each trace to a tab-separated file.
//!
//! ```sh
//! cargo run -p planar-demos --example circle
//! ```

use std::f64::consts::TAU;

use planar_analysis::{
    l2_error,
    systems::{Circle, ExactSolution},
};
use planar_core::Pair;
use planar_solvers::{Method, OdeSolver};

const STEPS: usize = 100;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let initial = Pair::new(1.0, 0.0);

    for method in Method::ALL {
        let mut solver = OdeSolver::new(method);
        solver.set_initial_values(initial.x, initial.y);
        solver.set_grid_by_count(0.0, STEPS, TAU)?;
        solver.set_rhs(&Circle);
        solver.solve()?;

        let path = format!("{}_solver_dump.txt", method.key());
        solver.dump_to_file(&path)?;

        let error = l2_error(solver.samples()?, |t| Circle.exact(initial, 0.0, t));
        let end = solver.trace().last().map_or(initial, |sample| sample.state);
        println!(
            "{method:>14}: radius {:.6} after one turn, L2 error {error:.3e} -> {path}",
            end.norm(),
        );
    }

    Ok(())
}
