//! Measures how the L2 error on the unit circle shrinks as the step size is
//! halved, and writes one `errors_<method>.txt` table per scheme.
//!
//! An optional TOML file selects the schemes and the range of step counts:
//!
//! ```sh
//! cargo run -p planar-demos --release --example convergence -- study.toml
//! ```

use std::{env, path::PathBuf};

use planar_analysis::{convergence, systems::Circle};
use planar_demos::DemoConfig;
use planar_solvers::Method;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args_os().nth(1).map(PathBuf::from);
    let config = DemoConfig::load(path.as_deref())?;

    for key in &config.methods {
        let method: Method = key.parse()?;
        let study = convergence::run(method, &Circle, &config.study)?;

        let output = config.output_path(&format!("errors_{}.txt", method.key()));
        study.write_table(&output)?;

        println!("{method} (order {}) -> {}", study.order(), output.display());
        for (row, observed) in study.rows().iter().skip(1).zip(study.observed_orders()) {
            println!(
                "  h = {:.3e}  error = {:.3e}  observed order {observed:.2}",
                row.step_size.abs(),
                row.error,
            );
        }
    }

    Ok(())
}
