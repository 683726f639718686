//! Finds the real root of f(x) = x³ - x² - x - 1 and prints the run report
//! as JSON.

use parafind::report::Report;
use parafind::Muller;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let solver = Muller::new(50, 5, 1e-6);
    let result = solver.solve(&|x: f64| x.powi(3) - x.powi(2) - x - 1.0, [0.0, 1.0, 2.0])?;

    let report = Report::new(&result);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
