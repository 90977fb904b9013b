//! A workshop makes tables (`x`, profit 40) and chairs (`y`, profit 30). Both take one unit of
//! wood, of which there are 12. A table takes two hours of labour and a chair one, with 16 hours
//! available.
//!
//! Run with `RUST_LOG=trace` to see the tableau after every pivot.
use simplex_tableau::{Constraint, Objective, SolveResult, Solver, Term};

fn main() -> SolveResult<()> {
    env_logger::init();

    let mut solver = Solver::new();
    solver.add_constraint(Constraint::new(vec![Term::new("x"), Term::new("y")], 12f64))?;
    solver.add_constraint(Constraint::new(
        vec![Term::with_coefficient(2f64, "x"), Term::new("y")],
        16f64,
    ))?;

    let objective = Objective::new(vec![
        Term::with_coefficient(40f64, "x"),
        Term::with_coefficient(30f64, "y"),
    ]);
    let solution = solver.maximize(&objective)?;
    print!("{}", solution);

    Ok(())
}
