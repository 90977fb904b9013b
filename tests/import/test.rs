use relp_num::RB;
use relp_num::RationalBig;

use simplex_tableau::{SimplexOptions, SolveError};
use simplex_tableau::io::error::{ImportError, ParseError};
use simplex_tableau::io::import;
use simplex_tableau::io::lp::LinearProgram;

use super::get_test_file_path;

type T = RationalBig;

fn import_problem(name: &str) -> Result<LinearProgram<T>, ImportError> {
    import(&get_test_file_path(name))
}

#[test]
fn production() {
    let program = import_problem("production").unwrap();
    assert_eq!(program.constraints().len(), 2);

    let solver = program.solver(SimplexOptions::default()).unwrap();
    let solution = solver.maximize(program.objective()).unwrap();
    assert_eq!(solution.objective_value, RB!(400));
    assert_eq!(solution.value_of("x"), Some(&RB!(4)));
    assert_eq!(solution.value_of("y"), Some(&RB!(8)));
}

#[test]
fn production_with_floats() {
    let program = import::<f64>(&get_test_file_path("production")).unwrap();
    let solution = program.solver(SimplexOptions::default()).unwrap()
        .maximize(program.objective())
        .unwrap();
    assert_eq!(solution.objective_value, 400f64);
}

#[test]
fn diet() {
    let program = import_problem("diet").unwrap();
    let solution = program.solver(SimplexOptions::default()).unwrap()
        .maximize(program.objective())
        .unwrap();
    assert_eq!(solution.objective_value, RB!(1, 2));
    assert_eq!(solution.value_of("x"), Some(&RB!(1, 4)));
    assert_eq!(solution.value_of("y"), Some(&RB!(1, 4)));
}

#[test]
fn unbounded() {
    let program = import_problem("unbounded").unwrap();
    let result = program.solver(SimplexOptions::default()).unwrap()
        .maximize(program.objective());
    assert_eq!(result, Err(SolveError::UnboundedObjective));
}

#[test]
fn negative() {
    let program = import_problem("negative").unwrap();
    let result = program.solver(SimplexOptions::default());
    assert!(matches!(result, Err(SolveError::MalformedProblem(_))));
}

#[test]
fn no_objective() {
    let result = import_problem("no_objective");
    assert!(matches!(result, Err(ImportError::Parse(ParseError::Program(_)))));
}

#[test]
fn missing() {
    let result = import_problem("does_not_exist");
    assert!(matches!(result, Err(ImportError::IO(_))));
}
