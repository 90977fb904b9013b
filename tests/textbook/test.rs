use num_traits::{One, Zero};
use relp_num::RB;
use relp_num::RationalBig;

use simplex_tableau::{Constraint, Objective, SimplexOptions, SolveError, Solver, Term};
use simplex_tableau::algorithm::simplex::strategy::pivot_rule::FirstProfitable;
use simplex_tableau::algorithm::simplex::tableau::Tableau;

type T = RationalBig;

fn int(value: u32) -> T {
    (0..value).fold(T::zero(), |total, _| total + T::one())
}

fn solver(constraints: Vec<(Vec<(u32, &str)>, u32)>) -> Solver<T> {
    let mut solver = Solver::new();
    for (terms, bound) in constraints {
        let terms = terms.into_iter()
            .map(|(coefficient, label)| Term::with_coefficient(int(coefficient), label))
            .collect();
        solver.add_constraint(Constraint::new(terms, int(bound))).unwrap();
    }
    solver
}

fn objective(terms: Vec<(u32, &str)>) -> Objective<T> {
    Objective::new(terms.into_iter()
        .map(|(coefficient, label)| Term::with_coefficient(int(coefficient), label))
        .collect()
    )
}

fn production() -> Solver<T> {
    solver(vec![
        (vec![(1, "x"), (1, "y")], 12),
        (vec![(2, "x"), (1, "y")], 16),
    ])
}

/// maximize 5x + 4y + 3z s.t. 2x + 3y + z <= 5, 4x + y + 2z <= 11, 3x + 4y + 2z <= 8.
fn three_variables() -> (Solver<T>, Objective<T>) {
    let solver = solver(vec![
        (vec![(2, "x"), (3, "y"), (1, "z")], 5),
        (vec![(4, "x"), (1, "y"), (2, "z")], 11),
        (vec![(3, "x"), (4, "y"), (2, "z")], 8),
    ]);
    (solver, objective(vec![(5, "x"), (4, "y"), (3, "z")]))
}

#[test]
fn production_optimum() {
    let solution = production().maximize(&objective(vec![(40, "x"), (30, "y")])).unwrap();

    assert_eq!(solution.objective_value, RB!(400));
    assert_eq!(solution.solution_values, vec![
        ("x".to_string(), RB!(4)),
        ("y".to_string(), RB!(8)),
    ]);
    assert_eq!(
        solution.to_string(),
        "{\n\toptimum_variable_values: {\n\t\t{x = 4}\n\t\t{y = 8}\n\t}\n\toptimum_obj_func_value: 400\n}\n",
    );
}

#[test]
fn production_with_floats() {
    let mut solver = Solver::new();
    solver.add_constraint(Constraint::new(vec![Term::new("x"), Term::new("y")], 12f64)).unwrap();
    solver.add_constraint(Constraint::new(vec![Term::with_coefficient(2f64, "x"), Term::new("y")], 16f64)).unwrap();
    let objective = Objective::new(vec![
        Term::with_coefficient(40f64, "x"),
        Term::with_coefficient(30f64, "y"),
    ]);

    let solution = solver.maximize(&objective).unwrap();
    assert_eq!(solution.objective_value, 400f64);
    assert_eq!(solution.value_of("x"), Some(&4f64));
    assert_eq!(solution.value_of("y"), Some(&8f64));
}

#[test]
fn single_constraint() {
    let solution = solver(vec![(vec![(1, "x")], 5)])
        .maximize(&objective(vec![(3, "x")]))
        .unwrap();

    assert_eq!(solution.objective_value, RB!(15));
    assert_eq!(solution.value_of("x"), Some(&RB!(5)));
}

#[test]
fn three_variable_optimum() {
    let (solver, objective) = three_variables();
    let solution = solver.maximize(&objective).unwrap();

    assert_eq!(solution.objective_value, RB!(13));
    assert_eq!(solution.solution_values, vec![
        ("x".to_string(), RB!(2)),
        ("y".to_string(), RB!(0)),
        ("z".to_string(), RB!(1)),
    ]);

    let other = solver.maximize_with_rule::<FirstProfitable>(&objective).unwrap();
    assert_eq!(other.objective_value, RB!(13));
}

#[test]
fn exact_fractions() {
    let solution = solver(vec![
        (vec![(3, "x"), (1, "y")], 1),
        (vec![(1, "x"), (3, "y")], 1),
    ])
        .maximize(&objective(vec![(1, "x"), (1, "y")]))
        .unwrap();

    assert_eq!(solution.objective_value, RB!(1, 2));
    assert_eq!(solution.value_of("x"), Some(&RB!(1, 4)));
    assert_eq!(solution.value_of("y"), Some(&RB!(1, 4)));
}

#[test]
fn zero_objective() {
    let solution = production().maximize(&objective(vec![(0, "x"), (0, "y")])).unwrap();

    assert_eq!(solution.objective_value, RB!(0));
    assert_eq!(solution.solution_values, vec![
        ("x".to_string(), RB!(0)),
        ("y".to_string(), RB!(0)),
    ]);
}

#[test]
fn duplicate_objective_labels() {
    let solution = solver(vec![(vec![(1, "x")], 3)])
        .maximize(&objective(vec![(1, "x"), (1, "x")]))
        .unwrap();

    assert_eq!(solution.objective_value, RB!(6));
    assert_eq!(solution.solution_values, vec![("x".to_string(), RB!(3))]);
}

#[test]
fn tie_breaking_is_deterministic() {
    let solver = solver(vec![
        (vec![(1, "x")], 1),
        (vec![(1, "y")], 1),
        (vec![(1, "x"), (1, "y")], 2),
    ]);
    let objective = objective(vec![(1, "x"), (1, "y")]);

    let first = solver.maximize(&objective).unwrap();
    let second = solver.maximize(&objective).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.objective_value, RB!(2));
    assert_eq!(first.value_of("x"), Some(&RB!(1)));
    assert_eq!(first.value_of("y"), Some(&RB!(1)));
}

#[test]
fn degenerate_tied_ratio() {
    let solution = solver(vec![
        (vec![(1, "x"), (1, "y")], 4),
        (vec![(1, "x")], 0),
    ])
        .maximize(&objective(vec![(3, "x"), (2, "y")]))
        .unwrap();

    assert_eq!(solution.objective_value, RB!(8));
    assert_eq!(solution.value_of("x"), Some(&RB!(0)));
    assert_eq!(solution.value_of("y"), Some(&RB!(4)));
}

#[test]
fn invariants_hold_after_every_pivot() {
    let (solver, objective) = three_variables();
    let variables = solver.variable_index(&objective).unwrap();
    let mut tableau = Tableau::new(&variables, &objective, solver.constraints());

    let mut nr_pivots = 0;
    let mut value = tableau.objective_function_value();
    while !tableau.is_optimal() {
        tableau.iterate().unwrap();
        nr_pivots += 1;

        assert!(tableau.is_in_basic_solution_state());
        assert!(tableau.is_primal_feasible());
        assert!(tableau.objective_function_value() >= value);
        value = tableau.objective_function_value();
    }

    assert_eq!(nr_pivots, 2);
    assert_eq!(value, RB!(13));
}

#[test]
fn unbounded() {
    let result = solver(vec![(vec![(1, "x")], 1)])
        .maximize(&objective(vec![(1, "x"), (1, "y")]));
    assert_eq!(result, Err(SolveError::UnboundedObjective));
}

#[test]
fn malformed() {
    let mut solver = Solver::<T>::new();
    let result = solver.add_constraint(Constraint::new(vec![Term::new("x")], RB!(-4)));
    assert!(matches!(result, Err(SolveError::MalformedProblem(_))));

    let result = solver.add_constraint(Constraint::new(vec![Term::with_coefficient(RB!(-1), "x")], RB!(4)));
    assert!(matches!(result, Err(SolveError::MalformedProblem(_))));

    solver.add_constraint(Constraint::new(vec![Term::new("x")], RB!(4))).unwrap();
    let result = solver.maximize(&objective(vec![(1, "x"), (1, "S0")]));
    assert!(matches!(result, Err(SolveError::MalformedProblem(_))));
}

#[test]
fn no_constraints() {
    let result = Solver::<T>::new().maximize(&objective(vec![(1, "x")]));
    assert_eq!(result, Err(SolveError::NoConstraints));
}

#[test]
fn iteration_limit() {
    let (solver, objective) = three_variables();
    let mut limited = Solver::with_options(SimplexOptions { max_iterations: 1 });
    for constraint in solver.constraints() {
        let terms = constraint.terms().filter(|term| !term.is_slack()).cloned().collect();
        limited.add_constraint(Constraint::new(terms, constraint.bound().clone())).unwrap();
    }

    assert_eq!(limited.maximize(&objective), Err(SolveError::IterationLimit(1)));
}
