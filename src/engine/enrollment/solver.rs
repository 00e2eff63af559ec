use super::model::AssignmentModel;
use good_lp::{constraint, variable, variables, Expression, Solution, SolverModel, Variable};
use std::fmt;

/// Terminal state of one solver run. Optimal and Feasible are both
/// usable; everything else activates the greedy fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveStatus {
    Optimal,
    Feasible,
    Infeasible,
    Unbounded,
    Failed(String),
}

impl SolveStatus {
    pub fn is_usable(&self) -> bool {
        matches!(self, SolveStatus::Optimal | SolveStatus::Feasible)
    }
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveStatus::Optimal => f.write_str("optimal"),
            SolveStatus::Feasible => f.write_str("feasible"),
            SolveStatus::Infeasible => f.write_str("infeasible"),
            SolveStatus::Unbounded => f.write_str("unbounded"),
            SolveStatus::Failed(message) => write!(f, "failed: {message}"),
        }
    }
}

/// What an adapter hands back: a status, the objective it reached, and one
/// value per model variable (empty unless the status is usable).
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub status: SolveStatus,
    pub objective: f64,
    pub values: Vec<f64>,
}

impl SolveOutcome {
    pub fn unusable(status: SolveStatus) -> Self {
        Self {
            status,
            objective: 0.0,
            values: Vec::new(),
        }
    }
}

/// Thin adapter boundary around a MIP backend, so tests can drive the
/// engine with a scripted stub.
pub trait MipSolver {
    fn solve(&self, model: &AssignmentModel) -> SolveOutcome;
}

/// Production adapter: HiGHS through good_lp. Time limits and tolerances
/// stay at the solver's defaults.
#[derive(Debug, Default)]
pub struct HighsSolver;

impl MipSolver for HighsSolver {
    fn solve(&self, model: &AssignmentModel) -> SolveOutcome {
        if model.vars.is_empty() {
            // HiGHS rejects an empty column set; nothing to decide anyway
            return SolveOutcome {
                status: SolveStatus::Optimal,
                objective: 0.0,
                values: Vec::new(),
            };
        }

        let mut vars = variables!();
        let lp_vars: Vec<Variable> = model
            .vars
            .iter()
            .map(|_| vars.add(variable().binary()))
            .collect();

        let mut objective = Expression::default();
        for (candidate, var) in model.vars.iter().zip(&lp_vars) {
            objective += candidate.weight * *var;
        }

        let mut problem = vars
            .maximise(objective)
            .using(good_lp::solvers::highs::highs);

        for row in &model.rows {
            let sum: Expression = row.vars.iter().map(|&ix| Expression::from(lp_vars[ix])).sum();
            problem = problem.with(constraint!(sum <= row.upper));
        }

        match problem.solve() {
            Ok(solution) => {
                let values: Vec<f64> = lp_vars.iter().map(|v| solution.value(*v)).collect();
                let objective = model.objective_of(&values);
                SolveOutcome {
                    status: SolveStatus::Optimal,
                    objective,
                    values,
                }
            }
            Err(good_lp::ResolutionError::Infeasible) => {
                SolveOutcome::unusable(SolveStatus::Infeasible)
            }
            Err(good_lp::ResolutionError::Unbounded) => {
                SolveOutcome::unusable(SolveStatus::Unbounded)
            }
            Err(other) => SolveOutcome::unusable(SolveStatus::Failed(other.to_string())),
        }
    }
}
