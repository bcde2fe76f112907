//! good_lpを使って[`LinearProblem`]を解くアダプター
//!
//! バックエンドはgood_lpの`Solver`なら何でもよい。
//! 純Rustで依存の少ない`microlp`を標準で有効にしている。
//!
//! ```no_run
//! use good_lp::microlp;
//! use lp_graph_matching::lp::good_lp_solver::GoodLpSolver;
//!
//! let solver = GoodLpSolver::new(microlp);
//! ```

use super::{Domain, LinearProblem, LpSolver, Relation, SolverOutput, TerminationStatus};
use good_lp::{Expression, ResolutionError, Solution, SolverModel, Variable, variable, variables};
use log::debug;

/// good_lpのバックエンドで解くソルバー
///
/// 使うバックエンドは`GoodLpSolver::new(microlp)`のように値で渡す。
/// `highs`や`coin_cbc`のfeatureを有効にすれば、そのバックエンドも同じように渡せる。
#[derive(Clone, Copy)]
pub struct GoodLpSolver<S> {
    backend: S,
}

impl<S> GoodLpSolver<S>
where
    S: good_lp::Solver + Clone,
{
    pub fn new(backend: S) -> Self {
        Self { backend }
    }
}

impl<S> LpSolver for GoodLpSolver<S>
where
    S: good_lp::Solver + Clone,
    S::Model: SolverModel<Error = ResolutionError>,
{
    fn solve(&self, problem: &LinearProblem) -> SolverOutput {
        //
        // 変数定義
        //
        let mut vars = variables!();
        let handles: Vec<Variable> = problem
            .variables()
            .iter()
            .map(|spec| {
                let mut definition = variable().min(spec.lower_bound);
                if let Some(upper_bound) = spec.upper_bound {
                    definition = definition.max(upper_bound);
                }
                if spec.domain == Domain::Integer {
                    definition = definition.integer();
                }
                vars.add(definition)
            })
            .collect();

        //
        // 目的関数
        //
        let mut objective = Expression::with_capacity(problem.objective().len());
        for &(index, coefficient) in problem.objective() {
            objective.add_mul(coefficient, handles[index]);
        }
        let mut model = vars.maximise(objective).using(self.backend.clone());

        //
        // 制約条件
        //
        for constraint in problem.constraints() {
            let mut lhs = Expression::with_capacity(constraint.terms.len());
            for &(index, coefficient) in &constraint.terms {
                lhs.add_mul(coefficient, handles[index]);
            }
            model = model.with(match constraint.relation {
                Relation::LessOrEqual => lhs.leq(constraint.rhs),
                Relation::Equal => lhs.eq(constraint.rhs),
            });
        }

        // 解く
        let output = match model.solve() {
            Ok(solution) => {
                let values: Vec<f64> = handles.iter().map(|&v| solution.value(v)).collect();
                let objective_value = problem.evaluate_objective(&values);
                SolverOutput::optimal(values, objective_value)
            }
            Err(ResolutionError::Infeasible) => {
                SolverOutput::without_solution(TerminationStatus::Infeasible)
            }
            Err(ResolutionError::Unbounded) => {
                SolverOutput::without_solution(TerminationStatus::Unbounded)
            }
            Err(error) => {
                SolverOutput::without_solution(TerminationStatus::Failed(error.to_string()))
            }
        };
        debug!(
            "good_lp finished with status {} ({} variables, {} constraints)",
            output.status,
            handles.len(),
            problem.constraints().len()
        );
        output
    }
}
