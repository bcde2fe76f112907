//! マッチングを数理最適化問題として解くためのモジュール
//!
//! 定式化した問題は特定のソルバーに依存しない[`LinearProblem`]として組み立て、
//! [`LpSolver`]トレイトを実装したソルバーに渡して解いてもらう。
//! 最適化そのもの(単体法や分枝限定法)はこのクレートでは実装しない。

use crate::error::MatchingError;
use std::fmt;

pub mod good_lp_solver;
pub mod max_weight_matching;
pub mod max_weight_maximal_matching;

/// 変数の取りうる値の種類
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Domain {
    /// 実数値(LP緩和)
    Continuous,
    /// 整数値(MIP)
    Integer,
}

/// 決定変数の定義
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VariableSpec {
    pub domain: Domain,
    pub lower_bound: f64,
    /// Noneなら上限なし
    pub upper_bound: Option<f64>,
}

impl VariableSpec {
    /// 下限0で上限なしの変数
    pub fn non_negative(domain: Domain) -> Self {
        Self {
            domain,
            lower_bound: 0.0,
            upper_bound: None,
        }
    }
}

/// 制約の向き
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Relation {
    LessOrEqual,
    Equal,
}

/// Σ coefficient * x\[index\] (relation) rhs の形の線形制約
#[derive(Debug, Clone, PartialEq)]
pub struct LinearConstraint {
    /// (変数のインデックス, 係数)
    pub terms: Vec<(usize, f64)>,
    pub relation: Relation,
    pub rhs: f64,
}

/// 目的関数を最大化する線形計画問題
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearProblem {
    variables: Vec<VariableSpec>,
    constraints: Vec<LinearConstraint>,
    /// (変数のインデックス, 係数)
    objective: Vec<(usize, f64)>,
}

impl LinearProblem {
    pub fn new() -> Self {
        Self::default()
    }

    /// 変数を追加してそのインデックスを返す
    pub fn add_variable(&mut self, spec: VariableSpec) -> usize {
        self.variables.push(spec);
        self.variables.len() - 1
    }

    /// Σ x\[i\] (relation) rhs の制約を追加する
    pub fn add_constraint(&mut self, indices: &[usize], relation: Relation, rhs: f64) {
        self.constraints.push(LinearConstraint {
            terms: indices.iter().map(|&index| (index, 1.0)).collect(),
            relation,
            rhs,
        });
    }

    /// 目的関数に coefficient * x\[index\] の項を足す
    pub fn add_objective_term(&mut self, index: usize, coefficient: f64) {
        self.objective.push((index, coefficient));
    }

    pub fn variables(&self) -> &[VariableSpec] {
        &self.variables
    }

    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }

    pub fn objective(&self) -> &[(usize, f64)] {
        &self.objective
    }

    /// 解の値で目的関数を評価する
    pub fn evaluate_objective(&self, values: &[f64]) -> f64 {
        self.objective
            .iter()
            .map(|&(index, coefficient)| coefficient * values.get(index).copied().unwrap_or(0.0))
            .sum()
    }
}

/// ソルバーがどのように終了したか
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationStatus {
    Optimal,
    Infeasible,
    Unbounded,
    /// その他のソルバー固有の失敗
    Failed(String),
}

impl fmt::Display for TerminationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationStatus::Optimal => write!(f, "optimal"),
            TerminationStatus::Infeasible => write!(f, "infeasible"),
            TerminationStatus::Unbounded => write!(f, "unbounded"),
            TerminationStatus::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

/// ソルバーの実行結果
#[derive(Debug, Clone, PartialEq)]
pub struct SolverOutput {
    pub status: TerminationStatus,
    /// 変数ごとの値。最適解が得られなかったときは空。
    pub values: Vec<f64>,
    pub objective_value: f64,
}

impl SolverOutput {
    pub fn optimal(values: Vec<f64>, objective_value: f64) -> Self {
        Self {
            status: TerminationStatus::Optimal,
            values,
            objective_value,
        }
    }

    pub fn without_solution(status: TerminationStatus) -> Self {
        Self {
            status,
            values: Vec::new(),
            objective_value: 0.0,
        }
    }
}

/// 線形計画問題を解くソルバー
///
/// ソルバー固有の設定はインスタンスを作るときに済ませておき、ここでは問題だけを渡す。
pub trait LpSolver {
    fn solve(&self, problem: &LinearProblem) -> SolverOutput;
}

impl<S: LpSolver + ?Sized> LpSolver for &S {
    fn solve(&self, problem: &LinearProblem) -> SolverOutput {
        (**self).solve(problem)
    }
}

/// ソルバーの結果から最適解の値を取り出す。最適でなければエラー。
pub(crate) fn optimal_values(
    problem: &LinearProblem,
    output: SolverOutput,
) -> Result<(Vec<f64>, f64), MatchingError> {
    if output.status != TerminationStatus::Optimal {
        return Err(MatchingError::SolverFailure {
            status: output.status,
        });
    }

    let expected = problem.variables().len();
    if output.values.len() != expected {
        return Err(MatchingError::SolutionSize {
            expected,
            found: output.values.len(),
        });
    }

    Ok((output.values, output.objective_value))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    /// 決められた結果を返すだけのソルバー。受け取った問題は記録しておく。
    pub(crate) struct ScriptedSolver {
        output: SolverOutput,
        pub(crate) received: RefCell<Vec<LinearProblem>>,
    }

    impl ScriptedSolver {
        pub(crate) fn new(output: SolverOutput) -> Self {
            Self {
                output,
                received: RefCell::new(Vec::new()),
            }
        }
    }

    impl LpSolver for ScriptedSolver {
        fn solve(&self, problem: &LinearProblem) -> SolverOutput {
            self.received.borrow_mut().push(problem.clone());
            self.output.clone()
        }
    }

    #[test]
    fn problem_collects_variables_constraints_and_objective() {
        let mut problem = LinearProblem::new();
        let x = problem.add_variable(VariableSpec::non_negative(Domain::Continuous));
        let y = problem.add_variable(VariableSpec::non_negative(Domain::Integer));
        problem.add_constraint(&[x, y], Relation::LessOrEqual, 1.0);
        problem.add_objective_term(x, 2.0);
        problem.add_objective_term(y, 3.0);

        assert_eq!((x, y), (0, 1));
        assert_eq!(problem.variables()[1].domain, Domain::Integer);
        assert_eq!(problem.variables()[1].upper_bound, None);
        assert_eq!(problem.constraints()[0].terms, vec![(0, 1.0), (1, 1.0)]);
        assert_eq!(problem.evaluate_objective(&[1.0, 0.5]), 3.5);
    }

    #[test]
    fn non_optimal_status_is_a_failure() {
        let problem = LinearProblem::new();
        let output = SolverOutput::without_solution(TerminationStatus::Infeasible);
        assert_eq!(
            optimal_values(&problem, output),
            Err(MatchingError::SolverFailure {
                status: TerminationStatus::Infeasible
            })
        );
    }

    #[test]
    fn value_count_must_match_variables() {
        let mut problem = LinearProblem::new();
        problem.add_variable(VariableSpec::non_negative(Domain::Continuous));
        let output = SolverOutput::optimal(vec![], 0.0);
        assert_eq!(
            optimal_values(&problem, output),
            Err(MatchingError::SolutionSize {
                expected: 1,
                found: 0
            })
        );
    }

    #[test]
    fn status_is_displayed_in_lowercase() {
        assert_eq!(TerminationStatus::Optimal.to_string(), "optimal");
        assert_eq!(
            TerminationStatus::Failed("timeout".to_string()).to_string(),
            "failed: timeout"
        );
    }
}
