//! 一般のグラフの最大重みマッチングを数理最適化問題として求める。
//!
//! 辺ごとに非負の変数x_eを用意し、各頂点に接続する辺の変数の和を1以下に制限したうえで
//! Σ w_e x_e を最大化する。
//! 二部グラフなら接続行列が完全単模なのでLP緩和の最適解が自動的に0/1になり、連続変数のまま解く。
//! 二部グラフでないなら奇閉路で半端な値が出るので、変数を整数に指定してMIPとして解く。

use super::{Domain, LinearProblem, LpSolver, Relation, VariableSpec, optimal_values};
use crate::error::MatchingError;
use crate::graph::Graph;
use crate::matching::{MateBuilder, MatchingConfig, MatchingResult};
use crate::util::edge_indexer::EdgeIndexer;
use crate::weights::{WeightMatrix, default_weights, normalize_weights};
use log::{debug, trace};

/// 最大重みマッチングを求める。
///
/// `weights`を省略すると全ての辺の重みを1として扱うので、最大マッチングになる。
/// 渡した重み行列は書き換えない。
pub fn maximum_weight_matching<G, S>(
    graph: &G,
    weights: Option<&WeightMatrix>,
    solver: &S,
) -> Result<MatchingResult, MatchingError>
where
    G: Graph,
    S: LpSolver + ?Sized,
{
    maximum_weight_matching_with_config(graph, weights, solver, &MatchingConfig::default())
}

/// 復元時の許容誤差を指定して最大重みマッチングを求める
pub fn maximum_weight_matching_with_config<G, S>(
    graph: &G,
    weights: Option<&WeightMatrix>,
    solver: &S,
    config: &MatchingConfig,
) -> Result<MatchingResult, MatchingError>
where
    G: Graph,
    S: LpSolver + ?Sized,
{
    config.validate()?;
    let weights = match weights {
        Some(weights) => normalize_weights(graph, weights)?,
        None => default_weights(graph),
    };
    let edges = EdgeIndexer::new(graph.edges());
    let bipartite = graph.is_bipartite();

    let problem = build_problem(graph, &weights, &edges, bipartite);
    debug!(
        "maximum weight matching as {}: {} variables, {} constraints",
        if bipartite { "LP" } else { "MIP" },
        problem.variables().len(),
        problem.constraints().len()
    );

    let (values, objective_value) = optimal_values(&problem, solver.solve(&problem))?;

    // 整数解なら値は0か1のはずだが、数値誤差を考慮して1 - tolerance以上を選んだとみなす。
    // それより小さい値は選ばなかった扱いにする。
    let mut mate = MateBuilder::new(graph.vertex_count());
    for (index, (u, v)) in edges.iter() {
        if values[index] >= 1.0 - config.tolerance {
            trace!("edge ({u}, {v}) selected with value {}", values[index]);
            mate.pair(u, v);
        }
    }

    Ok(mate.finish(objective_value))
}

fn build_problem<G: Graph>(
    graph: &G,
    weights: &WeightMatrix,
    edges: &EdgeIndexer,
    bipartite: bool,
) -> LinearProblem {
    let mut problem = LinearProblem::new();

    //
    // 変数定義
    //
    // 上限は付けず、次数制約で1以下に抑える
    let domain = if bipartite {
        Domain::Continuous
    } else {
        Domain::Integer
    };
    for _ in edges.iter() {
        problem.add_variable(VariableSpec::non_negative(domain));
    }

    //
    // 目的関数
    //
    // 重み0の辺も変数としては残す
    for (index, (u, v)) in edges.iter() {
        problem.add_objective_term(index, weights[(u, v)]);
    }

    //
    // 制約条件
    //
    // 各頂点は高々一つの辺にしか使われない
    for v in 0..graph.vertex_count() {
        let incident: Vec<usize> = graph
            .neighbors(v)
            .iter()
            .filter_map(|&u| edges.to_index(v, u))
            .collect();
        if !incident.is_empty() {
            problem.add_constraint(&incident, Relation::LessOrEqual, 1.0);
        }
    }

    problem
}
