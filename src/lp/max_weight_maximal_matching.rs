//! 二部グラフの最大重み極大マッチングを数理最適化問題として求める。
//!
//! 二部グラフの小さい方の側(A側)の頂点は全てマッチさせることを等式制約で強制し、
//! その上で重みの合計を最大化する。
//! 重みが正の辺だけを変数にするので、cutoffで重みを0にした辺は最初から候補に入らない。
//! 候補の辺が一本もない頂点は制約に含めないため、そうした頂点はマッチしないまま残る。

use super::{Domain, LinearProblem, LpSolver, Relation, VariableSpec, optimal_values};
use crate::error::MatchingError;
use crate::graph::{Graph, Side};
use crate::matching::{MateBuilder, MatchingResult};
use crate::util::edge_indexer::EdgeIndexer;
use crate::weights::{WeightMatrix, cutoff_weights, default_weights, normalize_weights};
use log::{debug, trace};

/// 最大重み極大マッチングを求める。
///
/// - `weights`を省略すると全ての辺の重みを1として扱う
/// - `cutoff`を指定すると、その値未満の重みを0にしてから解く
pub fn maximum_weight_maximal_matching<G, S>(
    graph: &G,
    weights: Option<&WeightMatrix>,
    cutoff: Option<f64>,
    solver: &S,
) -> Result<MatchingResult, MatchingError>
where
    G: Graph,
    S: LpSolver + ?Sized,
{
    // 二部グラフでなければ問題を作る前に失敗させる
    let vertex_count = graph.vertex_count();
    let coloring = graph.bipartite_coloring().unwrap_or_default();
    if coloring.len() != vertex_count {
        return Err(MatchingError::NotBipartite {
            colored: coloring.len(),
            vertex_count,
        });
    }

    let weights = match weights {
        Some(weights) => weights.clone(),
        None => default_weights(graph),
    };
    let weights = match cutoff {
        Some(cutoff) => cutoff_weights(&weights, cutoff),
        None => weights,
    };
    let weights = normalize_weights(graph, &weights)?;

    // 小さい方の側を飽和させる側とする。同数ならA側。
    let a_count = coloring.iter().filter(|&&side| side == Side::A).count();
    let saturated_side = if vertex_count - a_count < a_count {
        Side::B
    } else {
        Side::A
    };

    // 重みが正の辺だけを候補にする
    let edges = EdgeIndexer::new(
        graph
            .edges()
            .into_iter()
            .filter(|&(u, v)| weights[(u, v)] > 0.0),
    );

    let problem = build_problem(graph, &weights, &edges, &coloring, saturated_side);
    debug!(
        "maximum weight maximal matching: {} candidate edges, {} constraints",
        problem.variables().len(),
        problem.constraints().len()
    );

    let (values, objective_value) = optimal_values(&problem, solver.solve(&problem))?;

    // 二部グラフなら最適解は0/1になるはずなので、丸めずにそのまま確認する
    for (index, edge) in edges.iter() {
        let value = values[index];
        if value != 0.0 && value != 1.0 {
            return Err(MatchingError::NonIntegralSolution { edge, value });
        }
    }

    let mut mate = MateBuilder::new(vertex_count);
    for (index, (u, v)) in edges.iter() {
        if values[index] == 1.0 {
            trace!("edge ({u}, {v}) selected");
            mate.pair(u, v);
        }
    }

    Ok(mate.finish(objective_value))
}

fn build_problem<G: Graph>(
    graph: &G,
    weights: &WeightMatrix,
    edges: &EdgeIndexer,
    coloring: &[Side],
    saturated_side: Side,
) -> LinearProblem {
    let mut problem = LinearProblem::new();

    //
    // 変数定義
    //
    for _ in edges.iter() {
        problem.add_variable(VariableSpec::non_negative(Domain::Continuous));
    }

    //
    // 目的関数
    //
    for (index, (u, v)) in edges.iter() {
        problem.add_objective_term(index, weights[(u, v)]);
    }

    //
    // 制約条件
    //
    // 飽和させる側の頂点はちょうど一つ、反対側の頂点は高々一つの辺に使われる。
    // 候補の辺がない頂点は制約を作らない。
    for v in 0..graph.vertex_count() {
        let incident: Vec<usize> = graph
            .neighbors(v)
            .iter()
            .filter_map(|&u| edges.to_index(v, u))
            .collect();
        if incident.is_empty() {
            continue;
        }

        let relation = if coloring[v] == saturated_side {
            Relation::Equal
        } else {
            Relation::LessOrEqual
        };
        problem.add_constraint(&incident, relation, 1.0);
    }

    problem
}
