//! マッチング計算で発生しうるエラーの一覧

use crate::lp::TerminationStatus;
use thiserror::Error;

/// マッチングを求めるときのエラー
///
/// どれもこの層では回復できないので、そのまま呼び出し元に返す。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchingError {
    /// ソルバーが最適解以外の状態で終了した
    #[error("Solver terminated without an optimal solution (status: {status})")]
    SolverFailure { status: TerminationStatus },

    /// 極大マッチングを二部グラフでないグラフに対して求めようとした
    #[error("Graph is not bipartite (colored {colored} of {vertex_count} vertices)")]
    NotBipartite { colored: usize, vertex_count: usize },

    /// 極大マッチングの解に0でも1でもない値が含まれていた
    #[error("Found non-integer solution {value} for edge ({}, {})", .edge.0, .edge.1)]
    NonIntegralSolution { edge: (usize, usize), value: f64 },

    /// 重み行列の大きさが頂点数と合わない
    #[error("Weight matrix must be {expected}x{expected} (found {rows}x{cols})")]
    WeightShape {
        expected: usize,
        rows: usize,
        cols: usize,
    },

    /// ソルバーが返した解の変数の数が問題と合わない
    #[error("Solver returned {found} values for {expected} variables")]
    SolutionSize { expected: usize, found: usize },

    /// 自己ループや範囲外の頂点を持つ辺を追加しようとした
    #[error("Invalid edge ({u}, {v}) for graph with {vertex_count} vertices")]
    InvalidEdge {
        u: usize,
        v: usize,
        vertex_count: usize,
    },

    /// 復元時の許容誤差が[0, 0.5)に収まっていない
    #[error("Tolerance must be in [0, 0.5) (found {tolerance})")]
    InvalidTolerance { tolerance: f64 },

    /// mateの対応が対称になっていない
    #[error("Vertex {vertex} is paired with {mate}, but not the other way around")]
    AsymmetricMate { vertex: usize, mate: usize },
}
