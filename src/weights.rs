//! 辺の重み行列の前処理
//!
//! 重み行列は頂点数n x nの密行列で、(i, j)成分が辺{i, j}の重みを表す。
//! 利用者は片側の三角成分しか埋めていなかったり、非対称な値を入れていたりすることがあるので、
//! 定式化の前に辺ごとに一つの重みに揃える。
//! どの関数も呼び出し元の行列は書き換えず、新しい行列を返す。

use crate::error::MatchingError;
use crate::graph::Graph;
use nalgebra::DMatrix;

/// 辺の重み行列
pub type WeightMatrix = DMatrix<f64>;

/// 重みが省略されたときの行列。グラフの辺は全て重み1、それ以外は0。
/// この重みでの最大重みマッチングは最大マッチングと一致する。
pub fn default_weights<G: Graph>(graph: &G) -> WeightMatrix {
    let n = graph.vertex_count();
    let mut weights = WeightMatrix::zeros(n, n);
    for (u, v) in graph.edges() {
        weights[(u, v)] = 1.0;
        weights[(v, u)] = 1.0;
    }
    weights
}

/// 重み行列がn x nであることを確認する
pub fn check_shape<G: Graph>(graph: &G, weights: &WeightMatrix) -> Result<(), MatchingError> {
    let expected = graph.vertex_count();
    let (rows, cols) = weights.shape();
    if rows != expected || cols != expected {
        return Err(MatchingError::WeightShape {
            expected,
            rows,
            cols,
        });
    }
    Ok(())
}

/// グラフの辺に合わせて重み行列を正規化した複製を返す。
///
/// - グラフに辺がない組(対角成分を含む)は0
/// - 辺{i, j} (i < j)は両側とも上三角の値。ただし下三角に上三角より大きい正の値があればそちらを使う
pub fn normalize_weights<G: Graph>(
    graph: &G,
    weights: &WeightMatrix,
) -> Result<WeightMatrix, MatchingError> {
    check_shape(graph, weights)?;

    let n = graph.vertex_count();
    let mut normalized = WeightMatrix::zeros(n, n);
    for (u, v) in graph.edges() {
        let (upper, lower) = (weights[(u, v)], weights[(v, u)]);
        let weight = if lower > 0.0 && lower > upper {
            lower
        } else {
            upper
        };
        normalized[(u, v)] = weight;
        normalized[(v, u)] = weight;
    }
    Ok(normalized)
}

/// cutoff未満の成分を0にした複製を返す。cutoff以上の成分はそのまま。
pub fn cutoff_weights(weights: &WeightMatrix, cutoff: f64) -> WeightMatrix {
    weights.map(|weight| if weight < cutoff { 0.0 } else { weight })
}
