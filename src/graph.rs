//! マッチングを求める対象の無向単純グラフ
//!
//! マッチングの計算側は[`Graph`]トレイトだけを見ているので、
//! 利用者は自前のグラフ表現にトレイトを実装して渡すこともできる。
//! 手元で使うためのグラフとして、隣接リストで持つ[`SimpleGraph`]を用意している。

use crate::error::MatchingError;
use std::collections::VecDeque;

/// 頂点の識別子。0からn-1までの連番。
pub type Vertex = usize;

/// 二部グラフの2彩色でどちら側に属しているか
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// 反対側
    pub fn opposite(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// マッチングの計算に必要な情報を提供するグラフのトレイト
pub trait Graph {
    /// 頂点数
    fn vertex_count(&self) -> usize;

    /// 全ての辺を(u, v)かつu < vの形で一度ずつ列挙する
    fn edges(&self) -> Vec<(Vertex, Vertex)>;

    /// 頂点vの隣接頂点
    fn neighbors(&self, v: Vertex) -> &[Vertex];

    /// 二部グラフなら頂点ごとの彩色を返す。二部グラフでないならNone。
    fn bipartite_coloring(&self) -> Option<Vec<Side>>;

    /// 二部グラフならtrue
    fn is_bipartite(&self) -> bool {
        self.bipartite_coloring().is_some()
    }
}

/// 隣接リストで持つ無向単純グラフ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleGraph {
    adjacency: Vec<Vec<Vertex>>,
    edge_count: usize,
}

impl SimpleGraph {
    /// 頂点数nで辺のないグラフを作る
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// 辺の一覧からグラフを作る
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self, MatchingError>
    where
        I: IntoIterator<Item = (Vertex, Vertex)>,
    {
        let mut graph = Self::new(vertex_count);
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// 辺{u, v}を追加する。
    /// 自己ループと範囲外の頂点はエラー。すでにある辺は無視する。
    pub fn add_edge(&mut self, u: Vertex, v: Vertex) -> Result<(), MatchingError> {
        let vertex_count = self.adjacency.len();
        if u == v || u >= vertex_count || v >= vertex_count {
            return Err(MatchingError::InvalidEdge {
                u,
                v,
                vertex_count,
            });
        }

        if self.has_edge(u, v) {
            return Ok(());
        }

        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
        self.edge_count += 1;

        Ok(())
    }

    pub fn has_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.adjacency
            .get(u)
            .is_some_and(|neighbors| neighbors.contains(&v))
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// 幅優先探索で彩色案を作る。
    /// 二部グラフでない場合は同じ色同士の辺が残るので、呼び出し側で検証する。
    fn propose_coloring(&self) -> Vec<Side> {
        let mut coloring: Vec<Option<Side>> = vec![None; self.adjacency.len()];
        let mut queue = VecDeque::new();

        for start in 0..self.adjacency.len() {
            if coloring[start].is_some() {
                continue;
            }

            // 連結成分ごとに探索し直す。孤立点もここでA側になる。
            coloring[start] = Some(Side::A);
            queue.push_back(start);
            while let Some(u) = queue.pop_front() {
                let side = coloring[u].unwrap_or(Side::A);
                for &v in &self.adjacency[u] {
                    if coloring[v].is_none() {
                        coloring[v] = Some(side.opposite());
                        queue.push_back(v);
                    }
                }
            }
        }

        coloring
            .into_iter()
            .map(|side| side.unwrap_or(Side::A))
            .collect()
    }
}

impl Graph for SimpleGraph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edges(&self) -> Vec<(Vertex, Vertex)> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for (u, neighbors) in self.adjacency.iter().enumerate() {
            for &v in neighbors {
                if u < v {
                    edges.push((u, v));
                }
            }
        }
        edges
    }

    fn neighbors(&self, v: Vertex) -> &[Vertex] {
        self.adjacency.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    fn bipartite_coloring(&self) -> Option<Vec<Side>> {
        let coloring = self.propose_coloring();
        self.edges()
            .into_iter()
            .all(|(u, v)| coloring[u] != coloring[v])
            .then_some(coloring)
    }
}
