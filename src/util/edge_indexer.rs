//! 無向辺に決定変数のインデックスを振るモジュール
//!
//! 無向辺{u, v}は(u, v)と(v, u)のどちらで問い合わせても同じインデックスになるように、
//! (小さい方, 大きい方)に正規化してから登録する。

use crate::graph::Vertex;
use std::collections::BTreeMap;

/// 無向辺の組
pub type EdgeKey = (Vertex, Vertex);

/// 端点を(小さい方, 大きい方)に揃える
pub fn edge_key(u: Vertex, v: Vertex) -> EdgeKey {
    if u <= v { (u, v) } else { (v, u) }
}

/// 【Interning】登録順に無向辺へ0からの連番を振る
#[derive(Debug, Clone, Default)]
pub struct EdgeIndexer {
    edge_to_index: BTreeMap<EdgeKey, usize>,
    index_to_edge: Vec<EdgeKey>,
}

impl EdgeIndexer {
    /// 辺を正規化しつつ初期化。同じ辺は最初の一回だけ登録する。
    pub fn new<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (Vertex, Vertex)>,
    {
        let mut indexer = Self::default();
        for (u, v) in edges {
            indexer.insert(u, v);
        }
        indexer
    }

    /// 辺を登録してインデックスを返す。登録済みならそのインデックス。
    pub fn insert(&mut self, u: Vertex, v: Vertex) -> usize {
        let key = edge_key(u, v);
        if let Some(&index) = self.edge_to_index.get(&key) {
            return index;
        }

        let index = self.index_to_edge.len();
        self.index_to_edge.push(key);
        self.edge_to_index.insert(key, index);
        index
    }

    pub fn is_empty(&self) -> bool {
        self.index_to_edge.is_empty()
    }

    pub fn len(&self) -> usize {
        self.index_to_edge.len()
    }

    /// 辺のインデックス。向きは問わない。
    pub fn to_index(&self, u: Vertex, v: Vertex) -> Option<usize> {
        self.edge_to_index.get(&edge_key(u, v)).copied()
    }

    /// インデックスから辺を復元
    pub fn to_edge(&self, index: usize) -> Option<EdgeKey> {
        self.index_to_edge.get(index).copied()
    }

    /// (インデックス, 辺)を登録順に辿る
    pub fn iter(&self) -> impl Iterator<Item = (usize, EdgeKey)> + '_ {
        self.index_to_edge.iter().copied().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_indexer() {
        // 登録順にIDが振られ、逆向きの重複は同じIDになることを確認
        let indexer = EdgeIndexer::new(vec![(2, 0), (1, 3), (0, 2), (3, 1), (4, 2)]);

        assert_eq!(indexer.len(), 3);
        assert!(!indexer.is_empty());

        assert_eq!(indexer.to_index(0, 2), Some(0));
        assert_eq!(indexer.to_index(2, 0), Some(0));
        assert_eq!(indexer.to_index(3, 1), Some(1));
        assert_eq!(indexer.to_index(2, 4), Some(2));
        assert_eq!(indexer.to_index(0, 1), None);

        // IDから辺の復元。常に小さい方が先。
        assert_eq!(indexer.to_edge(1), Some((1, 3)));
        assert_eq!(indexer.to_edge(99), None);
        assert_eq!(
            indexer.iter().collect::<Vec<_>>(),
            vec![(0, (0, 2)), (1, (1, 3)), (2, (2, 4))]
        );
    }

    #[test]
    fn test_empty_edge_indexer() {
        let indexer = EdgeIndexer::new(Vec::new());
        assert!(indexer.is_empty());
        assert_eq!(indexer.len(), 0);
        assert_eq!(indexer.to_index(0, 1), None);
        assert_eq!(indexer.to_edge(0), None);
    }

    #[test]
    fn test_insert_returns_existing_index() {
        let mut indexer = EdgeIndexer::default();
        assert_eq!(indexer.insert(5, 1), 0);
        assert_eq!(indexer.insert(2, 3), 1);
        assert_eq!(indexer.insert(1, 5), 0);
        assert_eq!(indexer.len(), 2);
    }
}
