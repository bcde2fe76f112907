//! マッチングの結果と、ソルバーの解からマッチングを復元する処理

use crate::error::MatchingError;
use crate::graph::Vertex;
use serde::{Deserialize, Serialize};

/// LPソルバーの数値誤差を吸収するための許容誤差
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

/// マッチング計算の設定
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// 変数の値が 1 - tolerance 以上なら辺を選んだとみなす
    pub tolerance: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl MatchingConfig {
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// 許容誤差が0.5以上だと、値0.5の辺が同じ頂点で二本選ばれてしまう
    pub fn validate(&self) -> Result<(), MatchingError> {
        if (0.0..0.5).contains(&self.tolerance) {
            Ok(())
        } else {
            Err(MatchingError::InvalidTolerance {
                tolerance: self.tolerance,
            })
        }
    }
}

/// マッチングの計算結果
///
/// mate\[i\] = Some(j) なら頂点iとjがマッチしていて、このときmate\[j\] = Some(i)。
/// Noneならマッチしていない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatchingResult")]
pub struct MatchingResult {
    weight: f64,
    mate: Vec<Option<Vertex>>,
}

impl MatchingResult {
    /// ソルバーが達成した目的関数値
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn mate(&self) -> &[Option<Vertex>] {
        &self.mate
    }

    pub fn mate_of(&self, v: Vertex) -> Option<Vertex> {
        self.mate.get(v).copied().flatten()
    }

    pub fn is_matched(&self, v: Vertex) -> bool {
        self.mate_of(v).is_some()
    }

    /// マッチした組を(u, v)かつu < vで一度ずつ列挙する
    pub fn pairs(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.mate
            .iter()
            .enumerate()
            .filter_map(|(u, mate)| mate.filter(|&v| u < v).map(|v| (u, v)))
    }

    /// マッチした組の数
    pub fn len(&self) -> usize {
        self.pairs().count()
    }

    pub fn is_empty(&self) -> bool {
        self.mate.iter().all(Option::is_none)
    }
}

/// 読み込んだだけで対称性を確認していない結果
#[derive(Deserialize)]
struct RawMatchingResult {
    weight: f64,
    mate: Vec<Option<Vertex>>,
}

impl TryFrom<RawMatchingResult> for MatchingResult {
    type Error = MatchingError;

    fn try_from(raw: RawMatchingResult) -> Result<Self, Self::Error> {
        for (vertex, mate) in raw.mate.iter().enumerate() {
            if let Some(mate) = *mate {
                if mate == vertex || raw.mate.get(mate).copied().flatten() != Some(vertex) {
                    return Err(MatchingError::AsymmetricMate { vertex, mate });
                }
            }
        }
        Ok(Self {
            weight: raw.weight,
            mate: raw.mate,
        })
    }
}

/// マッチングを組み立てる途中の状態。
/// 組を追加するときに両側を同時に書き込むので、対称性は構築時点で保証される。
#[derive(Debug, Clone)]
pub(crate) struct MateBuilder {
    mate: Vec<Option<Vertex>>,
}

impl MateBuilder {
    pub(crate) fn new(vertex_count: usize) -> Self {
        Self {
            mate: vec![None; vertex_count],
        }
    }

    pub(crate) fn pair(&mut self, u: Vertex, v: Vertex) {
        self.mate[u] = Some(v);
        self.mate[v] = Some(u);
    }

    pub(crate) fn finish(self, weight: f64) -> MatchingResult {
        MatchingResult {
            weight,
            mate: self.mate,
        }
    }
}
