//! グラフの最大重みマッチングを数理最適化問題として求めるライブラリ
//!
//! - [`maximum_weight_matching`]: 一般のグラフの最大重みマッチング。
//!   二部グラフならLP緩和、そうでなければ整数計画として解く。
//! - [`maximum_weight_maximal_matching`]: 二部グラフの小さい側を全てマッチさせたうえでの最大重みマッチング。
//! - [`cutoff_weights`]: 閾値未満の重みを0にする前処理。
//!
//! 最適化の計算そのものは[`lp::LpSolver`]を実装したソルバーに任せる。
//! good_lpを使うソルバーとして[`GoodLpSolver`]を用意している。
//!
//! ```no_run
//! use good_lp::microlp;
//! use lp_graph_matching::{GoodLpSolver, SimpleGraph, maximum_weight_matching};
//!
//! let graph = SimpleGraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
//! let result = maximum_weight_matching(&graph, None, &GoodLpSolver::new(microlp)).unwrap();
//! assert_eq!(result.len(), 2);
//! ```

pub mod error;
pub mod graph;
pub mod lp;
pub mod matching;
pub mod util;
pub mod weights;

pub use error::MatchingError;
pub use graph::{Graph, Side, SimpleGraph, Vertex};
pub use lp::good_lp_solver::GoodLpSolver;
pub use lp::max_weight_matching::{maximum_weight_matching, maximum_weight_matching_with_config};
pub use lp::max_weight_maximal_matching::maximum_weight_maximal_matching;
pub use lp::{LpSolver, SolverOutput, TerminationStatus};
pub use matching::{MatchingConfig, MatchingResult};
pub use weights::{WeightMatrix, cutoff_weights};
