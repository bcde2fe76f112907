use good_lp::microlp;
use lp_graph_matching::{
    GoodLpSolver, MatchingError, SimpleGraph, WeightMatrix, cutoff_weights,
    maximum_weight_maximal_matching,
};

fn main() {
    env_logger::init();

    example_1();
    example_2();
    example_3();
}

fn example(description: &str, n: usize, entries: &[(usize, usize, f64)], cutoff: Option<f64>) {
    println!("\n--- Example : {description} ---");

    let graph = SimpleGraph::from_edges(n, entries.iter().map(|&(u, v, _)| (u, v)))
        .expect("Invalid edge. Expect both ends in range and no self loop");
    let mut weights = WeightMatrix::zeros(n, n);
    for &(u, v, w) in entries {
        weights[(u, v)] = w;
    }
    if let Some(cutoff) = cutoff {
        println!("Weights after cutoff {cutoff}:{}", cutoff_weights(&weights, cutoff));
    }

    match maximum_weight_maximal_matching(&graph, Some(&weights), cutoff, &GoodLpSolver::new(microlp))
    {
        Ok(result) => {
            println!("Matching Weight : {}", result.weight());
            println!("Match:");
            for (u, v) in result.pairs() {
                println!(" {u} --- {v}  with weight {}", weights[(u, v)]);
            }
        }
        Err(error @ MatchingError::SolverFailure { .. }) => {
            println!("No maximal matching: {error}");
        }
        Err(error) => panic!("unexpected error: {error}"),
    }
}

fn example_1() {
    // 最大重みマッチングなら(1,2)だけを選ぶが、極大にするため0もマッチさせる
    example(
        "Saturate the smaller side",
        5,
        &[(0, 2, 1.0), (1, 2, 10.0), (1, 3, 1.0), (1, 4, 1.0)],
        None,
    );
}

fn example_2() {
    // cutoffで軽い辺を落とすと、0は候補がなくなりマッチしない
    example(
        "Cutoff light edges",
        5,
        &[(0, 2, 1.0), (1, 2, 10.0), (1, 3, 1.0), (1, 4, 1.0)],
        Some(5.0),
    );
}

fn example_3() {
    // 0と1が同じ頂点2しか候補を持たないので、両方は飽和させられない
    example(
        "Unsaturable side",
        5,
        &[(0, 2, 1.0), (1, 2, 1.0), (0, 3, 0.0), (1, 4, 0.0)],
        None,
    );
}
