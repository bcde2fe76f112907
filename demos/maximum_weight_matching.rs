use good_lp::microlp;
use lp_graph_matching::{
    GoodLpSolver, MatchingResult, SimpleGraph, WeightMatrix, maximum_weight_matching,
};

fn main() {
    env_logger::init();

    example_1();
    example_2();
    example_3();
    example_4();
}

fn print_result(result: &MatchingResult) {
    println!("Total Weight: {}", result.weight());
    println!("Match:");
    for (v, mate) in result.mate().iter().enumerate() {
        match mate {
            None => println!(" {v} -- None"),
            Some(u) => println!(" {v} --- {u}"),
        }
    }
    println!();
}

fn weighted(n: usize, entries: &[(usize, usize, f64)]) -> (SimpleGraph, WeightMatrix) {
    let graph = SimpleGraph::from_edges(n, entries.iter().map(|&(u, v, _)| (u, v)))
        .expect("Invalid edge. Expect both ends in range and no self loop");
    let mut weights = WeightMatrix::zeros(n, n);
    for &(u, v, w) in entries {
        weights[(u, v)] = w;
    }
    (graph, weights)
}

fn example_1() {
    println!("--- Example 1: Square without weights ---");
    let graph = SimpleGraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)])
        .expect("Invalid edge. Expect both ends in range and no self loop");
    let result = maximum_weight_matching(&graph, None, &GoodLpSolver::new(microlp))
        .expect("solve failed");
    print_result(&result);
    // 重みなしなので最大マッチングの辺数 = 2
    assert_eq!(result.len(), 2);
}

fn example_2() {
    println!("--- Example 2: Better than Greedy (bipartite, solved as LP) ---");
    let (graph, weights) = weighted(4, &[(0, 2, 5.0), (0, 3, 1.0), (1, 2, 1.0), (1, 3, 5.0)]);
    let result = maximum_weight_matching(&graph, Some(&weights), &GoodLpSolver::new(microlp))
        .expect("solve failed");
    print_result(&result);
    // (0,2) weight 5 + (1,3) weight 5 = 10
    assert!((result.weight() - 10.0).abs() < 1e-6);
}

fn example_3() {
    println!("--- Example 3: Triangle with a tail (non-bipartite, solved as MIP) ---");
    let (graph, weights) = weighted(4, &[(0, 1, 4.0), (1, 2, 3.0), (2, 0, 3.0), (2, 3, 2.0)]);
    let result = maximum_weight_matching(&graph, Some(&weights), &GoodLpSolver::new(microlp))
        .expect("solve failed");
    print_result(&result);
    // (0,1) weight 4 + (2,3) weight 2 = 6
    assert!((result.weight() - 6.0).abs() < 1e-6);
}

fn example_4() {
    println!("--- Example 4: Only lower triangle filled ---");
    // 下三角にだけ重みを書いても同じ辺の重みとして扱われる
    let graph = SimpleGraph::from_edges(3, [(0, 1), (1, 2)])
        .expect("Invalid edge. Expect both ends in range and no self loop");
    let weights = WeightMatrix::from_row_slice(3, 3, &[0., 0., 0., 2., 0., 0., 0., 7., 0.]);
    let result = maximum_weight_matching(&graph, Some(&weights), &GoodLpSolver::new(microlp))
        .expect("solve failed");
    print_result(&result);
    assert_eq!(result.mate_of(1), Some(2));
    assert!((result.weight() - 7.0).abs() < 1e-6);
}
