use spanforest::{compute_mst, generate_trace, Graph, GraphConfig};
use std::time::Instant;

fn build_grid_graph(side: usize) -> Graph {
    let mut g = Graph::with_config(GraphConfig {
        max_nodes: side * side,
        max_edges: 2 * side * side,
        ..GraphConfig::default()
    });
    let mut nodes = Vec::with_capacity(side * side);
    for j in 0..side { for i in 0..side { nodes.push(g.add_node(i as f32 * 8.0, j as f32 * 6.0).expect("node")); } }
    // Connect right and down neighbours with scrambled but deterministic weights
    for j in 0..side {
        for i in 0..side {
            let a = nodes[j * side + i];
            let w = ((i * 31 + j * 17) % 97 + 1) as i64;
            if i + 1 < side { g.add_edge(a, nodes[j * side + i + 1], w).expect("edge"); }
            if j + 1 < side { g.add_edge(a, nodes[(j + 1) * side + i], w + 3).expect("edge"); }
        }
    }
    g
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() { return 0.0; }
    let idx = ((sorted.len() as f64 - 1.0) * p).round() as usize;
    sorted[idx.min(sorted.len()-1)]
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut side = 100usize;
    let mut runs = 50usize;
    let mut with_trace = false;
    let mut assert_ms: Option<f64> = None;
    for a in &args[1..] {
        if let Some(val)=a.strip_prefix("--side=") { if let Ok(v)=val.parse() { side=v; } }
        else if let Some(val)=a.strip_prefix("--runs=") { if let Ok(v)=val.parse() { runs=v; } }
        else if let Some(val)=a.strip_prefix("--assert-ms=") { if let Ok(v)=val.parse() { assert_ms=Some(v); } }
        else if a == "--trace" { with_trace = true; }
    }

    let g = build_grid_graph(side.max(2));
    let mut times_ms: Vec<f64> = Vec::with_capacity(runs);
    let mut total_weight = 0u64;
    for _ in 0..runs {
        let t0 = Instant::now();
        if with_trace {
            let trace = generate_trace(&g).expect("trace");
            total_weight = trace.final_weight().unwrap_or(0);
        } else {
            total_weight = compute_mst(&g).expect("mst").total_weight;
        }
        times_ms.push(t0.elapsed().as_secs_f64() * 1000.0);
    }
    times_ms.sort_by(|a,b| a.total_cmp(b));
    let med = percentile(&times_ms, 0.5);
    let p90 = percentile(&times_ms, 0.9);
    println!("nodes={} edges={} runs={} trace={} total_weight={} median_ms={:.4} p90_ms={:.4}", g.node_count(), g.edge_count(), runs, with_trace, total_weight, med, p90);
    if let Some(th) = assert_ms { if med > th { eprintln!("FAIL: median {:.4} ms > threshold {:.3} ms", med, th); std::process::exit(1); } }
}
