use proptest::prelude::*;
use spanforest::algorithms::disjoint_set::DisjointSet;
use spanforest::{compute_mst, generate_trace, Graph, NodeId};

#[derive(Clone, Debug)]
enum Op {
    AddNode { x: i16, y: i16 },
    RemoveNode { idx: u16 },
    AddEdge { a: u16, b: u16, w: i8 },
    RemoveEdge { idx: u16 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (any::<i16>(), any::<i16>()).prop_map(|(x, y)| Op::AddNode { x, y }),
        1 => any::<u16>().prop_map(|idx| Op::RemoveNode { idx }),
        4 => (any::<u16>(), any::<u16>(), any::<i8>()).prop_map(|(a, b, w)| Op::AddEdge { a, b, w }),
        1 => any::<u16>().prop_map(|idx| Op::RemoveEdge { idx }),
    ]
}

fn apply_op(g: &mut Graph, op: Op) {
    let nodes: Vec<NodeId> = g.nodes().map(|n| n.id).collect();
    match op {
        Op::AddNode { x, y } => {
            let _ = g.add_node(x as f32 * 0.1, y as f32 * 0.1);
        }
        Op::RemoveNode { idx } => {
            if nodes.is_empty() {
                return;
            }
            let _ = g.remove_node(nodes[(idx as usize) % nodes.len()]);
        }
        Op::AddEdge { a, b, w } => {
            if nodes.is_empty() {
                return;
            }
            let aid = nodes[(a as usize) % nodes.len()];
            let bid = nodes[(b as usize) % nodes.len()];
            let before: Vec<_> = g.edges().copied().collect();
            // negative and zero weights must be rejected without side effects
            if g.add_edge(aid, bid, w as i64).is_err() {
                let after: Vec<_> = g.edges().copied().collect();
                assert_eq!(before, after);
            }
        }
        Op::RemoveEdge { idx } => {
            let edges: Vec<_> = g.edges().map(|e| e.id).collect();
            if edges.is_empty() {
                return;
            }
            let _ = g.remove_edge(edges[(idx as usize) % edges.len()]);
        }
    }
}

// Components of the graph, by plain DFS.
fn component_count(g: &Graph) -> usize {
    let ids: Vec<NodeId> = g.nodes().map(|n| n.id).collect();
    let mut seen = vec![false; ids.len()];
    let pos = |id: NodeId| ids.iter().position(|&n| n == id).unwrap();
    let mut comps = 0;
    for start in 0..ids.len() {
        if seen[start] {
            continue;
        }
        comps += 1;
        let mut stack = vec![start];
        seen[start] = true;
        while let Some(i) = stack.pop() {
            for e in g.edges() {
                let other = if e.source == ids[i] {
                    e.target
                } else if e.target == ids[i] {
                    e.source
                } else {
                    continue;
                };
                let j = pos(other);
                if !seen[j] {
                    seen[j] = true;
                    stack.push(j);
                }
            }
        }
    }
    comps
}

// Minimum weight over every edge subset that is a spanning forest with the
// same number of edges as a maximal forest.
fn brute_force_min_weight(g: &Graph) -> u64 {
    let ids: Vec<NodeId> = g.nodes().map(|n| n.id).collect();
    let edges: Vec<_> = g.edges().copied().collect();
    let target = ids.len() - component_count(g);
    let mut best = u64::MAX;
    for mask in 0u32..(1u32 << edges.len()) {
        if mask.count_ones() as usize != target {
            continue;
        }
        let mut ds = DisjointSet::new(ids.iter().copied());
        let mut weight = 0u64;
        let mut acyclic = true;
        for (i, e) in edges.iter().enumerate() {
            if mask & (1 << i) == 0 {
                continue;
            }
            if !ds.union(e.source, e.target).unwrap() {
                acyclic = false;
                break;
            }
            weight += u64::from(e.weight);
        }
        if acyclic {
            best = best.min(weight);
        }
    }
    best
}

fn small_graph() -> impl Strategy<Value = Graph> {
    (2usize..=6)
        .prop_flat_map(|n| {
            let pairs: Vec<(usize, usize)> = (0..n)
                .flat_map(|a| ((a + 1)..n).map(move |b| (a, b)))
                .collect();
            let m = pairs.len();
            (
                Just(n),
                Just(pairs),
                proptest::collection::vec(proptest::option::of(1u32..20), m),
            )
        })
        .prop_map(|(n, pairs, weights)| {
            let mut g = Graph::new();
            let ids: Vec<NodeId> = (0..n)
                .map(|i| g.add_node(i as f32, 0.0).unwrap())
                .collect();
            for ((a, b), w) in pairs.into_iter().zip(weights) {
                if let Some(w) = w {
                    g.add_edge(ids[a], ids[b], i64::from(w)).unwrap();
                }
            }
            g
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn mst_is_minimal_on_small_graphs(g in small_graph()) {
        let mst = compute_mst(&g).unwrap();
        let n = g.node_count();
        prop_assert!(mst.edges.len() <= n - 1);
        prop_assert_eq!(mst.fully_connected, component_count(&g) == 1);
        prop_assert_eq!(mst.edges.len(), n - component_count(&g));
        prop_assert_eq!(mst.total_weight, brute_force_min_weight(&g));
    }

    #[test]
    fn trace_agrees_with_mst(g in small_graph()) {
        let mst = compute_mst(&g).unwrap();
        let trace = generate_trace(&g).unwrap();
        prop_assert_eq!(trace.accepted_edges(), mst.edge_ids());
        prop_assert_eq!(trace.final_weight(), Some(mst.total_weight));
        prop_assert_eq!(trace.len(), g.edge_count() + 2);
        prop_assert_eq!(compute_mst(&g).unwrap(), mst);
    }

    #[test]
    fn edit_sequences_keep_the_graph_simple(ops in proptest::collection::vec(op_strategy(), 1..80)) {
        let mut g = Graph::new();
        for op in ops {
            apply_op(&mut g, op);
        }
        let edges: Vec<_> = g.edges().copied().collect();
        for (i, e) in edges.iter().enumerate() {
            prop_assert!(e.source != e.target);
            prop_assert!(e.weight >= 1);
            prop_assert!(g.node(e.source).is_some() && g.node(e.target).is_some());
            for f in &edges[i + 1..] {
                prop_assert!(!e.connects(f.source, f.target));
            }
        }
        let labels: std::collections::HashSet<_> = g.nodes().map(|n| n.label.clone()).collect();
        prop_assert_eq!(labels.len(), g.node_count());
        if g.node_count() >= 2 {
            let mst = compute_mst(&g).unwrap();
            prop_assert_eq!(mst.edges.len(), g.node_count() - component_count(&g));
        }
    }

    #[test]
    fn unions_agree_with_find(pairs in proptest::collection::vec((0u32..12, 0u32..12), 0..40)) {
        let ids: Vec<NodeId> = (0..12).map(NodeId::from_raw).collect();
        let mut ds = DisjointSet::new(ids.iter().copied());
        let mut joined: Vec<(NodeId, NodeId)> = Vec::new();
        for (a, b) in pairs {
            let (a, b) = (NodeId::from_raw(a), NodeId::from_raw(b));
            let was_connected = ds.connected(a, b).unwrap();
            prop_assert_eq!(ds.union(a, b).unwrap(), !was_connected);
            joined.push((a, b));
            for &(x, y) in &joined {
                prop_assert_eq!(ds.find(x).unwrap(), ds.find(y).unwrap());
            }
        }
        for id in &ids {
            let root = ds.find(*id).unwrap();
            prop_assert_eq!(ds.find(root).unwrap(), root);
        }
    }
}
