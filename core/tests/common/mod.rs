#![allow(dead_code)]

use citypath_core::{Graph, GraphConfig, NodeIndex, Point, build_graph};
use std::collections::VecDeque;

/// A(0,0) B(0,1) C(0,2) D(1,2) E(2,2)
pub fn corner_points() -> Vec<Point> {
    vec![
        Point::new("A", 0.0, 0.0).unwrap(),
        Point::new("B", 0.0, 1.0).unwrap(),
        Point::new("C", 0.0, 2.0).unwrap(),
        Point::new("D", 1.0, 2.0).unwrap(),
        Point::new("E", 2.0, 2.0).unwrap(),
    ]
}

pub fn corner_graph() -> Graph {
    let config = GraphConfig {
        neighbors: 2,
        ..Default::default()
    };
    build_graph(corner_points(), &config).unwrap()
}

/// Two tight groups of four points, thousands of km apart.
pub fn two_cluster_points() -> Vec<Point> {
    vec![
        Point::new("west-1", 0.0, 0.0).unwrap(),
        Point::new("west-2", 0.0, 0.1).unwrap(),
        Point::new("west-3", 0.1, 0.0).unwrap(),
        Point::new("west-4", 0.1, 0.1).unwrap(),
        Point::new("east-1", 50.0, 50.0).unwrap(),
        Point::new("east-2", 50.0, 50.1).unwrap(),
        Point::new("east-3", 50.1, 50.0).unwrap(),
        Point::new("east-4", 50.1, 50.1).unwrap(),
    ]
}

pub fn two_cluster_graph() -> Graph {
    let config = GraphConfig {
        neighbors: 2,
        ..Default::default()
    };
    build_graph(two_cluster_points(), &config).unwrap()
}

pub fn malaysia_points() -> Vec<Point> {
    [
        ("Kuala Lumpur", 3.1390, 101.6869),
        ("George Town", 5.4141, 100.3288),
        ("Ipoh", 4.5975, 101.0901),
        ("Johor Bahru", 1.4927, 103.7414),
        ("Malacca", 2.1896, 102.2501),
        ("Kuantan", 3.8077, 103.3260),
        ("Kota Bharu", 6.1254, 102.2381),
        ("Kuala Terengganu", 5.3296, 103.1370),
        ("Alor Setar", 6.1248, 100.3678),
        ("Seremban", 2.7258, 101.9424),
        ("Shah Alam", 3.0733, 101.5185),
        ("Kuching", 1.5535, 110.3593),
        ("Sibu", 2.2873, 111.8305),
        ("Miri", 4.3995, 113.9914),
        ("Kota Kinabalu", 5.9804, 116.0735),
        ("Sandakan", 5.8402, 118.1179),
    ]
    .into_iter()
    .map(|(name, lat, lng)| Point::new(name, lat, lng).unwrap())
    .collect()
}

pub fn malaysia_graph() -> Graph {
    build_graph(malaysia_points(), &GraphConfig::default()).unwrap()
}

/// Hop distance from `start` to every node, computed by relaxing edges until
/// nothing changes. Shares no code with the library search.
pub fn reference_hops(graph: &Graph, start: NodeIndex) -> Vec<Option<usize>> {
    let mut hops = vec![None; graph.node_count()];
    hops[start] = Some(0);

    let mut changed = true;
    while changed {
        changed = false;
        for edge in graph.edges() {
            for (from, to) in [(edge.a, edge.b), (edge.b, edge.a)] {
                if let Some(h) = hops[from] {
                    if hops[to].is_none_or(|current| h + 1 < current) {
                        hops[to] = Some(h + 1);
                        changed = true;
                    }
                }
            }
        }
    }

    hops
}

/// Connected component label per node, walking the edge list.
pub fn component_labels(graph: &Graph) -> Vec<usize> {
    let n = graph.node_count();
    let mut labels = vec![usize::MAX; n];
    let mut next_label = 0;

    for seed in 0..n {
        if labels[seed] != usize::MAX {
            continue;
        }
        let mut queue = VecDeque::from([seed]);
        labels[seed] = next_label;
        while let Some(node) = queue.pop_front() {
            for edge in graph.edges() {
                let other = if edge.a == node {
                    edge.b
                } else if edge.b == node {
                    edge.a
                } else {
                    continue;
                };
                if labels[other] == usize::MAX {
                    labels[other] = next_label;
                    queue.push_back(other);
                }
            }
        }
        next_label += 1;
    }

    labels
}
