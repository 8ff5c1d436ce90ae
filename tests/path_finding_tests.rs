use csr_dijkstra::graph::generators::grid_2d;
use csr_dijkstra::graph::{CsrGraphBuf, Graph};
use csr_dijkstra::{Dijkstra, MultiSourceDijkstra, SolverConfig};

// Test helper: grid where the vertices listed in `blocked` have no edges at all
fn create_grid_with_obstacles(width: usize, height: usize, blocked: &[usize]) -> CsrGraphBuf<f64> {
    let grid = grid_2d(width, height);
    let view = grid.view();
    let mut edges = Vec::new();
    for u in 0..view.num_vertices() {
        for (v, w) in view.neighbors(u).unwrap() {
            if !blocked.contains(&u) && !blocked.contains(&v) {
                edges.push((u, v, w));
            }
        }
    }
    CsrGraphBuf::from_edges(width * height, &edges).unwrap()
}

fn has_edge(graph: &CsrGraphBuf<f64>, from: usize, to: usize) -> Option<f64> {
    graph
        .outgoing_edges(from)
        .unwrap()
        .find(|&(v, _)| v == to)
        .map(|(_, w)| w)
}

// Test that paths can be found in a simple grid
#[test]
fn test_path_finding_simple_grid() {
    let graph = grid_2d(10, 10);
    let source = 0; // Top-left corner (0,0)
    let target = 99; // Bottom-right corner (9,9)

    let tree = Dijkstra::new().compute(&graph, source, f64::INFINITY).unwrap();
    assert!(tree.is_reached(target));
    assert_eq!(tree.distances[target], 18.0, "Manhattan distance across the grid");

    let path = tree.path_to(target).expect("Dijkstra should construct a path");
    assert_eq!(path[0], source, "Path should start at source");
    assert_eq!(path[path.len() - 1], target, "Path should end at target");
    assert_eq!(path.len(), 19);
}

// Test that a cutoff leaves the far corner unreached
#[test]
fn test_path_finding_within_cutoff() {
    let graph = grid_2d(10, 10);
    let tree = Dijkstra::new().compute(&graph, 0, 5.0).unwrap();

    assert!(tree.is_reached(5), "five steps along the top row");
    assert!(tree.is_reached(14), "four right and one down");
    assert!(!tree.is_reached(99));
    assert_eq!(tree.path_to(99), None);
    assert_eq!(tree.path_to(14).map(|p| p.len()), Some(6));
}

// Test path finding with obstacles
#[test]
fn test_path_finding_with_obstacles() {
    // Wall in column 5, open only in the last two rows
    let blocked: Vec<usize> = (0..8).map(|y| y * 10 + 5).collect();
    let graph = create_grid_with_obstacles(10, 10, &blocked);

    let matrix = MultiSourceDijkstra::new().solve(&graph, &[0]).unwrap();
    let target = 9; // Top-right corner, behind the wall

    // Down to row 8, across, and back up
    assert_eq!(matrix.distance(0, target), 8.0 + 9.0 + 8.0);

    let path = matrix.path_to(0, target).expect("should route around the wall");
    assert!(path.iter().all(|v| !blocked.contains(v)), "Path must avoid obstacles");
    for pair in path.windows(2) {
        assert!(has_edge(&graph, pair[0], pair[1]).is_some(), "Path should only use existing edges");
    }
}

// Test several named locations solved in one batch
#[test]
fn test_city_pathfinding() {
    let width = 25;
    let height = 18;
    let buildings: Vec<usize> = [(3, 3), (4, 3), (5, 3), (3, 4), (4, 4), (5, 4), (10, 10), (11, 10), (10, 11), (11, 11)]
        .iter()
        .map(|&(x, y)| y * width + x)
        .collect();
    let graph = create_grid_with_obstacles(width, height, &buildings);

    let locations = [("home", (0, 0)), ("work", (20, 15)), ("gym", (15, 8)), ("park", (8, 12))];
    let sources: Vec<usize> = locations.iter().map(|&(_, (x, y))| y * width + x).collect();

    let config = SolverConfig::default().with_parallelism(4);
    let matrix = MultiSourceDijkstra::with_config(config)
        .unwrap()
        .solve(&graph, &sources)
        .unwrap();

    for (row, (from_name, _)) in locations.iter().enumerate() {
        for (col, (to_name, _)) in locations.iter().enumerate() {
            if row == col {
                continue;
            }
            let target = sources[col];
            let path = matrix
                .path_to(row, target)
                .unwrap_or_else(|| panic!("Should construct a path from {} to {}", from_name, to_name));

            assert_eq!(path[0], sources[row], "Path should start at source");
            assert_eq!(path[path.len() - 1], target, "Path should end at target");

            let length: f64 = path
                .windows(2)
                .map(|pair| has_edge(&graph, pair[0], pair[1]).expect("Path should only use existing edges"))
                .sum();
            assert_eq!(length, matrix.distance(row, target));
        }
    }
}
