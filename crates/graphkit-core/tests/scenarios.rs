//! End-to-end scenarios through the public API: text files on disk, the
//! algorithms on top, and JSON output.

use std::fs::File;
use std::io::{BufReader, Write};

use graphkit_core::cpm::{read_jobs, CriticalPath};
use graphkit_core::graph::{
    read_weighted_edge_list, Direction, EdgeListOptions, Graph, GraphEdge, GraphSnapshot,
    WeightedEdge,
};
use graphkit_core::mst::{MstAlgorithm, SpanningTree};
use graphkit_core::paths::{DijkstraPaths, WeightedPaths};

const MST_EDGES: &str = "\
# six connected vertices, four isolated ones
0 1 7
1 2 4
1 3 4
1 4 11
2 5 5
3 4 6
3 5 3
4 5 13
9 9 0
";

const TINY_EWD: &str = "\
4 5 0.35
5 4 0.35
4 7 0.37
5 7 0.28
7 5 0.28
5 1 0.32
0 4 0.38
0 2 0.26
7 3 0.39
1 3 0.29
2 7 0.34
6 2 0.40
3 6 0.52
6 0 0.58
6 4 0.93
";

const JOBS_PC: &str = "\
10
41.0 1 7 9
51.0 2
50.0
36.0
38.0
45.0
21.0 3 8
32.0 3 8
32.0 2
29.0 4 6
";

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn load_weighted(contents: &str, direction: Direction) -> Graph<WeightedEdge> {
    let file = write_temp(contents);
    let reader = BufReader::new(File::open(file.path()).unwrap());
    read_weighted_edge_list(reader, &EdgeListOptions::new(direction)).unwrap()
}

fn normalized(edge: &WeightedEdge) -> (usize, usize, f64) {
    let (v, w) = (edge.source(), edge.target());
    (v.min(w), v.max(w), edge.weight())
}

#[test]
fn test_mst_scenario_from_file() {
    let graph = load_weighted(MST_EDGES, Direction::Undirected);
    assert_eq!(graph.vertex_count(), 10);

    for algorithm in MstAlgorithm::ALL {
        let mst = algorithm.compute(&graph).unwrap();
        assert_eq!(mst.weight(), 24.0, "{algorithm}");

        let edges: Vec<(usize, usize, f64)> = mst.edges().iter().map(normalized).collect();
        for expected in [(0, 1, 7.0), (1, 2, 4.0), (1, 3, 4.0), (3, 5, 3.0), (3, 4, 6.0)] {
            assert!(edges.contains(&expected), "{algorithm} misses {expected:?}");
        }
        for excluded in [(1, 4, 11.0), (2, 5, 5.0), (4, 5, 13.0)] {
            assert!(!edges.contains(&excluded), "{algorithm} keeps {excluded:?}");
        }
    }
}

#[test]
fn test_dijkstra_scenario_from_file() {
    let graph = load_weighted(TINY_EWD, Direction::Directed);
    let paths = DijkstraPaths::new(&graph, 0).unwrap();

    assert!((paths.dist_to(6) - 1.51).abs() < 1e-9);
    assert!((paths.dist_to(5) - 0.73).abs() < 1e-9);
    assert!((paths.dist_to(1) - 1.05).abs() < 1e-9);
    assert!(!paths.has_path_to(8));
}

#[test]
fn test_critical_path_scenario_from_file() {
    let file = write_temp(JOBS_PC);
    let jobs = read_jobs(BufReader::new(File::open(file.path()).unwrap())).unwrap();
    let cpm = CriticalPath::new(&jobs).unwrap();

    assert_eq!(cpm.earliest_start(2), 123.0);
    assert_eq!(cpm.earliest_start(8), 91.0);
    assert_eq!(cpm.completion_time(), 173.0);
}

#[test]
fn test_snapshot_json_round_trip() {
    let graph = load_weighted(TINY_EWD, Direction::Directed);
    let json = serde_json::to_string(&graph.snapshot()).unwrap();

    let snapshot: GraphSnapshot<WeightedEdge> = serde_json::from_str(&json).unwrap();
    assert_eq!(snapshot.direction, Direction::Directed);
    let restored = Graph::try_from(snapshot).unwrap();
    assert_eq!(restored.edges(), graph.edges());

    let paths = DijkstraPaths::new(&restored, 0).unwrap();
    let summary = serde_json::to_value(paths.summary(6)).unwrap();
    assert_eq!(summary["target"], 6);
    assert_eq!(summary["mode"], "shortest");
    assert_eq!(summary["edges"].as_array().unwrap().len(), 4);
}

#[test]
fn test_snapshot_with_bad_vertex_is_rejected() {
    let json = r#"{"vertex_count":2,"direction":"undirected","edges":[{"v":0,"w":5,"weight":1.0}]}"#;
    let snapshot: GraphSnapshot<WeightedEdge> = serde_json::from_str(json).unwrap();
    assert!(Graph::try_from(snapshot).is_err());
}

#[test]
fn test_symbol_graph_degrees_of_separation() {
    use graphkit_core::graph::{BreadthFirstPaths, Paths, SymbolGraph};

    let file = write_temp(
        "Movie A/Alice/Bob\n\
         Movie B/Bob/Carol\n\
         Movie C/Carol/Dave\n\
         Movie D/Erin\n",
    );
    let reader = BufReader::new(File::open(file.path()).unwrap());
    let symbols = SymbolGraph::from_reader(reader, "/", Direction::Undirected).unwrap();

    let alice = symbols.index_of("Alice").unwrap();
    let dave = symbols.index_of("Dave").unwrap();
    let bfs = BreadthFirstPaths::new(symbols.graph(), alice).unwrap();

    assert_eq!(
        symbols.path_names(&bfs.path_to(dave)),
        vec!["Alice", "Movie A", "Bob", "Movie B", "Carol", "Movie C", "Dave"]
    );
    assert!(!bfs.has_path_to(symbols.index_of("Erin").unwrap()));
}
