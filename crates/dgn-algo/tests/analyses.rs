//! End-to-end analyses over a graph loaded from the reference data file.

use dgn_algo::{
    all_pairs_shortest_paths, classify_connectivity, greedy_coloring, is_eulerian,
    shortest_path, Connectivity,
};
use dgn_core::{CityId, DgnError};
use dgn_io::{load_graph, parse_graph_str};
use std::path::PathBuf;

fn repo_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join(relative)
}

#[test]
fn reference_grid_analyses() {
    let network = load_graph(repo_path("test_data/grafo.txt")).unwrap().network;

    assert_eq!(classify_connectivity(&network), Connectivity::Strong);

    // Porto Alegre is only reachable through Curitiba
    let path = shortest_path(&network, CityId::new(1), CityId::new(4)).unwrap();
    assert_eq!(path.names, vec!["Rio de Janeiro", "Sao Paulo", "Curitiba", "Porto Alegre"]);
    assert!((path.cost - 15.8).abs() < 1e-9);

    let pairs = all_pairs_shortest_paths(&network).unwrap();
    assert_eq!(pairs.len(), 6 * 5);

    assert!(!is_eulerian(&network));

    let coloring = greedy_coloring(&network);
    for link in network.links() {
        assert_ne!(coloring.color_of(link.src), coloring.color_of(link.dst));
    }
}

#[test]
fn three_city_shortest_path() {
    let network = parse_graph_str("7\n3\n0 \"A\" \"1\"\n1 \"B\" \"1\"\n2 \"C\" \"1\"\n3\n0 1 1.0\n1 2 2.0\n0 2 5.0\n")
        .unwrap()
        .network;
    let path = shortest_path(&network, CityId::new(0), CityId::new(2)).unwrap();
    assert_eq!(path.cities, vec![CityId::new(0), CityId::new(1), CityId::new(2)]);
    assert_eq!(path.cost, 3.0);
    assert!(matches!(
        shortest_path(&network, CityId::new(2), CityId::new(0)),
        Err(DgnError::PathNotFound { .. })
    ));
}

#[test]
fn eulerian_cycle_and_broken_cycle() {
    let mut network =
        parse_graph_str("7\n3\n0 \"A\" \"1\"\n1 \"B\" \"1\"\n2 \"C\" \"1\"\n3\n0 1 1\n1 2 1\n2 0 1\n")
            .unwrap()
            .network;
    assert!(is_eulerian(&network));
    network.remove_link(CityId::new(2), CityId::new(0)).unwrap();
    assert!(!is_eulerian(&network));
    assert_eq!(classify_connectivity(&network), Connectivity::Weak);
}

#[test]
fn results_serialize_to_json() {
    let network = load_graph(repo_path("test_data/grafo.txt")).unwrap().network;
    let json = serde_json::to_value(classify_connectivity(&network)).unwrap();
    assert_eq!(json, serde_json::json!("strong"));
    let coloring = serde_json::to_value(greedy_coloring(&network)).unwrap();
    assert!(coloring["colors"]["0"].is_number());
}
