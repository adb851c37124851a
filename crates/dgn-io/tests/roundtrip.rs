//! Save/load round-trip tests against real files.

use anyhow::Result;
use dgn_core::{CityId, DgnError, Network};
use dgn_io::{load_graph, read_graph_text, save_graph, GRAPH_TYPE_TAG};
use std::fs;
use tempfile::TempDir;

fn sample_network() -> Network {
    let mut network = Network::new();
    network.insert_city(CityId::new(0), "Recife", 1_654_366.25);
    network.insert_city(CityId::new(3), "Caruaru", 0.1);
    network.insert_city(CityId::new(1), "Petrolina \"Sertao\"", 1.0 / 3.0);
    network.insert_city(CityId::new(7), "Garanhuns", 0.0);
    for (src, dst, weight) in [
        (0, 1, 712.4),
        (1, 0, 0.1 + 0.2),
        (3, 7, 98.0),
        (7, 7, 1e-7),
        (0, 3, -4.5),
    ] {
        network
            .insert_link(CityId::new(src), CityId::new(dst), weight)
            .unwrap();
    }
    network
}

#[test]
fn save_then_load_preserves_network() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("grafo.txt");
    let network = sample_network();

    save_graph(&network, &path)?;
    let parsed = load_graph(&path)?;

    assert_eq!(parsed.graph_type, GRAPH_TYPE_TAG);
    assert_eq!(parsed.network, network, "network changed across save/load");
    for city in network.cities() {
        let reloaded = parsed.network.city(city.id).expect("city survives");
        assert_eq!(reloaded.weight, city.weight);
    }
    Ok(())
}

#[test]
fn save_replaces_existing_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("grafo.txt");
    fs::write(&path, "stale content that is much longer than the new file\n".repeat(10))?;

    let mut network = Network::new();
    network.insert_city(CityId::new(0), "Recife", 1.0);
    save_graph(&network, &path)?;

    assert_eq!(read_graph_text(&path)?, "7\n1\n0 \"Recife\" \"1\"\n0\n");
    Ok(())
}

#[test]
fn malformed_file_leaves_current_network_alone() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("broken.txt");
    fs::write(&path, "7\n2\n0 \"Recife\" \"1\"\n1 Olinda 2\n0\n")?;

    let current = sample_network();
    let mut active = current.clone();
    match load_graph(&path) {
        Ok(parsed) => active = parsed.network,
        Err(DgnError::Format { line, .. }) => assert_eq!(line, 4),
        Err(other) => panic!("unexpected error {other:?}"),
    }
    assert_eq!(active, current);
    Ok(())
}

#[test]
fn missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = load_graph(temp_dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, DgnError::Io(_)));
}

#[test]
fn unusual_city_values_survive_save_and_load() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("grafo.txt");
    let mut network = Network::new();
    network.insert_city(CityId::new(0), "Deficit", -1.5);
    network.insert_city(CityId::new(1), "", 2.0);
    network.insert_city(CityId::new(2), "Sobral", f64::INFINITY);
    network.insert_city(CityId::new(3), "Crato", f64::NEG_INFINITY);
    network.insert_link(CityId::new(0), CityId::new(1), -0.25)?;

    save_graph(&network, &path)?;
    let reloaded = load_graph(&path)?.network;
    assert_eq!(reloaded, network);

    // NaN never compares equal, so it is checked on its own
    network.insert_city(CityId::new(4), "Iguatu", f64::NAN);
    save_graph(&network, &path)?;
    let reloaded = load_graph(&path)?.network;
    assert_eq!(reloaded.city_count(), 5);
    assert!(reloaded.city(CityId::new(4)).expect("city survives").weight.is_nan());
    assert_eq!(reloaded.name(CityId::new(1)), Some(""));
    Ok(())
}

#[test]
fn name_with_line_break_is_refused_and_file_kept() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("grafo.txt");
    let mut network = sample_network();
    save_graph(&network, &path)?;
    let before = read_graph_text(&path)?;

    network.insert_city(CityId::new(9), "Boa\nVista", 1.0);
    let err = save_graph(&network, &path).unwrap_err();
    assert!(matches!(err, DgnError::InvalidName { .. }));
    assert_eq!(read_graph_text(&path)?, before);
    Ok(())
}
