use anyhow::Result;
use dgn_algo::{
    all_pairs_shortest_paths, classify_connectivity, greedy_coloring, is_eulerian, shortest_path,
};
use dgn_cli::Session;
use dgn_core::CityId;
use serde_json::json;

use super::Output;

pub fn connectivity(session: &Session, out: &Output) -> Result<()> {
    let class = classify_connectivity(session.network());
    if out.is_json() {
        return out.json(&json!({
            "class": class,
            "code": class.code(),
        }));
    }
    println!("The graph is {class}.");
    Ok(())
}

pub fn path(session: &Session, src: usize, dst: usize, out: &Output) -> Result<()> {
    let path = shortest_path(session.network(), CityId::new(src), CityId::new(dst))?;
    if out.is_json() {
        return out.json(&path);
    }
    println!(
        "Shortest path from {src} to {dst} ({}): cost = {}",
        path.names.join(" -> "),
        out.cost(path.cost)
    );
    Ok(())
}

pub fn all_pairs(session: &Session, out: &Output) -> Result<()> {
    let pairs = all_pairs_shortest_paths(session.network())?;
    if out.is_json() {
        return out.json(&pairs);
    }
    for pair in &pairs {
        println!(
            "{} -> {}: cost = {}",
            pair.from_name,
            pair.to_name,
            out.cost(pair.cost)
        );
    }
    Ok(())
}

pub fn eulerian(session: &Session, out: &Output) -> Result<()> {
    let eulerian = is_eulerian(session.network());
    if out.is_json() {
        return out.json(&json!({ "eulerian": eulerian }));
    }
    if eulerian {
        println!("The graph is Eulerian.");
    } else {
        println!("The graph is NOT Eulerian.");
    }
    Ok(())
}

pub fn coloring(session: &Session, out: &Output) -> Result<()> {
    let coloring = greedy_coloring(session.network());
    if out.is_json() {
        return out.json(&coloring);
    }
    for (city, color) in &coloring.colors {
        println!("City {city} -> color {color}");
    }
    println!("{} color(s) used", coloring.color_count());
    Ok(())
}
