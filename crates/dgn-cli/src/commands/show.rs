use std::io::{self, Write};

use anyhow::Result;
use dgn_cli::Session;
use dgn_core::graph_utils;
use serde_json::json;

use super::Output;

pub fn show_file(session: &Session, out: &Output) -> Result<()> {
    let contents = session.show_file()?;
    if out.is_json() {
        return out.json(&json!({
            "path": session.path().display().to_string(),
            "contents": contents,
        }));
    }
    print!("{contents}");
    if !contents.ends_with('\n') {
        println!();
    }
    Ok(())
}

pub fn show_graph(session: &Session, out: &Output) -> Result<()> {
    let network = session.network();
    let list = graph_utils::adjacency_list(network);
    let matrix = graph_utils::adjacency_matrix(network);
    if out.is_json() {
        let adjacency: Vec<_> = list
            .iter()
            .map(|entry| json!({ "city": entry.city, "successors": entry.successors }))
            .collect();
        return out.json(&json!({
            "adjacency_list": adjacency,
            "adjacency_matrix": { "ids": matrix.ids, "cells": matrix.cells },
        }));
    }

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Adjacency list:")?;
    for entry in &list {
        let successors: Vec<String> = entry.successors.iter().map(ToString::to_string).collect();
        writeln!(stdout, "{}: [{}]", entry.city, successors.join(", "))?;
    }
    writeln!(stdout)?;
    writeln!(stdout, "Adjacency matrix:")?;
    write!(stdout, "{matrix}")?;
    Ok(())
}

pub fn stats(session: &Session, out: &Output) -> Result<()> {
    let stats = session.network().stats();
    if out.is_json() {
        return out.json(&json!({
            "cities": stats.num_cities,
            "links": stats.num_links,
            "total_city_weight": stats.total_city_weight,
            "total_link_weight": stats.total_link_weight,
        }));
    }
    println!("Graph statistics for {}:", session.path().display());
    println!("  {stats}");
    Ok(())
}

pub fn degrees(session: &Session, out: &Output) -> Result<()> {
    let reports = graph_utils::degrees(session.network());
    if out.is_json() {
        let rows: Vec<_> = reports
            .iter()
            .map(|report| {
                json!({
                    "city": report.city,
                    "in": report.in_degree,
                    "out": report.out_degree,
                })
            })
            .collect();
        return out.json(&rows);
    }
    for report in &reports {
        println!(
            "{} - In: {}, Out: {}",
            report.city, report.in_degree, report.out_degree
        );
    }
    Ok(())
}
