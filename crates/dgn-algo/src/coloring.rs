//! Greedy vertex coloring (largest-first).
//!
//! Links are projected onto a simple undirected graph: two cities are
//! neighbours if a link exists in either direction, self-loops are dropped
//! and weights are ignored. Cities are then visited by descending degree,
//! ties broken by ascending id, and each takes the smallest color not used
//! by an already-colored neighbour. The result groups cities into clusters
//! with no two adjacent cities sharing a cluster; it is not guaranteed to use
//! the minimum number of colors.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};

use dgn_core::{CityId, Network};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coloring {
    /// Color index (0-based) of every city
    pub colors: BTreeMap<CityId, usize>,
}

impl Coloring {
    pub fn color_of(&self, city: CityId) -> Option<usize> {
        self.colors.get(&city).copied()
    }

    /// Number of distinct colors used.
    pub fn color_count(&self) -> usize {
        self.colors.values().collect::<BTreeSet<_>>().len()
    }
}

pub fn greedy_coloring(network: &Network) -> Coloring {
    let adjacency = undirected_adjacency(network);

    let mut order: Vec<CityId> = adjacency.keys().copied().collect();
    order.sort_by_key(|city| (Reverse(adjacency[city].len()), *city));

    let mut colors: BTreeMap<CityId, usize> = BTreeMap::new();
    for city in order {
        let taken: BTreeSet<usize> = adjacency[&city]
            .iter()
            .filter_map(|neighbor| colors.get(neighbor).copied())
            .collect();
        let color = (0..).find(|color| !taken.contains(color)).unwrap_or(0);
        colors.insert(city, color);
    }

    let coloring = Coloring { colors };
    debug!(colors = coloring.color_count(), "greedy coloring");
    coloring
}

fn undirected_adjacency(network: &Network) -> BTreeMap<CityId, BTreeSet<CityId>> {
    let mut adjacency: BTreeMap<CityId, BTreeSet<CityId>> = network
        .city_ids()
        .map(|city| (city, BTreeSet::new()))
        .collect();
    for link in network.links() {
        if link.src == link.dst {
            continue;
        }
        adjacency.entry(link.src).or_default().insert(link.dst);
        adjacency.entry(link.dst).or_default().insert(link.src);
    }
    adjacency
}
