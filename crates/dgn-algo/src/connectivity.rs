//! Connectivity classification of a directed network.
//!
//! Classes, most specific first:
//! - **C3** strongly connected: every city reaches every other city
//! - **C2** weakly connected: connected once link directions are ignored
//! - **C1** not weakly connected, but some strongly connected component has
//!   more than one city
//! - **C0** disconnected: none of the above

use std::collections::{HashSet, VecDeque};
use std::fmt;

use dgn_core::{CityId, Network};
use petgraph::algo::tarjan_scc;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Connectivity {
    Strong,
    Weak,
    Unilateral,
    Disconnected,
}

impl Connectivity {
    pub fn code(&self) -> &'static str {
        match self {
            Connectivity::Strong => "C3",
            Connectivity::Weak => "C2",
            Connectivity::Unilateral => "C1",
            Connectivity::Disconnected => "C0",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Connectivity::Strong => "strongly connected",
            Connectivity::Weak => "weakly connected",
            Connectivity::Unilateral => "semi-strongly connected",
            Connectivity::Disconnected => "disconnected",
        }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description(), self.code())
    }
}

/// Classify the network, testing C3, C2, C1 in that order.
///
/// An empty network is C0.
pub fn classify_connectivity(network: &Network) -> Connectivity {
    if network.is_empty() {
        return Connectivity::Disconnected;
    }
    let components = strongly_connected_components(network);
    debug!(components = components.len(), "strongly connected components");
    let class = if components.len() == 1 {
        Connectivity::Strong
    } else if is_weakly_connected(network) {
        Connectivity::Weak
    } else if components.iter().any(|component| component.len() > 1) {
        Connectivity::Unilateral
    } else {
        Connectivity::Disconnected
    };
    debug!(class = class.code(), "classified connectivity");
    class
}

/// Strongly connected components, each sorted by id, ordered by smallest member.
pub fn strongly_connected_components(network: &Network) -> Vec<Vec<CityId>> {
    let graph = network.graph();
    let mut components: Vec<Vec<CityId>> = tarjan_scc(graph)
        .into_iter()
        .map(|component| {
            let mut ids: Vec<CityId> = component.into_iter().map(|node| graph[node].id).collect();
            ids.sort_unstable();
            ids
        })
        .collect();
    components.sort_by_key(|component| component.first().copied());
    components
}

/// Components of the undirected projection (breadth-first search), in the same order.
pub fn weak_components(network: &Network) -> Vec<Vec<CityId>> {
    let graph = network.graph();
    let mut visited = HashSet::new();
    let mut components = Vec::new();
    for start in network.city_ids() {
        if visited.contains(&start) {
            continue;
        }
        let mut queue = VecDeque::new();
        queue.push_back(start);
        let mut members = Vec::new();
        while let Some(city) = queue.pop_front() {
            if !visited.insert(city) {
                continue;
            }
            members.push(city);
            let Some(node) = network.node_index(city) else {
                continue;
            };
            for neighbor in graph.neighbors_undirected(node) {
                let id = graph[neighbor].id;
                if !visited.contains(&id) {
                    queue.push_back(id);
                }
            }
        }
        members.sort_unstable();
        components.push(members);
    }
    components
}

pub fn is_strongly_connected(network: &Network) -> bool {
    !network.is_empty() && strongly_connected_components(network).len() == 1
}

pub fn is_weakly_connected(network: &Network) -> bool {
    !network.is_empty() && weak_components(network).len() == 1
}
