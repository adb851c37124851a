//! # dgn-core: Distribution Grid Network Model
//!
//! Provides the graph store behind the `dgn` tool: a directed, weighted graph
//! whose vertices are cities and whose edges are power-flow links.
//!
//! ## Design
//!
//! The network is a **directed simple graph** where:
//! - **Nodes**: [`City`] values keyed by a caller-chosen [`CityId`]
//! - **Edges**: [`Link`] values carrying the cost of moving power along them
//!
//! At most one link exists per ordered pair of cities; inserting the same pair
//! again overwrites its weight. Every link endpoint is an existing city, which
//! is enforced on insertion rather than checked by each query.
//!
//! ## Quick Start
//!
//! ```rust
//! use dgn_core::*;
//!
//! let mut network = Network::new();
//! network.insert_city(CityId::new(0), "Recife", 120.5);
//! network.insert_city(CityId::new(1), "Olinda", 40.0);
//! network
//!     .insert_link(CityId::new(0), CityId::new(1), 3.5)
//!     .unwrap();
//!
//! assert_eq!(network.city_count(), 2);
//! assert_eq!(network.successors(CityId::new(0)), vec![CityId::new(1)]);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error kinds shared by every crate in the workspace
//! - [`graph_utils`] - Structural views (adjacency list/matrix, degrees, stats)

use std::collections::BTreeMap;
use std::fmt;

use petgraph::stable_graph::StableDiGraph;
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod error;
pub mod graph_utils;

pub use error::{DgnError, DgnResult};
pub use graph_utils::*;
pub use petgraph::graph::NodeIndex;

/// Identifier of a city, unique within a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityId(usize);

impl CityId {
    #[inline]
    pub fn new(value: usize) -> Self {
        CityId(value)
    }
    #[inline]
    pub fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
    /// Consumption figure attached to the city
    pub weight: f64,
}

/// A directed power-flow link; the endpoints live in the graph structure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Cost of the link, used by the path analyses
    pub weight: f64,
}

/// A link together with its endpoint ids.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkRecord {
    pub src: CityId,
    pub dst: CityId,
    pub weight: f64,
}

/// The graph store.
///
/// `index` maps every city id to its node, so its key set is always the set
/// of cities in the graph and iterating it yields ids in ascending order.
#[derive(Debug, Clone, Default)]
pub struct Network {
    graph: StableDiGraph<City, Link>,
    index: BTreeMap<CityId, NodeIndex>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn city_count(&self) -> usize {
        self.index.len()
    }

    pub fn link_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Add a city, or overwrite name and weight of an existing one.
    ///
    /// Links touching an existing city are kept.
    pub fn insert_city(&mut self, id: CityId, name: impl Into<String>, weight: f64) {
        let name = name.into();
        if let Some(&node) = self.index.get(&id) {
            debug!(city = %id, %name, weight, "overwriting city");
            let city = &mut self.graph[node];
            city.name = name;
            city.weight = weight;
            return;
        }
        debug!(city = %id, %name, weight, "inserting city");
        let node = self.graph.add_node(City { id, name, weight });
        self.index.insert(id, node);
    }

    /// Add a directed link, or overwrite the weight of an existing one.
    ///
    /// # Errors
    /// Returns [`DgnError::NotFound`] if either endpoint is not a city.
    pub fn insert_link(&mut self, src: CityId, dst: CityId, weight: f64) -> DgnResult<()> {
        let from = self.require(src)?;
        let to = self.require(dst)?;
        debug!(%src, %dst, weight, "inserting link");
        self.graph.update_edge(from, to, Link { weight });
        Ok(())
    }

    /// Remove a city and every link entering or leaving it.
    pub fn remove_city(&mut self, id: CityId) -> DgnResult<City> {
        let node = self
            .index
            .remove(&id)
            .ok_or_else(|| DgnError::city_not_found(id))?;
        let city = self
            .graph
            .remove_node(node)
            .ok_or_else(|| DgnError::city_not_found(id))?;
        debug!(city = %id, "removed city and its links");
        Ok(city)
    }

    pub fn remove_link(&mut self, src: CityId, dst: CityId) -> DgnResult<Link> {
        let edge = self
            .node_index(src)
            .zip(self.node_index(dst))
            .and_then(|(from, to)| self.graph.find_edge(from, to))
            .ok_or_else(|| DgnError::link_not_found(src, dst))?;
        let link = self
            .graph
            .remove_edge(edge)
            .ok_or_else(|| DgnError::link_not_found(src, dst))?;
        debug!(%src, %dst, "removed link");
        Ok(link)
    }

    pub fn contains_city(&self, id: CityId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn city(&self, id: CityId) -> Option<&City> {
        self.node_index(id).map(|node| &self.graph[node])
    }

    /// Human-readable name of a city, used when reporting paths.
    pub fn name(&self, id: CityId) -> Option<&str> {
        self.city(id).map(|city| city.name.as_str())
    }

    pub fn link(&self, src: CityId, dst: CityId) -> Option<&Link> {
        let (from, to) = self.node_index(src).zip(self.node_index(dst))?;
        let edge = self.graph.find_edge(from, to)?;
        self.graph.edge_weight(edge)
    }

    /// Cities in ascending id order.
    pub fn cities(&self) -> impl Iterator<Item = &City> + '_ {
        self.index.values().map(move |&node| &self.graph[node])
    }

    pub fn city_ids(&self) -> impl Iterator<Item = CityId> + '_ {
        self.index.keys().copied()
    }

    /// Every link, ordered by source id then destination id.
    pub fn links(&self) -> Vec<LinkRecord> {
        let mut links: Vec<LinkRecord> = self
            .graph
            .edge_references()
            .map(|edge| LinkRecord {
                src: self.graph[edge.source()].id,
                dst: self.graph[edge.target()].id,
                weight: edge.weight().weight,
            })
            .collect();
        links.sort_by_key(|link| (link.src, link.dst));
        links
    }

    /// Direct successors of a city in ascending id order; empty for unknown ids.
    pub fn successors(&self, id: CityId) -> Vec<CityId> {
        self.neighbors(id, Direction::Outgoing)
    }

    /// Direct predecessors of a city in ascending id order; empty for unknown ids.
    pub fn predecessors(&self, id: CityId) -> Vec<CityId> {
        self.neighbors(id, Direction::Incoming)
    }

    pub fn in_degree(&self, id: CityId) -> usize {
        self.degree(id, Direction::Incoming)
    }

    pub fn out_degree(&self, id: CityId) -> usize {
        self.degree(id, Direction::Outgoing)
    }

    pub fn node_index(&self, id: CityId) -> Option<NodeIndex> {
        self.index.get(&id).copied()
    }

    /// Underlying petgraph structure, for algorithms that walk it directly.
    pub fn graph(&self) -> &StableDiGraph<City, Link> {
        &self.graph
    }

    pub fn stats(&self) -> NetworkStats {
        NetworkStats {
            num_cities: self.city_count(),
            num_links: self.link_count(),
            total_city_weight: self.cities().map(|city| city.weight).sum(),
            total_link_weight: self
                .graph
                .edge_references()
                .map(|edge| edge.weight().weight)
                .sum(),
        }
    }

    fn require(&self, id: CityId) -> DgnResult<NodeIndex> {
        self.node_index(id).ok_or_else(|| DgnError::city_not_found(id))
    }

    fn neighbors(&self, id: CityId, direction: Direction) -> Vec<CityId> {
        let Some(node) = self.node_index(id) else {
            return Vec::new();
        };
        let mut ids: Vec<CityId> = self
            .graph
            .neighbors_directed(node, direction)
            .map(|other| self.graph[other].id)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    fn degree(&self, id: CityId, direction: Direction) -> usize {
        self.node_index(id)
            .map(|node| self.graph.edges_directed(node, direction).count())
            .unwrap_or(0)
    }
}

/// Structural equality: same cities (id, name, weight) and same links.
impl PartialEq for Network {
    fn eq(&self, other: &Self) -> bool {
        self.cities().eq(other.cities()) && self.links() == other.links()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkStats {
    pub num_cities: usize,
    pub num_links: usize,
    pub total_city_weight: f64,
    pub total_link_weight: f64,
}

impl fmt::Display for NetworkStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} cities (total weight {:.2}), {} links (total cost {:.2})",
            self.num_cities, self.total_city_weight, self.num_links, self.total_link_weight
        )
    }
}
