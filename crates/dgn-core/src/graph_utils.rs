use std::fmt;

use crate::{CityId, Network};

/// One row of the adjacency list: a city and its sorted direct successors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyEntry {
    pub city: CityId,
    pub successors: Vec<CityId>,
}

/// Square 0/1 matrix over cities in ascending id order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    pub ids: Vec<CityId>,
    pub cells: Vec<Vec<u8>>,
}

impl AdjacencyMatrix {
    /// Cell value for the ordered pair, `None` when either id is not a row.
    pub fn get(&self, src: CityId, dst: CityId) -> Option<u8> {
        let row = self.ids.binary_search(&src).ok()?;
        let col = self.ids.binary_search(&dst).ok()?;
        Some(self.cells[row][col])
    }
}

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        let header: Vec<String> = self.ids.iter().map(|id| format!("{:>2}", id.value())).collect();
        writeln!(f, "{}", header.join(" "))?;
        for (id, row) in self.ids.iter().zip(&self.cells) {
            let cells: Vec<String> = row.iter().map(|cell| format!("{cell:>2}")).collect();
            writeln!(f, "{:>2} {}", id.value(), cells.join(" "))?;
        }
        Ok(())
    }
}

/// In/out degree of a single city (useful for spotting sources and sinks).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegreeReport {
    pub city: CityId,
    pub in_degree: usize,
    pub out_degree: usize,
}

/// Adjacency list in ascending city order.
///
/// Returns a materialised vector, so it can be iterated any number of times.
pub fn adjacency_list(network: &Network) -> Vec<AdjacencyEntry> {
    network
        .city_ids()
        .map(|city| AdjacencyEntry {
            city,
            successors: network.successors(city),
        })
        .collect()
}

pub fn adjacency_matrix(network: &Network) -> AdjacencyMatrix {
    let ids: Vec<CityId> = network.city_ids().collect();
    let mut cells = vec![vec![0u8; ids.len()]; ids.len()];
    for link in network.links() {
        // both endpoints are cities, so both searches succeed
        if let (Ok(row), Ok(col)) = (ids.binary_search(&link.src), ids.binary_search(&link.dst)) {
            cells[row][col] = 1;
        }
    }
    AdjacencyMatrix { ids, cells }
}

pub fn degrees(network: &Network) -> Vec<DegreeReport> {
    network
        .city_ids()
        .map(|city| DegreeReport {
            city,
            in_degree: network.in_degree(city),
            out_degree: network.out_degree(city),
        })
        .collect()
}
