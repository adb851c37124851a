//! Shortest-path queries over link costs.

use dgn_core::{CityId, DgnError, DgnResult, Network};
use petgraph::algo::astar;
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Minimum-cost directed path between two cities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPath {
    pub cities: Vec<CityId>,
    pub names: Vec<String>,
    pub cost: f64,
}

/// Finite shortest distance between two distinct cities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairDistance {
    pub from: CityId,
    pub to: CityId,
    pub from_name: String,
    pub to_name: String,
    pub cost: f64,
}

/// Dijkstra search from `src` to `dst`.
///
/// # Errors
/// - [`DgnError::NegativeWeight`] if any link cost is negative, infinite or NaN
/// - [`DgnError::PathNotFound`] if either city is absent or `dst` is unreachable
pub fn shortest_path(network: &Network, src: CityId, dst: CityId) -> DgnResult<ShortestPath> {
    let invalid = network
        .links()
        .into_iter()
        .find(|link| link.weight < 0.0 || !link.weight.is_finite());
    if let Some(link) = invalid {
        return Err(DgnError::NegativeWeight {
            src: link.src,
            dst: link.dst,
            weight: link.weight,
        });
    }
    let not_found = || DgnError::PathNotFound { src, dst };
    let start = network.node_index(src).ok_or_else(not_found)?;
    let goal = network.node_index(dst).ok_or_else(not_found)?;

    let graph = network.graph();
    let (cost, nodes) = astar(
        graph,
        start,
        |node| node == goal,
        |edge| edge.weight().weight,
        |_| 0.0,
    )
    .ok_or_else(not_found)?;

    let cities: Vec<CityId> = nodes.iter().map(|&node| graph[node].id).collect();
    let names = nodes.iter().map(|&node| graph[node].name.clone()).collect();
    debug!(%src, %dst, cost, hops = cities.len().saturating_sub(1), "shortest path");
    Ok(ShortestPath {
        cities,
        names,
        cost,
    })
}

/// Floyd–Warshall distances between every ordered pair of distinct cities.
///
/// Unreachable pairs are omitted. Results are ordered by (from, to).
/// Negative link costs are allowed as long as no cycle has negative total cost.
pub fn all_pairs_shortest_paths(network: &Network) -> DgnResult<Vec<PairDistance>> {
    let ids: Vec<CityId> = network.city_ids().collect();
    let n = ids.len();
    let mut dist = vec![vec![f64::INFINITY; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = 0.0;
    }
    for link in network.links() {
        if let (Ok(i), Ok(j)) = (ids.binary_search(&link.src), ids.binary_search(&link.dst)) {
            dist[i][j] = dist[i][j].min(link.weight);
        }
    }

    for k in 0..n {
        for i in 0..n {
            if dist[i][k] == f64::INFINITY {
                continue;
            }
            for j in 0..n {
                let through = dist[i][k] + dist[k][j];
                if through < dist[i][j] {
                    dist[i][j] = through;
                }
            }
        }
    }

    if (0..n).any(|i| dist[i][i] < 0.0) {
        return Err(DgnError::NegativeCycle);
    }

    let mut pairs = Vec::new();
    for (i, &from) in ids.iter().enumerate() {
        for (j, &to) in ids.iter().enumerate() {
            if i == j || dist[i][j] == f64::INFINITY {
                continue;
            }
            pairs.push(PairDistance {
                from,
                to,
                from_name: network.name(from).unwrap_or_default().to_string(),
                to_name: network.name(to).unwrap_or_default().to_string(),
                cost: dist[i][j],
            });
        }
    }
    debug!(cities = n, pairs = pairs.len(), "all-pairs shortest paths");
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: usize) -> CityId {
        CityId::new(value)
    }

    fn abc() -> Network {
        let mut network = Network::new();
        network.insert_city(id(0), "A", 0.0);
        network.insert_city(id(1), "B", 0.0);
        network.insert_city(id(2), "C", 0.0);
        network.insert_link(id(0), id(1), 1.0).unwrap();
        network.insert_link(id(1), id(2), 2.0).unwrap();
        network.insert_link(id(0), id(2), 5.0).unwrap();
        network
    }

    #[test]
    fn prefers_cheaper_indirect_route() {
        let path = shortest_path(&abc(), id(0), id(2)).unwrap();
        assert_eq!(path.cities, vec![id(0), id(1), id(2)]);
        assert_eq!(path.names, vec!["A", "B", "C"]);
        assert_eq!(path.cost, 3.0);
    }

    #[test]
    fn same_city_is_zero_cost() {
        let path = shortest_path(&abc(), id(1), id(1)).unwrap();
        assert_eq!(path.cities, vec![id(1)]);
        assert_eq!(path.cost, 0.0);
    }

    #[test]
    fn unreachable_or_absent_is_path_not_found() {
        let network = abc();
        assert!(matches!(
            shortest_path(&network, id(2), id(0)),
            Err(DgnError::PathNotFound { .. })
        ));
        assert!(matches!(
            shortest_path(&network, id(0), id(9)),
            Err(DgnError::PathNotFound { .. })
        ));
        assert!(matches!(
            shortest_path(&network, id(9), id(0)),
            Err(DgnError::PathNotFound { .. })
        ));
    }

    #[test]
    fn negative_weight_is_rejected() {
        let mut network = abc();
        network.insert_link(id(2), id(1), -1.0).unwrap();
        let err = shortest_path(&network, id(0), id(1)).unwrap_err();
        assert!(matches!(
            err,
            DgnError::NegativeWeight { weight, .. } if weight == -1.0
        ));
    }

    #[test]
    fn infinite_or_nan_weight_is_rejected() {
        for weight in [f64::INFINITY, f64::NAN] {
            let mut network = abc();
            network.insert_link(id(2), id(0), weight).unwrap();
            assert!(matches!(
                shortest_path(&network, id(2), id(0)),
                Err(DgnError::NegativeWeight { src, dst, .. }) if src == id(2) && dst == id(0)
            ));
        }
    }

    #[test]
    fn all_pairs_skips_self_and_unreachable() {
        let pairs = all_pairs_shortest_paths(&abc()).unwrap();
        let summary: Vec<(usize, usize, f64)> = pairs
            .iter()
            .map(|pair| (pair.from.value(), pair.to.value(), pair.cost))
            .collect();
        assert_eq!(summary, vec![(0, 1, 1.0), (0, 2, 3.0), (1, 2, 2.0)]);
        assert_eq!(pairs[1].from_name, "A");
        assert_eq!(pairs[1].to_name, "C");
    }

    #[test]
    fn all_pairs_accepts_negative_links_without_cycles() {
        let mut network = abc();
        network.insert_link(id(1), id(2), -1.0).unwrap();
        let pairs = all_pairs_shortest_paths(&network).unwrap();
        let a_to_c = pairs
            .iter()
            .find(|pair| pair.from == id(0) && pair.to == id(2))
            .unwrap();
        assert_eq!(a_to_c.cost, 0.0);
    }

    #[test]
    fn all_pairs_reports_negative_cycle() {
        let mut network = abc();
        network.insert_link(id(2), id(0), -10.0).unwrap();
        assert!(matches!(
            all_pairs_shortest_paths(&network),
            Err(DgnError::NegativeCycle)
        ));
    }

    #[test]
    fn all_pairs_on_empty_network() {
        assert!(all_pairs_shortest_paths(&Network::new()).unwrap().is_empty());
    }
}
