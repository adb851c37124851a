use dgn_core::Network;
use tracing::debug;

use crate::connectivity::is_weakly_connected;

/// Whether a closed walk uses every link exactly once.
///
/// Holds iff the network is non-empty, weakly connected (isolated cities
/// included), and every city has equal in- and out-degree. Balanced degrees
/// plus weak connectivity imply strong connectivity.
pub fn is_eulerian(network: &Network) -> bool {
    let unbalanced = network
        .city_ids()
        .find(|&city| network.in_degree(city) != network.out_degree(city));
    if let Some(city) = unbalanced {
        debug!(%city, "in-degree differs from out-degree");
        return false;
    }
    is_weakly_connected(network)
}
