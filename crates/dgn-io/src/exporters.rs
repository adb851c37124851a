//! Graph file writer
//!
//! Converts an in-memory [`Network`] back to the city/link text format.

use std::io::{self, Write};
use std::path::Path;

use dgn_core::{DgnError, DgnResult, Network};
use tempfile::NamedTempFile;
use tracing::info;

/// Tag written on the first line of every saved file.
pub const GRAPH_TYPE_TAG: i64 = 7;

/// Write the network in the text format.
pub fn write_graph<W: Write>(network: &Network, mut writer: W) -> io::Result<()> {
    writeln!(writer, "{GRAPH_TYPE_TAG}")?;
    writeln!(writer, "{}", network.city_count())?;
    for city in network.cities() {
        writeln!(writer, "{} \"{}\" \"{}\"", city.id, city.name, city.weight)?;
    }
    let links = network.links();
    writeln!(writer, "{}", links.len())?;
    for link in &links {
        writeln!(writer, "{} {} {}", link.src, link.dst, link.weight)?;
    }
    writer.flush()
}

pub fn to_graph_string(network: &Network) -> io::Result<String> {
    let mut buffer = Vec::new();
    write_graph(network, &mut buffer)?;
    String::from_utf8(buffer).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

/// Check that every city survives a write/read cycle.
///
/// Names are the only free text in the format; a line break inside one would
/// split the city line.
pub fn check_writable(network: &Network) -> DgnResult<()> {
    match network
        .cities()
        .find(|city| city.name.contains(['\n', '\r']))
    {
        Some(city) => Err(DgnError::InvalidName {
            city: city.id,
            name: city.name.clone(),
        }),
        None => Ok(()),
    }
}

/// Save the network to `path`, replacing any existing file atomically.
///
/// Nothing is written if [`check_writable`] fails.
pub fn save_graph(network: &Network, path: impl AsRef<Path>) -> DgnResult<()> {
    let path = path.as_ref();
    check_writable(network)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    write_graph(network, io::BufWriter::new(file.as_file_mut()))?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|err| err.error)?;
    info!(
        path = %path.display(),
        cities = network.city_count(),
        links = network.link_count(),
        "saved graph"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dgn_core::CityId;

    #[test]
    fn writes_exact_layout() {
        let mut network = Network::new();
        network.insert_city(CityId::new(1), "Olinda", 40.0);
        network.insert_city(CityId::new(0), "Recife", 120.5);
        network
            .insert_link(CityId::new(1), CityId::new(0), 2.0)
            .unwrap();
        network
            .insert_link(CityId::new(0), CityId::new(1), 3.5)
            .unwrap();

        let expected = "7\n2\n0 \"Recife\" \"120.5\"\n1 \"Olinda\" \"40\"\n2\n0 1 3.5\n1 0 2\n";
        assert_eq!(to_graph_string(&network).unwrap(), expected);
    }

    #[test]
    fn signed_and_non_finite_weights_are_written_verbatim() {
        let mut network = Network::new();
        network.insert_city(CityId::new(0), "", -1.5);
        network.insert_city(CityId::new(1), "Sobral", f64::INFINITY);
        network.insert_city(CityId::new(2), "Crato", f64::NAN);
        let text = to_graph_string(&network).unwrap();
        assert!(text.contains("0 \"\" \"-1.5\"\n"));
        assert!(text.contains("1 \"Sobral\" \"inf\"\n"));
        assert!(text.contains("2 \"Crato\" \"NaN\"\n"));
    }

    #[test]
    fn names_with_line_breaks_are_not_writable() {
        let mut network = Network::new();
        network.insert_city(CityId::new(0), "Recife", 1.0);
        assert!(check_writable(&network).is_ok());
        network.insert_city(CityId::new(4), "Boa\nVista", 1.0);
        assert!(matches!(
            check_writable(&network),
            Err(DgnError::InvalidName { city, .. }) if city == CityId::new(4)
        ));
    }

    #[test]
    fn empty_network_writes_zero_counts() {
        assert_eq!(to_graph_string(&Network::new()).unwrap(), "7\n0\n0\n");
    }
}
