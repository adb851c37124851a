//! Graph file parser
//!
//! Parses the city/link text format into a fresh [`Network`].

use std::fs;
use std::path::Path;

use dgn_core::{CityId, DgnError, DgnResult, Network};
use tracing::{debug, info, warn};

/// A parsed graph file: the informational header tag plus the network.
#[derive(Debug, Clone)]
pub struct ParsedGraph {
    pub graph_type: i64,
    pub network: Network,
}

/// Load a graph file from disk.
pub fn load_graph(path: impl AsRef<Path>) -> DgnResult<ParsedGraph> {
    let path = path.as_ref();
    let content = read_graph_text(path)?;
    let parsed = parse_graph_str(&content)?;
    info!(
        path = %path.display(),
        cities = parsed.network.city_count(),
        links = parsed.network.link_count(),
        "loaded graph"
    );
    Ok(parsed)
}

/// Raw contents of a graph file.
pub fn read_graph_text(path: impl AsRef<Path>) -> DgnResult<String> {
    Ok(fs::read_to_string(path)?)
}

/// Parse graph content from a string.
///
/// Nothing is returned unless the whole file parses.
pub fn parse_graph_str(content: &str) -> DgnResult<ParsedGraph> {
    let lines: Vec<&str> = content.lines().map(str::trim).collect();
    let mut network = Network::new();

    let graph_type: i64 = parse_number(&lines, 0, "graph-type tag")?;
    let city_count: usize = parse_number(&lines, 1, "city count")?;
    debug!(graph_type, city_count, "parsing city section");

    for idx in 2..2 + city_count {
        let (id, name, weight) = parse_city_line(line_at(&lines, idx)?, idx + 1)?;
        if network.contains_city(id) {
            warn!(city = %id, line = idx + 1, "duplicate city id, later declaration wins");
        }
        network.insert_city(id, name, weight);
    }

    let link_line = 2 + city_count;
    let link_count: usize = parse_number(&lines, link_line, "link count")?;
    debug!(link_count, "parsing link section");

    for idx in link_line + 1..link_line + 1 + link_count {
        let (src, dst, weight) = parse_link_line(line_at(&lines, idx)?, idx + 1)?;
        network
            .insert_link(src, dst, weight)
            .map_err(|err| DgnError::format(idx + 1, err.to_string()))?;
    }

    let consumed = link_line + 1 + link_count;
    if lines.iter().skip(consumed).any(|line| !line.is_empty()) {
        warn!(line = consumed + 1, "ignoring content after the last link line");
    }

    Ok(ParsedGraph {
        graph_type,
        network,
    })
}

fn line_at<'a>(lines: &[&'a str], idx: usize) -> DgnResult<&'a str> {
    lines
        .get(idx)
        .copied()
        .ok_or_else(|| DgnError::format(idx + 1, "unexpected end of file"))
}

fn parse_number<T: std::str::FromStr>(lines: &[&str], idx: usize, what: &str) -> DgnResult<T> {
    let text = line_at(lines, idx)?;
    text.parse()
        .map_err(|_| DgnError::format(idx + 1, format!("invalid {what} '{text}'")))
}

/// Parse `<id> "<name>" "<weight>"`.
///
/// The name runs up to the last quoted field, so it may itself contain quotes
/// or be empty. The weight is a signed decimal, `inf` or `NaN`, which covers
/// everything [`crate::write_graph`] emits.
fn parse_city_line(text: &str, line: usize) -> DgnResult<(CityId, String, f64)> {
    let malformed =
        || DgnError::format(line, format!("expected <id> \"<name>\" \"<weight>\", got '{text}'"));

    let digits_end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    if digits_end == 0 {
        return Err(malformed());
    }
    let id: usize = text[..digits_end].parse().map_err(|_| malformed())?;

    let rest = &text[digits_end..];
    if !rest.starts_with(char::is_whitespace) {
        return Err(malformed());
    }
    let rest = rest.trim_start();

    let quoted_weight = rest.strip_suffix('"').ok_or_else(malformed)?;
    let weight_open = quoted_weight.rfind('"').ok_or_else(malformed)?;
    let weight_text = &quoted_weight[weight_open + 1..];
    let before_weight = &quoted_weight[..weight_open];
    if !before_weight.ends_with(char::is_whitespace) {
        return Err(malformed());
    }

    let name = before_weight
        .trim_end()
        .strip_prefix('"')
        .and_then(|name| name.strip_suffix('"'))
        .ok_or_else(malformed)?;

    if !is_weight_literal(weight_text) {
        return Err(malformed());
    }
    let weight: f64 = weight_text.parse().map_err(|_| malformed())?;

    Ok((CityId::new(id), name.to_string(), weight))
}

fn is_weight_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    matches!(unsigned, "inf" | "NaN")
        || (!unsigned.is_empty() && unsigned.chars().all(|c| c.is_ascii_digit() || c == '.'))
}

/// Parse `<src> <dst> <weight>`.
fn parse_link_line(text: &str, line: usize) -> DgnResult<(CityId, CityId, f64)> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let [src, dst, weight] = fields.as_slice() else {
        return Err(DgnError::format(
            line,
            format!("expected 3 fields, found {} in '{text}'", fields.len()),
        ));
    };
    let invalid =
        |what: &str, value: &str| DgnError::format(line, format!("invalid {what} '{value}'"));
    let src: usize = src.parse().map_err(|_| invalid("source id", *src))?;
    let dst: usize = dst.parse().map_err(|_| invalid("destination id", *dst))?;
    let weight: f64 = weight
        .parse()
        .map_err(|_| invalid("link weight", *weight))?;
    Ok((CityId::new(src), CityId::new(dst), weight))
}
