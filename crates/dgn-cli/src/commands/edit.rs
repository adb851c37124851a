use anyhow::{Context, Result};
use dgn_cli::Session;
use dgn_core::CityId;
use serde_json::json;
use tracing::info;

use super::Output;

/// A single change to the network, applied and then saved back to the file.
#[derive(Debug, Clone)]
pub enum Edit {
    InsertCity { id: usize, name: String, weight: f64 },
    InsertLink { src: usize, dst: usize, weight: f64 },
    RemoveCity { id: usize },
    RemoveLink { src: usize, dst: usize },
}

pub fn apply(session: &mut Session, edit: Edit, out: &Output) -> Result<()> {
    let network = session.network_mut();
    let (action, message) = match &edit {
        Edit::InsertCity { id, name, weight } => {
            network.insert_city(CityId::new(*id), name.as_str(), *weight);
            ("insert-vertex", format!("Inserted city {id} ({name})"))
        }
        Edit::InsertLink { src, dst, weight } => {
            network.insert_link(CityId::new(*src), CityId::new(*dst), *weight)?;
            ("insert-edge", format!("Inserted link {src} -> {dst}"))
        }
        Edit::RemoveCity { id } => {
            let city = network.remove_city(CityId::new(*id))?;
            ("remove-vertex", format!("Removed city {id} ({})", city.name))
        }
        Edit::RemoveLink { src, dst } => {
            network.remove_link(CityId::new(*src), CityId::new(*dst))?;
            ("remove-edge", format!("Removed link {src} -> {dst}"))
        }
    };

    session
        .save()
        .with_context(|| format!("saving {}", session.path().display()))?;
    info!(action, path = %session.path().display(), "graph updated");

    if out.is_json() {
        return out.json(&json!({
            "action": action,
            "message": message,
            "cities": session.network().city_count(),
            "links": session.network().link_count(),
        }));
    }
    println!("{message}");
    Ok(())
}
