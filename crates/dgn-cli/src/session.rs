//! The working session: one graph file and the network loaded from it.

use std::io;
use std::path::{Path, PathBuf};

use dgn_core::{DgnError, DgnResult, Network};
use dgn_io::{load_graph, read_graph_text, save_graph};
use tracing::info;

#[derive(Debug, Clone)]
pub struct Session {
    path: PathBuf,
    network: Network,
}

impl Session {
    /// Session over an existing graph file.
    pub fn open(path: impl Into<PathBuf>) -> DgnResult<Self> {
        let path = path.into();
        let network = load_graph(&path)?.network;
        Ok(Self { path, network })
    }

    /// Like [`Session::open`], but a missing file starts an empty network.
    pub fn open_or_empty(path: impl Into<PathBuf>) -> DgnResult<Self> {
        let path = path.into();
        match load_graph(&path) {
            Ok(parsed) => Ok(Self {
                path,
                network: parsed.network,
            }),
            Err(DgnError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "graph file does not exist yet, starting empty");
                Ok(Self {
                    path,
                    network: Network::new(),
                })
            }
            Err(err) => Err(err),
        }
    }

    /// Replace the session network with the contents of `path`.
    ///
    /// The file is parsed into a fresh network; on failure the current
    /// network and path are untouched.
    pub fn load(&mut self, path: impl Into<PathBuf>) -> DgnResult<()> {
        let path = path.into();
        let parsed = load_graph(&path)?;
        self.network = parsed.network;
        self.path = path;
        Ok(())
    }

    pub fn save(&self) -> DgnResult<()> {
        save_graph(&self.network, &self.path)
    }

    /// Save to `path` and make it the session file.
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> DgnResult<()> {
        let path = path.into();
        save_graph(&self.network, &path)?;
        self.path = path;
        Ok(())
    }

    /// Raw text of the session file as it is on disk.
    pub fn show_file(&self) -> DgnResult<String> {
        read_graph_text(&self.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn network_mut(&mut self) -> &mut Network {
        &mut self.network
    }
}
