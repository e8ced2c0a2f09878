use crate::graph::Graph;
use sled::Db;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Sled(#[from] sled::Error),
    #[error("Serialization error: {0}")]
    Bincode(#[from] bincode::Error),
}

/// Binary snapshots of whole graphs, keyed by network name.
///
/// Snapshots keep everything: nodes, edges, analysis attributes and the
/// three default bags. This is not an interchange format.
pub struct GraphStore {
    db: Db,
}

impl GraphStore {
    /// Opens or creates a graph store at the specified path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }

    /// Saves `graph` under `name`, replacing any earlier snapshot.
    pub fn save_graph(&self, name: &str, graph: &Graph) -> Result<(), StoreError> {
        let bytes = bincode::serialize(graph)?;
        debug!("Saving network {:?} ({} bytes)", name, bytes.len());
        self.db.insert(name, bytes)?;
        self.db.flush()?;
        info!(
            "Saved network {:?}: {} nodes, {} edges",
            name,
            graph.node_count(),
            graph.edge_count()
        );
        Ok(())
    }

    /// Loads the snapshot saved under `name`.
    pub fn load_graph(&self, name: &str) -> Result<Option<Graph>, StoreError> {
        match self.db.get(name)? {
            Some(bytes) => {
                let graph: Graph = bincode::deserialize(&bytes)?;
                debug!("Loaded network {:?}", name);
                Ok(Some(graph))
            }
            None => Ok(None),
        }
    }

    /// Names of all saved networks, sorted.
    pub fn names(&self) -> Result<Vec<String>, StoreError> {
        self.db
            .iter()
            .keys()
            .map(|key| -> Result<String, StoreError> {
                Ok(String::from_utf8_lossy(&key?).into_owned())
            })
            .collect()
    }

    /// Removes the snapshot saved under `name`.
    pub fn clear(&self, name: &str) -> Result<(), StoreError> {
        self.db.remove(name)?;
        self.db.flush()?;
        Ok(())
    }
}
