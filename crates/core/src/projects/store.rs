//! The shared project cache
//!
//! The one collection whose lifetime spans views. Consistency discipline:
//! writes go through the gateway and the canonical list is then re-fetched
//! wholesale; the cache is never patched with a locally constructed record.
//! Deletion is the single exception - the confirmed id is filtered out in
//! place without a refetch.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use oneflow_domain::{NewProject, Project, ProjectPatch, Result};
use parking_lot::RwLock;
use tracing::{debug, warn};

use super::ports::ProjectsGateway;

/// In-memory cache of the project list with write-through mutations.
///
/// Constructed once at application start with the gateway injected and
/// shared by reference. Reads are synchronous against the last fetched
/// snapshot, so they can be stale relative to an in-flight write until its
/// refresh lands. Two call sites racing their refreshes is tolerated: the
/// last one to land wins, and both carry full server snapshots.
pub struct ProjectStore {
    gateway: Arc<dyn ProjectsGateway>,
    projects: RwLock<Vec<Project>>,
    loading: AtomicBool,
}

impl ProjectStore {
    /// Create an empty store. Call [`refresh`](Self::refresh) to populate.
    pub fn new(gateway: Arc<dyn ProjectsGateway>) -> Self {
        Self {
            gateway,
            projects: RwLock::new(Vec::new()),
            loading: AtomicBool::new(false),
        }
    }

    /// Re-fetch the full list and replace the cache wholesale.
    ///
    /// Failures are swallowed here: the previous snapshot is retained and
    /// the error only logged, so a failed background refresh never breaks a
    /// consumer. User-initiated mutations do NOT swallow - they propagate
    /// from [`add`](Self::add)/[`update`](Self::update)/
    /// [`delete`](Self::delete) before this runs.
    pub async fn refresh(&self) {
        self.loading.store(true, Ordering::SeqCst);
        match self.gateway.list().await {
            Ok(list) => {
                debug!(count = list.len(), "project list refreshed");
                *self.projects.write() = list;
            }
            Err(err) => {
                warn!(error = %err, "failed to refresh projects");
            }
        }
        self.loading.store(false, Ordering::SeqCst);
    }

    /// Create a project, then re-sync from the server.
    ///
    /// The creation response is discarded rather than merged: the follow-up
    /// refresh pulls the canonical list, including any server-computed
    /// fields. Creation errors propagate; a refresh failure after a
    /// committed write leaves the cache stale and is only logged.
    pub async fn add(&self, project: &NewProject) -> Result<()> {
        let created = self.gateway.create(project).await?;
        debug!(id = %created.id, "project created");
        self.refresh().await;
        Ok(())
    }

    /// Update a project, then re-sync from the server.
    pub async fn update(&self, id: &str, patch: &ProjectPatch) -> Result<()> {
        self.gateway.update(id, patch).await?;
        debug!(id = %id, "project updated");
        self.refresh().await;
        Ok(())
    }

    /// Delete a project and drop it from the cache in place.
    ///
    /// No refetch: the server confirmed the delete, so filtering the id out
    /// locally is already consistent. Errors propagate and leave the cache
    /// untouched.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.gateway.delete(id).await?;
        self.projects.write().retain(|p| p.id != id);
        debug!(id = %id, "project deleted");
        Ok(())
    }

    /// Synchronous lookup against the last fetched snapshot.
    pub fn get(&self, id: &str) -> Option<Project> {
        self.projects.read().iter().find(|p| p.id == id).cloned()
    }

    /// Snapshot of the cached list.
    pub fn projects(&self) -> Vec<Project> {
        self.projects.read().clone()
    }

    pub fn len(&self) -> usize {
        self.projects.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.read().is_empty()
    }

    /// `true` while a refresh is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Drop the cached list (teardown on logout/unmount).
    pub fn clear(&self) {
        self.projects.write().clear();
    }
}
