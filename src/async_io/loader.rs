//! Source loaders for the three exports of a snapshot.
//!
//! Retrieval is the only concurrent step. All three sources are fetched
//! together and the snapshot is only built when every fetch succeeds.

use std::future::Future;
use std::pin::Pin;

use rustc_hash::FxHashMap;

use crate::config::SourceConfig;
use crate::error::util::safe_read_to_string;
use crate::error::{Result, SentinelError};
use crate::registry::SourceKind;

/// Core trait for asynchronous source retrieval
pub trait SourceLoader: Send + Sync {
    /// Fetch the full text of one export
    fn fetch_async<'a>(
        &'a self,
        kind: SourceKind,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;
}

/// Loader reading exports from a snapshot directory
#[derive(Debug, Clone)]
pub struct DirectorySourceLoader {
    sources: SourceConfig,
}

impl DirectorySourceLoader {
    #[must_use]
    pub const fn new(sources: SourceConfig) -> Self {
        Self { sources }
    }

    #[must_use]
    pub const fn sources(&self) -> &SourceConfig {
        &self.sources
    }
}

impl SourceLoader for DirectorySourceLoader {
    fn fetch_async<'a>(
        &'a self,
        kind: SourceKind,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        let path = self.sources.path_for(kind);
        Box::pin(async move {
            log::debug!("Reading {kind} export from {}", path.display());
            safe_read_to_string(&path, &format!("{kind} export")).await
        })
    }
}

/// Loader serving preloaded export texts
#[derive(Debug, Clone, Default)]
pub struct InMemorySourceLoader {
    texts: FxHashMap<SourceKind, String>,
}

impl InMemorySourceLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the text of one export
    #[must_use]
    pub fn with_source(mut self, kind: SourceKind, text: impl Into<String>) -> Self {
        self.texts.insert(kind, text.into());
        self
    }
}

impl SourceLoader for InMemorySourceLoader {
    fn fetch_async<'a>(
        &'a self,
        kind: SourceKind,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(async move {
            self.texts
                .get(&kind)
                .cloned()
                .ok_or_else(|| SentinelError::SourceNotFound(kind.as_key().to_string()))
        })
    }
}

/// Raw text of the three exports of one snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSnapshot {
    pub teiten: String,
    pub ari: String,
    pub tougai: String,
}

/// Fetch all three exports concurrently.
///
/// # Errors
/// Fails with the first fetch error; no partial snapshot is returned.
pub async fn load_snapshot(loader: &dyn SourceLoader) -> Result<RawSnapshot> {
    let (teiten, ari, tougai) = futures::try_join!(
        loader.fetch_async(SourceKind::Teiten),
        loader.fetch_async(SourceKind::Ari),
        loader.fetch_async(SourceKind::Tougai),
    )
    .inspect_err(|e| log::error!("Snapshot fetch failed: {e}"))?;

    log::info!(
        "Loaded snapshot: teiten {} bytes, ari {} bytes, tougai {} bytes",
        teiten.len(),
        ari.len(),
        tougai.len()
    );
    Ok(RawSnapshot {
        teiten,
        ari,
        tougai,
    })
}
