//! Tri-state directory cache
//!
//! A search event can fire before the download completes. The store
//! makes that window explicit: it starts [`DirectoryState::Unloaded`],
//! takes exactly one transition when the fetch completes, and reads
//! before (or after a failed) load yield an empty record slice.

use crate::services::FetchOutcome;
use crate::types::{UserDirectory, UserRecord};

/// Why the directory never became available
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadFailure {
    /// Request completed with a status other than 200
    Http(u16),
    /// Body was not a well-formed record array
    Parse(String),
    /// Request never completed
    Network(String),
}

impl std::fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(status) => write!(f, "directory fetch returned HTTP status {}", status),
            Self::Parse(detail) => write!(f, "directory document malformed: {}", detail),
            Self::Network(detail) => write!(f, "directory fetch failed: {}", detail),
        }
    }
}

impl std::error::Error for LoadFailure {}

/// Lifecycle of the cached directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryState {
    /// The download has not completed yet
    Unloaded,
    /// The download completed with a well-formed document
    Loaded(UserDirectory),
    /// The download completed and the directory will never be available
    Failed(LoadFailure),
}

/// Owned holder of the directory cache.
///
/// Populated at most once: the first completion wins and later outcomes
/// are dropped. There is no re-fetch; a failed load stays failed for the
/// lifetime of the store, matching the page's load-once behavior.
#[derive(Debug, Clone, Default)]
pub struct DirectoryStore {
    state: DirectoryState,
}

impl Default for DirectoryState {
    fn default() -> Self {
        DirectoryState::Unloaded
    }
}

impl DirectoryStore {
    pub fn new() -> Self {
        Self {
            state: DirectoryState::Unloaded,
        }
    }

    pub fn state(&self) -> &DirectoryState {
        &self.state
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, DirectoryState::Loaded(_))
    }

    /// Records the completion of the one-shot fetch.
    ///
    /// Only the first completion is applied; anything after that is
    /// dropped with a debug log, keeping the "populated exactly once"
    /// lifecycle.
    pub fn complete(&mut self, outcome: FetchOutcome) {
        if !matches!(self.state, DirectoryState::Unloaded) {
            tracing::debug!("Dropping duplicate directory load completion: {}", outcome);
            return;
        }
        self.state = match outcome {
            FetchOutcome::Success(records) => DirectoryState::Loaded(UserDirectory::new(records)),
            FetchOutcome::HttpError(status) => {
                DirectoryState::Failed(LoadFailure::Http(status.as_u16()))
            }
            FetchOutcome::ParseError(detail) => DirectoryState::Failed(LoadFailure::Parse(detail)),
            FetchOutcome::NetworkError(detail) => {
                DirectoryState::Failed(LoadFailure::Network(detail))
            }
        };
    }

    /// The cached records; empty unless the state is `Loaded`.
    ///
    /// This is the documented policy for searches that race the download:
    /// they see an empty directory rather than a fault.
    pub fn records(&self) -> &[UserRecord] {
        match &self.state {
            DirectoryState::Loaded(directory) => directory.records(),
            _ => &[],
        }
    }
}
