//! Host platform collaborator interfaces
//!
//! The pipeline consumes the host through two narrow seams: credential
//! acquisition and target-record persistence. Host failures arrive as
//! opaque `anyhow` errors and are mapped into the connector taxonomy at
//! the point of use. Reference implementations suitable for tests and
//! simple embedders are included.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

/// Bearer credential for the remote service
#[derive(Debug, Clone)]
pub struct Credential {
    pub token: String,
}

/// Credential acquisition, delegated to the host
///
/// With `cached_retry` set, the host tries a cached credential first and
/// only runs its interactive re-authentication flow when the cached one
/// is rejected.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn obtain_credential(
        &self,
        service_id: &str,
        cached_retry: bool,
    ) -> anyhow::Result<Credential>;
}

/// Host-owned record targeted by an import
///
/// The pipeline writes `description` and hands the record back to the
/// host's persistence contract; it never persists anything itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostRecord {
    pub reference_num: String,
    pub name: String,
    pub description: Option<String>,
}

/// Persistence contract for the host's record model
///
/// Failures here (storage, permissions) are fatal to the import.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn persist(&self, record: &HostRecord) -> anyhow::Result<()>;
}

/// Credential provider returning a fixed token
pub struct StaticCredentialProvider {
    token: Option<String>,
}

impl StaticCredentialProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Provider that always fails, as when no account is linked
    pub fn unlinked() -> Self {
        Self { token: None }
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentialProvider {
    async fn obtain_credential(
        &self,
        service_id: &str,
        _cached_retry: bool,
    ) -> anyhow::Result<Credential> {
        match &self.token {
            Some(token) => Ok(Credential {
                token: token.clone(),
            }),
            None => anyhow::bail!("no {} account linked", service_id),
        }
    }
}

/// In-memory record store capturing persisted snapshots
#[derive(Default)]
pub struct MemoryRecordStore {
    saved: Mutex<Vec<HostRecord>>,
    fail_next: AtomicBool,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next persist call fail (storage/permission error)
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// Snapshots captured so far, in persist order
    pub async fn saved(&self) -> Vec<HostRecord> {
        self.saved.lock().await.clone()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn persist(&self, record: &HostRecord) -> anyhow::Result<()> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            anyhow::bail!("storage rejected the record");
        }
        self.saved.lock().await.push(record.clone());
        Ok(())
    }
}
