use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::info;

use crate::models::MilitaryProfile;

/// The confirmed profile shared by the roadmap screen and the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub profile: MilitaryProfile,
    pub updated_at: DateTime<Utc>,
}

/// Process-wide holder of the latest profile.
///
/// Records are immutable; an update swaps in a new `Arc`, so readers holding
/// the previous record keep a consistent view.
#[derive(Debug, Default)]
pub struct ProfileStore {
    current: RwLock<Option<Arc<ProfileRecord>>>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn replace(&self, profile: MilitaryProfile) -> Arc<ProfileRecord> {
        let record = Arc::new(ProfileRecord {
            profile,
            updated_at: Utc::now(),
        });
        info!(
            "Profile replaced: {} {}",
            record.profile.branch, record.profile.mos_code
        );
        *self.current.write().await = Some(record.clone());
        record
    }

    pub async fn current(&self) -> Option<Arc<ProfileRecord>> {
        self.current.read().await.clone()
    }

    /// Holds the store read-locked so writers queue behind the returned guard.
    #[cfg(test)]
    pub(crate) async fn hold_read(
        &self,
    ) -> tokio::sync::RwLockReadGuard<'_, Option<Arc<ProfileRecord>>> {
        self.current.read().await
    }
}
