use std::sync::Arc;

use crate::gateway::CareerGateway;
use crate::session::{ProfileStore, Screens};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub gateway: CareerGateway,
    /// Latest confirmed profile; written by the translator, read by roadmap and dashboard.
    pub profiles: Arc<ProfileStore>,
    pub screens: Arc<Screens>,
}

impl AppState {
    pub fn new(gateway: CareerGateway) -> Self {
        Self {
            gateway,
            profiles: Arc::new(ProfileStore::new()),
            screens: Arc::new(Screens::new()),
        }
    }
}
