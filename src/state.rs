//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El almacén es la única fuente de
//! verdad: las vistas derivadas se recalculan desde su snapshot.

use std::sync::Arc;

use tokio::sync::watch;

use crate::config::environment::EnvironmentConfig;
use crate::models::Company;
use crate::repositories::FleetStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FleetStore>,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn FleetStore>, config: EnvironmentConfig) -> Self {
        Self { store, config }
    }

    /// Suscripción al snapshot completo de empresas.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Company>> {
        self.store.subscribe()
    }
}
