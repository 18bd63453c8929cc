use crate::orchestrator::Orchestrator;
use std::sync::Arc;
use syntaxshift_ai::ModelGateway;
use syntaxshift_core::{GatewayConfig, Result, ShiftError};

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
}

impl AppState {
    /// Build the production state: a gateway over the real completion client,
    /// configured from the environment.
    pub fn new() -> Result<Self> {
        let gateway = ModelGateway::from_config(GatewayConfig::default())
            .map_err(|e| ShiftError::Gateway(e.to_string()))?;
        Ok(Self::with_orchestrator(Orchestrator::new(gateway)))
    }

    /// Build state around a preconstructed orchestrator; tests inject a fake
    /// completion client this way.
    pub fn with_orchestrator(orchestrator: Orchestrator) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
        }
    }
}
