use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::completion_service::{CompletionClient, HttpCompletionClient},
};

#[derive(Clone)]
pub struct AppState {
    pub completion: Arc<dyn CompletionClient>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let completion = Arc::new(HttpCompletionClient::new(&config)?);

        Ok(Self {
            completion,
            config: Arc::new(config),
        })
    }

    /// Wires in a caller-supplied completion client, primarily for tests
    /// that stand in a double for the external provider.
    pub fn with_completion_client(config: Config, completion: Arc<dyn CompletionClient>) -> Self {
        Self {
            completion,
            config: Arc::new(config),
        }
    }
}
