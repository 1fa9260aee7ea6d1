// src/state.rs
use std::sync::Arc;

use crate::config::ChatSettings;
use crate::services::completion::CompletionClient;
use crate::services::metrics::GatewayMetrics;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub client: Arc<dyn CompletionClient>,
    pub chat: ChatSettings,
    pub admin_key: Option<String>,
    pub metrics: GatewayMetrics,
}

impl AppState {
    pub fn new(client: Arc<dyn CompletionClient>, chat: ChatSettings) -> Self {
        Self {
            client,
            chat,
            admin_key: None,
            metrics: GatewayMetrics::new(),
        }
    }

    pub fn with_admin_key(mut self, key: Option<String>) -> Self {
        self.admin_key = key;
        self
    }
}
