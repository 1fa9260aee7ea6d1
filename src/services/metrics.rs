use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default, Clone, Serialize)]
pub struct MetricsData {
    pub requests: u64,
    pub successes: u64,
    pub failures: HashMap<String, u64>,
}

/// Outcome counters for the chat endpoint.
#[derive(Debug, Clone)]
pub struct GatewayMetrics {
    inner: Arc<RwLock<MetricsData>>,
}

impl Default for GatewayMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl GatewayMetrics {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MetricsData::default())),
        }
    }

    pub async fn record_success(&self) {
        let mut data = self.inner.write().await;
        data.requests += 1;
        data.successes += 1;
    }

    pub async fn record_failure(&self, kind: &str) {
        let mut data = self.inner.write().await;
        data.requests += 1;
        *data.failures.entry(kind.to_string()).or_insert(0) += 1;
    }

    pub async fn snapshot(&self) -> MetricsData {
        self.inner.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn counts_outcomes() {
        let metrics = GatewayMetrics::new();
        metrics.record_success().await;
        metrics.record_failure("upstream_error").await;
        metrics.record_failure("upstream_error").await;

        let data = metrics.snapshot().await;
        assert_eq!(data.requests, 3);
        assert_eq!(data.successes, 1);
        assert_eq!(data.failures.get("upstream_error"), Some(&2));
    }
}
