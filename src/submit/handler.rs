//! Mock submit handler simulating network latency

use super::traits::SubmitHandler;
use crate::state::FormValues;
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Default simulated latency before the alert is shown
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(400);

/// Waits a fixed delay, then serializes the values for the alert dialog
#[derive(Debug, Clone)]
pub struct AlertSubmitHandler {
    delay: Duration,
}

impl AlertSubmitHandler {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for AlertSubmitHandler {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

#[async_trait]
impl SubmitHandler for AlertSubmitHandler {
    async fn submit(&self, values: FormValues) -> Result<String> {
        tokio::time::sleep(self.delay).await;
        let json = serde_json::to_string_pretty(&values)?;
        tracing::info!("Signup submitted for {}", values.email);
        Ok(json)
    }
}
