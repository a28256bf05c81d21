//! Trait abstraction for the submit handler to enable mocking in tests

use crate::state::FormValues;
use anyhow::Result;
use async_trait::async_trait;

/// Receives the full value set once every field passes validation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitHandler: Send + Sync {
    /// Submit the values, returning the text to show in the alert dialog
    async fn submit(&self, values: FormValues) -> Result<String>;
}
