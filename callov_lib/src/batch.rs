//! Batch processing of input items under a fail-fast or continue-on-failure policy.

use serde_json::{json, Value};

use callov_api::Transport;

use crate::error::CallovError;
use crate::params::ParameterSource;
use crate::resource::Action;
use crate::router::Router;

/// What happens when one item of a batch fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BatchPolicy {
    /// Stop at the first failing item and return its error.
    #[default]
    FailFast,
    /// Record `{"error": message}` for the failing item and keep going.
    ContinueOnFailure,
}

impl BatchPolicy {
    pub fn from_continue_on_fail(continue_on_fail: bool) -> Self {
        if continue_on_fail {
            BatchPolicy::ContinueOnFailure
        } else {
            BatchPolicy::FailFast
        }
    }
}

/// The inline record that replaces the output of a failed item.
pub fn error_marker(err: &CallovError) -> Value {
    json!({ "error": err.to_string() })
}

impl<T: Transport> Router<T> {
    /// Runs every item, in order and one at a time, and concatenates their records.
    ///
    /// Under [`BatchPolicy::FailFast`] the first failure is returned as
    /// [`CallovError::BatchItem`] and later items are never sent.
    pub async fn run_batch<P: ParameterSource>(
        &self,
        action: Action,
        items: &[P],
        policy: BatchPolicy,
    ) -> Result<Vec<Value>, CallovError> {
        let mut output = Vec::new();
        for (index, item) in items.iter().enumerate() {
            match self.dispatch(action, item).await {
                Ok(records) => {
                    tracing::debug!(
                        "{} item {}/{} returned {} record(s)",
                        action,
                        index + 1,
                        items.len(),
                        records.len()
                    );
                    output.extend(records);
                }
                Err(err) => match policy {
                    BatchPolicy::FailFast => {
                        tracing::error!("{} item {} failed: {}", action, index, err);
                        return Err(CallovError::BatchItem {
                            index,
                            source: Box::new(err),
                        });
                    }
                    BatchPolicy::ContinueOnFailure => {
                        tracing::warn!("{} item {} failed, continuing: {}", action, index, err);
                        output.push(error_marker(&err));
                    }
                },
            }
        }
        Ok(output)
    }
}
