//! One-hop model fallback.
//!
//! Routes a task, sends it to the selected model through a caller-supplied
//! [`ModelBackend`], and if that model is unavailable retries once on the
//! alternate tier. Only unavailability triggers the hop: a different model
//! won't fix a request the backend rejected for other reasons.

use async_trait::async_trait;

use crate::error::LlmError;
use crate::llm::routing::{ModelRouter, RoutingDecision};

/// Something that can run a task against a named model.
#[async_trait]
pub trait ModelBackend: Send + Sync {
    async fn invoke(&self, model: &str, task: &str) -> Result<String, LlmError>;
}

/// Outcome of a dispatch: the decision that was served and the response.
///
/// `decision.original_model` is set when the fallback hop was taken.
#[derive(Debug, Clone)]
pub struct Dispatched {
    pub decision: RoutingDecision,
    pub response: String,
}

/// Routes tasks and dispatches them with at most one fallback hop.
pub struct FallbackDispatcher<B> {
    router: ModelRouter,
    backend: B,
}

impl<B: ModelBackend> FallbackDispatcher<B> {
    pub fn new(router: ModelRouter, backend: B) -> Self {
        Self { router, backend }
    }

    pub fn router(&self) -> &ModelRouter {
        &self.router
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Route `task` and invoke the selected model, falling back once.
    pub async fn dispatch(&self, task: &str) -> Result<Dispatched, LlmError> {
        let decision = self.router.route(task);

        match self.backend.invoke(decision.model_id(), task).await {
            Ok(response) => Ok(Dispatched { decision, response }),
            Err(err) if err.is_unavailable() => {
                let rerouted = decision.reroute();
                tracing::info!(
                    unavailable = decision.model_id(),
                    fallback = rerouted.model_id(),
                    "Selected model unavailable, retrying on fallback"
                );
                let response = self.backend.invoke(rerouted.model_id(), task).await?;
                Ok(Dispatched {
                    decision: rerouted,
                    response,
                })
            }
            Err(err) => Err(err),
        }
    }
}
