//! Shared state for the interactions endpoint.

use std::future::Future;
use std::sync::Arc;

use slashforge_commands::CommandRegistry;
use slashforge_config::ServerConfig;
use slashforge_verify::SignatureVerifier;
use tokio::sync::Mutex;
use tokio::task::JoinSet;
use tracing::warn;

use crate::followup::FollowupClient;

/// Everything a request handler needs, cheap to clone.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    config: ServerConfig,
    verifier: SignatureVerifier,
    registry: CommandRegistry,
    followup: FollowupClient,
    /// In-flight deferred dispatches. Kept so shutdown can wait for
    /// completions instead of tearing them down mid-flight.
    tasks: Mutex<JoinSet<()>>,
}

impl AppState {
    pub fn new(config: ServerConfig, verifier: SignatureVerifier, registry: CommandRegistry) -> Self {
        let followup = FollowupClient::new(config.api_base.clone(), config.application_id.clone());
        Self {
            inner: Arc::new(Inner {
                config,
                verifier,
                registry,
                followup,
                tasks: Mutex::new(JoinSet::new()),
            }),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    pub fn verifier(&self) -> &SignatureVerifier {
        &self.inner.verifier
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.inner.registry
    }

    pub fn followup(&self) -> &FollowupClient {
        &self.inner.followup
    }

    /// Spawn a background dispatch whose lifetime is tracked by this state.
    /// Finished entries are reaped on every spawn so the set stays small.
    pub async fn spawn_tracked<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut tasks = self.inner.tasks.lock().await;
        while let Some(result) = tasks.try_join_next() {
            if let Err(err) = result {
                warn!(error = %err, "Background dispatch panicked");
            }
        }
        tasks.spawn(fut);
    }

    /// Wait for every in-flight dispatch to settle. Called on shutdown.
    pub async fn drain(&self) {
        let mut tasks = self.inner.tasks.lock().await;
        while let Some(result) = tasks.join_next().await {
            if let Err(err) = result {
                warn!(error = %err, "Background dispatch panicked");
            }
        }
    }
}
