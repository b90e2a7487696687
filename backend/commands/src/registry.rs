//! The static command-name-to-handler mapping.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use slashforge_core::{Interaction, RequestMeta};

/// One named slash command.
///
/// Implementations return any JSON-serializable message payload accepted by
/// the platform's message-edit endpoint. The dispatcher performs no shape
/// validation on the output; that is each handler's documented
/// responsibility.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Command name as registered with the platform.
    fn name(&self) -> &str;

    /// Execute the command and produce the final message payload.
    async fn execute(&self, meta: &RequestMeta, interaction: &Interaction) -> anyhow::Result<Value>;
}

/// Name → handler mapping. Built once at process start; read-only afterward.
/// No entry is ever added, removed, or mutated during request handling.
#[derive(Default)]
pub struct CommandRegistry {
    handlers: HashMap<String, Arc<dyn CommandHandler>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under its own name. Last registration wins.
    pub fn register(&mut self, handler: Arc<dyn CommandHandler>) {
        self.handlers.insert(handler.name().to_string(), handler);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn CommandHandler>> {
        self.handlers.get(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
