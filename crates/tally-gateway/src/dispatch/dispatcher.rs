use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use tally_core::error::{Result, TallyError};
use tally_core::{CounterRegistry, Op, Reply};

/// One counter operation, bound to the `Op` it serves.
#[async_trait]
pub trait CounterService: Send + Sync {
    fn op(&self) -> Op;
    async fn handle(&self, registry: &CounterRegistry, name: &str) -> Result<Reply>;
}

/// `Op -> service` table, filled once at startup.
#[derive(Default)]
pub struct Dispatcher {
    services: DashMap<Op, Arc<dyn CounterService>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            services: DashMap::new(),
        }
    }

    pub fn register(&self, svc: Arc<dyn CounterService>) {
        self.services.insert(svc.op(), svc);
    }

    pub fn registered_ops(&self) -> Vec<Op> {
        self.services.iter().map(|e| *e.key()).collect()
    }

    pub async fn dispatch(&self, registry: &CounterRegistry, op: Op, name: &str) -> Result<Reply> {
        let handler = self
            .services
            .get(&op)
            .ok_or_else(|| TallyError::Internal(format!("no service for op: {}", op.as_str())))?
            .value()
            .clone();
        handler.handle(registry, name).await
    }
}
