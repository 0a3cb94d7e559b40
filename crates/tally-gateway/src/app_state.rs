//! Shared application state for the tally gateway.
//!
//! Owns the counter registry, the `Op -> service` dispatcher and the metrics
//! families. Cloning is cheap; every handler receives its own clone.

use std::sync::Arc;

use tally_core::error::{Result, TallyError};
use tally_core::{CounterRegistry, Op};

use crate::config::TallyConfig;
use crate::dispatch::Dispatcher;
use crate::obs::GatewayMetrics;
use crate::services::{CreateCounter, DeleteCounter, IncrementCounter, ReadCounter};

#[derive(Clone)]
pub struct AppState {
    cfg: Arc<TallyConfig>,
    registry: Arc<CounterRegistry>,
    dispatcher: Arc<Dispatcher>,
    metrics: Arc<GatewayMetrics>,
}

impl AppState {
    /// Build application state with an empty registry.
    pub fn new(cfg: TallyConfig) -> Result<Self> {
        let dispatcher = Dispatcher::new();

        dispatcher.register(Arc::new(CreateCounter));
        dispatcher.register(Arc::new(IncrementCounter));
        dispatcher.register(Arc::new(ReadCounter));
        dispatcher.register(Arc::new(DeleteCounter));

        // every routed verb must land on a service
        let registered = dispatcher.registered_ops();
        if let Some(missing) = Op::ALL.iter().find(|op| !registered.contains(*op)) {
            return Err(TallyError::Internal(format!(
                "no service registered for op: {}",
                missing.as_str()
            )));
        }

        Ok(Self {
            cfg: Arc::new(cfg),
            registry: Arc::new(CounterRegistry::new()),
            dispatcher: Arc::new(dispatcher),
            metrics: Arc::new(GatewayMetrics::default()),
        })
    }

    pub fn cfg(&self) -> &TallyConfig {
        &self.cfg
    }

    pub fn registry(&self) -> &CounterRegistry {
        &self.registry
    }

    pub fn dispatcher(&self) -> Arc<Dispatcher> {
        Arc::clone(&self.dispatcher)
    }

    pub fn metrics(&self) -> &GatewayMetrics {
        &self.metrics
    }

    pub fn set_draining(&self) {
        self.metrics.set_draining();
    }

    pub fn is_draining(&self) -> bool {
        self.metrics.is_draining()
    }

    /// Gauges sampled at scrape time.
    pub fn metrics_extra(&self) -> Vec<(&'static str, u64)> {
        vec![("tally_counters_live", self.registry.len() as u64)]
    }
}
