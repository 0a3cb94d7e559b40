use async_trait::async_trait;

use tally_core::error::Result;
use tally_core::{CounterRegistry, Op, Reply, Status};

use crate::dispatch::CounterService;

#[derive(Default)]
pub struct CreateCounter;

#[async_trait]
impl CounterService for CreateCounter {
    fn op(&self) -> Op {
        Op::Create
    }

    async fn handle(&self, registry: &CounterRegistry, name: &str) -> Result<Reply> {
        tracing::info!(counter = %name, "request to create counter");
        let value = registry.create(name)?;
        Ok(Reply::counter(Status::Created, name, value))
    }
}

/// `update` adds one; there is no set-to-value form.
#[derive(Default)]
pub struct IncrementCounter;

#[async_trait]
impl CounterService for IncrementCounter {
    fn op(&self) -> Op {
        Op::Update
    }

    async fn handle(&self, registry: &CounterRegistry, name: &str) -> Result<Reply> {
        tracing::info!(counter = %name, "request to update counter");
        let value = registry.increment(name)?;
        Ok(Reply::counter(Status::Ok, name, value))
    }
}

#[derive(Default)]
pub struct ReadCounter;

#[async_trait]
impl CounterService for ReadCounter {
    fn op(&self) -> Op {
        Op::Read
    }

    async fn handle(&self, registry: &CounterRegistry, name: &str) -> Result<Reply> {
        tracing::info!(counter = %name, "request to get counter");
        let value = registry.read(name)?;
        Ok(Reply::counter(Status::Ok, name, value))
    }
}

#[derive(Default)]
pub struct DeleteCounter;

#[async_trait]
impl CounterService for DeleteCounter {
    fn op(&self) -> Op {
        Op::Delete
    }

    async fn handle(&self, registry: &CounterRegistry, name: &str) -> Result<Reply> {
        tracing::info!(counter = %name, "request to delete counter");
        registry.delete(name)?;
        Ok(Reply::no_content())
    }
}
