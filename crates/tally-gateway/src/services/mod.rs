//! Built-in counter services, one per `Op`.

pub mod counters;

pub use counters::{CreateCounter, DeleteCounter, IncrementCounter, ReadCounter};
