//! Data store boundary.
//!
//! The dashboard itself never reads the store; this module backs the
//! `inspect` command, which reports what tables the hosted database
//! exposes.

mod error;
pub mod probe;
pub mod rest;

pub use error::StoreError;
pub use probe::{
    ProbeOutcome, SchemaProbe, SchemaReport, TableProbe, TableSchema, TableSource, WriteCheck,
    WriteOutcome,
};
pub use rest::RestDataStore;

use async_trait::async_trait;
use serde_json::Value;

/// Table-scoped access to a relational store.
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Fetch up to `limit` rows of `table`.
    async fn select(&self, table: &str, limit: usize) -> Result<Vec<Value>, StoreError>;

    /// Insert one row and return the stored representation.
    async fn insert(&self, table: &str, row: Value) -> Result<Vec<Value>, StoreError>;

    /// Call a stored function.
    async fn rpc(&self, function: &str, args: Value) -> Result<Value, StoreError>;
}
