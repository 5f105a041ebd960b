//! Schema inspection over a [`DataStore`].
//!
//! The probe discovers table names (via the `get_table_names` function, or
//! a candidate list when that is unavailable), then reads one row from each
//! table. Tables named explicitly skip discovery. A failing table is
//! recorded in the report and never stops the remaining probes.
//!
//! An optional write check inserts one marker row and records whether the
//! store accepted it.

use super::{DataStore, StoreError};
use serde::Serialize;
use serde_json::Value;

const TABLE_NAMES_FUNCTION: &str = "get_table_names";

/// Where the probed table names came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableSource {
    /// The store listed its own tables.
    Rpc,
    /// Listing failed; the configured candidates were probed instead.
    Candidates { reason: String },
    /// The caller named the tables; no listing was attempted.
    Explicit,
}

/// Shape of a table as seen through its first row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSchema {
    /// Column names of the sample row, in key order. Empty when the table has no rows.
    pub columns: Vec<String>,
    pub sample: Option<Value>,
}

/// Outcome of probing a single table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableProbe {
    pub table: String,
    #[serde(flatten)]
    pub outcome: ProbeOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ProbeOutcome {
    Accessible(TableSchema),
    Failed { reason: String },
}

impl TableProbe {
    pub fn is_accessible(&self) -> bool {
        matches!(self.outcome, ProbeOutcome::Accessible(_))
    }

    pub fn schema(&self) -> Option<&TableSchema> {
        match &self.outcome {
            ProbeOutcome::Accessible(schema) => Some(schema),
            ProbeOutcome::Failed { .. } => None,
        }
    }
}

/// Result of inserting the marker row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WriteCheck {
    pub table: String,
    #[serde(flatten)]
    pub outcome: WriteOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum WriteOutcome {
    /// Rows the store returned for the insert
    Written { rows: Vec<Value> },
    Failed { reason: String },
}

impl WriteCheck {
    pub fn succeeded(&self) -> bool {
        matches!(self.outcome, WriteOutcome::Written { .. })
    }
}

/// Aggregated probe results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaReport {
    pub source: TableSource,
    pub tables: Vec<TableProbe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_check: Option<WriteCheck>,
}

impl SchemaReport {
    pub fn accessible_count(&self) -> usize {
        self.tables.iter().filter(|t| t.is_accessible()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.tables.len() - self.accessible_count()
    }
}

#[derive(Debug, Clone)]
enum TableSelection {
    Discover { candidates: Vec<String> },
    Explicit(Vec<String>),
}

/// Runs schema discovery against a store.
#[derive(Debug, Clone)]
pub struct SchemaProbe {
    selection: TableSelection,
    write: Option<(String, Value)>,
}

impl SchemaProbe {
    /// Ask the store for its tables, falling back to `candidates`.
    pub fn new(candidates: Vec<String>) -> Self {
        Self {
            selection: TableSelection::Discover { candidates },
            write: None,
        }
    }

    /// Probe exactly `tables`, without asking the store for a listing.
    pub fn explicit(tables: Vec<String>) -> Self {
        Self {
            selection: TableSelection::Explicit(tables),
            write: None,
        }
    }

    /// Also insert `row` into `table` and report whether it was accepted.
    pub fn with_write_check(mut self, table: impl Into<String>, row: Value) -> Self {
        self.write = Some((table.into(), row));
        self
    }

    pub async fn run(&self, store: &dyn DataStore) -> SchemaReport {
        let (source, tables) = match &self.selection {
            TableSelection::Explicit(tables) => (TableSource::Explicit, tables.clone()),
            TableSelection::Discover { candidates } => match discover_tables(store).await {
                Ok(tables) => (TableSource::Rpc, tables),
                Err(e) => {
                    tracing::info!(error = %e, "Table listing unavailable, probing candidate tables");
                    (
                        TableSource::Candidates {
                            reason: e.to_string(),
                        },
                        candidates.clone(),
                    )
                }
            },
        };

        let mut probes = Vec::with_capacity(tables.len());
        for table in tables {
            let outcome = match store.select(&table, 1).await {
                Ok(rows) => ProbeOutcome::Accessible(schema_from_rows(rows)),
                Err(e) => {
                    tracing::debug!(table = %table, error = %e, "Table probe failed");
                    ProbeOutcome::Failed {
                        reason: e.to_string(),
                    }
                }
            };
            probes.push(TableProbe { table, outcome });
        }

        let write_check = match &self.write {
            Some((table, row)) => Some(check_write(store, table, row.clone()).await),
            None => None,
        };

        SchemaReport {
            source,
            tables: probes,
            write_check,
        }
    }
}

async fn check_write(store: &dyn DataStore, table: &str, row: Value) -> WriteCheck {
    let outcome = match store.insert(table, row).await {
        Ok(rows) => WriteOutcome::Written { rows },
        Err(e) => {
            tracing::debug!(table, error = %e, "Write check failed");
            WriteOutcome::Failed {
                reason: e.to_string(),
            }
        }
    };

    WriteCheck {
        table: table.to_string(),
        outcome,
    }
}

async fn discover_tables(store: &dyn DataStore) -> Result<Vec<String>, StoreError> {
    let value = store.rpc(TABLE_NAMES_FUNCTION, Value::Object(Default::default())).await?;
    parse_table_names(&value)
}

/// Accepts `["a", "b"]` or `[{"table_name": "a"}, ...]`.
fn parse_table_names(value: &Value) -> Result<Vec<String>, StoreError> {
    let items = value
        .as_array()
        .ok_or_else(|| StoreError::Decode("expected an array of table names".to_string()))?;

    items
        .iter()
        .map(|item| match item {
            Value::String(name) => Ok(name.clone()),
            Value::Object(map) => map
                .get("table_name")
                .and_then(Value::as_str)
                .map(String::from)
                .ok_or_else(|| StoreError::Decode("row without table_name".to_string())),
            _ => Err(StoreError::Decode(format!("unexpected table name: {}", item))),
        })
        .collect()
}

fn schema_from_rows(rows: Vec<Value>) -> TableSchema {
    let sample = rows.into_iter().next();
    let columns = sample
        .as_ref()
        .and_then(Value::as_object)
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default();

    TableSchema { columns, sample }
}
