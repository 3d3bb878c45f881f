// 3rd party crates
use serde::{Deserialize, Serialize};

// Project imports
use crate::catalog::{ParameterSpec, Scope, Unit};
use crate::chain::QueryError;

/// Outcome of evaluating one parameter.
#[derive(Debug)]
pub struct QueryResult {
    pub spec: &'static ParameterSpec,
    pub outcome: Result<u64, QueryError>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Knobs for a single run.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub subnet: u16,
    pub block_time_secs: u64,
    pub format: OutputFormat,
    /// Evaluate global parameters concurrently, printing them in catalog order.
    pub concurrent_global: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    pub attempted: usize,
    pub failed: usize,
}

#[derive(Debug, Serialize)]
pub struct ReportEntry {
    pub name: &'static str,
    pub scope: Scope,
    pub unit: Unit,
    pub storage: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet: Option<u16>,
    pub value: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approx_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Machine-readable rendition of a run.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub endpoint: String,
    pub chain: Option<String>,
    pub block_hash: Option<String>,
    pub subnet: u16,
    pub block_time_secs: u64,
    pub global: Vec<ReportEntry>,
    pub subnet_specific: Vec<ReportEntry>,
}
