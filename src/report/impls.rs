// Project imports
use crate::catalog::constants::{DEFAULT_BLOCK_TIME_SECS, DEFAULT_SUBNET};
use crate::catalog::Unit;
use crate::chain::StateReader;

// Current module imports
use super::functions::{approx_hours_tenths, format_line};
use super::types::{JsonReport, QueryResult, ReportEntry, ReportOptions, ReportSummary};

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            subnet: DEFAULT_SUBNET,
            block_time_secs: DEFAULT_BLOCK_TIME_SECS,
            format: Default::default(),
            concurrent_global: false,
        }
    }
}

impl QueryResult {
    pub fn is_failure(&self) -> bool {
        self.outcome.is_err()
    }

    pub fn line(&self, block_time_secs: u64) -> String {
        format_line(self.spec, &self.outcome, block_time_secs)
    }

    pub fn entry(&self, options: &ReportOptions) -> ReportEntry {
        let value = self.outcome.as_ref().ok().copied();
        let approx_hours = match (self.spec.unit, value) {
            (Unit::Blocks, Some(blocks)) => {
                Some(approx_hours_tenths(blocks, options.block_time_secs) as f64 / 10.0)
            }
            _ => None,
        };

        ReportEntry {
            name: self.spec.name,
            scope: self.spec.scope,
            unit: self.spec.unit,
            storage: self.spec.selector.path(),
            subnet: self.spec.is_subnet_scoped().then_some(options.subnet),
            value,
            approx_hours,
            error: self.outcome.as_ref().err().map(|e| e.to_string()),
        }
    }
}

impl ReportSummary {
    pub fn record(&mut self, result: &QueryResult) {
        self.attempted += 1;
        if result.is_failure() {
            self.failed += 1;
        }
    }
}

impl JsonReport {
    pub fn new<R: StateReader + ?Sized>(endpoint: &str, reader: &R, options: &ReportOptions) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            chain: reader.chain().map(str::to_string),
            block_hash: reader.block_hash().map(str::to_string),
            subnet: options.subnet,
            block_time_secs: options.block_time_secs,
            global: Vec::new(),
            subnet_specific: Vec::new(),
        }
    }
}
