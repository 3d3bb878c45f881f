// Standard library
use std::io::Write;

// 3rd party crates
use futures::future::join_all;
use tracing::{debug, info, warn};

// Project imports
use crate::catalog::{ParameterSpec, Scope, Unit};
use crate::chain::functions::fetch_value;
use crate::chain::{Connector, QueryError, StateReader};

// Current module imports
use super::constants::{
    subnet_heading, COMPLETE_MARKER, CONNECTED_BANNER, CONNECTING_BANNER, GLOBAL_HEADING,
    GLOBAL_UNDERLINE_LEN, UNABLE_TO_QUERY,
};
use super::errors::ReportError;
use super::types::{JsonReport, OutputFormat, QueryResult, ReportOptions, ReportSummary};

/// Converts a block count to tenths of an hour, rounding half away from zero.
///
/// Integer arithmetic keeps ties such as 1.05h exact.
pub fn approx_hours_tenths(blocks: u64, block_time_secs: u64) -> u128 {
    let seconds = u128::from(blocks) * u128::from(block_time_secs);
    (seconds + 180) / 360
}

/// Renders tenths of an hour with exactly one decimal.
pub fn format_hours(tenths: u128) -> String {
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// Reads one parameter. Failures are captured in the result, never returned.
///
/// `subnet` is only used by subnet-scoped parameters.
pub async fn evaluate<R>(reader: &R, spec: &'static ParameterSpec, subnet: u16) -> QueryResult
where
    R: StateReader + ?Sized,
{
    let outcome = fetch_value(reader, spec, subnet).await;

    match &outcome {
        Ok(value) => debug!(parameter = spec.name, value, "Queried"),
        Err(e) => warn!(
            parameter = spec.name,
            storage = %spec.selector.path(),
            "Unable to query: {}",
            e
        ),
    }

    QueryResult { spec, outcome }
}

/// Formats one result as a report line. Total over every outcome.
pub fn format_line(
    spec: &ParameterSpec,
    outcome: &Result<u64, QueryError>,
    block_time_secs: u64,
) -> String {
    let value = match outcome {
        Ok(value) => *value,
        Err(_) => return format!("{}: {}", spec.name, UNABLE_TO_QUERY),
    };

    match spec.unit {
        Unit::Blocks => format!(
            "{}: {} blocks (~{}h)",
            spec.name,
            value,
            format_hours(approx_hours_tenths(value, block_time_secs))
        ),
        Unit::Tempos | Unit::Registrations => {
            format!("{}: {} {}", spec.name, value, spec.unit.noun())
        }
    }
}

/// Evaluates every parameter of `scope` once, handing results to `emit` in
/// catalog order.
async fn evaluate_scope<R, F>(
    reader: &R,
    scope: Scope,
    options: &ReportOptions,
    mut emit: F,
) -> Result<(), ReportError>
where
    R: StateReader,
    F: FnMut(QueryResult) -> Result<(), ReportError>,
{
    let specs = ParameterSpec::of_scope(scope);

    if scope == Scope::Global && options.concurrent_global {
        let results = join_all(specs.map(|spec| evaluate(reader, spec, options.subnet))).await;
        for result in results {
            emit(result)?;
        }
    } else {
        for spec in specs {
            emit(evaluate(reader, spec, options.subnet).await)?;
        }
    }

    Ok(())
}

fn write_heading<W: Write + ?Sized>(
    out: &mut W,
    heading: &str,
    underline_len: usize,
) -> std::io::Result<()> {
    writeln!(out, "{}", heading)?;
    writeln!(out, "{}", "=".repeat(underline_len))
}

fn emit_line<W: Write + ?Sized>(
    out: &mut W,
    result: &QueryResult,
    options: &ReportOptions,
    summary: &mut ReportSummary,
) -> Result<(), ReportError> {
    summary.record(result);
    writeln!(out, "{}", result.line(options.block_time_secs))?;
    out.flush()?;
    Ok(())
}

/// Prints the report as it is produced.
async fn write_text<R, W>(
    reader: &R,
    options: &ReportOptions,
    out: &mut W,
) -> Result<ReportSummary, ReportError>
where
    R: StateReader,
    W: Write + ?Sized,
{
    let mut summary = ReportSummary::default();

    writeln!(out, "{}", CONNECTED_BANNER)?;
    writeln!(out)?;

    write_heading(out, GLOBAL_HEADING, GLOBAL_UNDERLINE_LEN)?;
    evaluate_scope(reader, Scope::Global, options, |result| {
        emit_line(out, &result, options, &mut summary)
    })
    .await?;

    writeln!(out)?;
    let heading = subnet_heading(options.subnet);
    write_heading(out, &heading, heading.chars().count())?;
    evaluate_scope(reader, Scope::Subnet, options, |result| {
        emit_line(out, &result, options, &mut summary)
    })
    .await?;

    writeln!(out)?;
    writeln!(out, "{}", COMPLETE_MARKER)?;

    Ok(summary)
}

/// Buffers the whole report and prints it as one JSON document.
async fn write_json<R, W>(
    reader: &R,
    endpoint: &str,
    options: &ReportOptions,
    out: &mut W,
) -> Result<ReportSummary, ReportError>
where
    R: StateReader,
    W: Write + ?Sized,
{
    let mut summary = ReportSummary::default();
    let mut report = JsonReport::new(endpoint, reader, options);

    evaluate_scope(reader, Scope::Global, options, |result| {
        summary.record(&result);
        report.global.push(result.entry(options));
        Ok(())
    })
    .await?;

    evaluate_scope(reader, Scope::Subnet, options, |result| {
        summary.record(&result);
        report.subnet_specific.push(result.entry(options));
        Ok(())
    })
    .await?;

    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;

    Ok(summary)
}

/// Runs one full report: connect, query every catalog entry, release.
///
/// Only a failed connection (or a broken output stream) is an error; failed
/// parameters are reported inline and counted in the summary.
pub async fn run<C, W>(
    connector: &C,
    options: &ReportOptions,
    out: &mut W,
) -> Result<ReportSummary, ReportError>
where
    C: Connector,
    W: Write + ?Sized,
{
    info!(endpoint = %connector.endpoint(), "Connecting to chain");
    if options.format == OutputFormat::Text {
        writeln!(out, "{}", CONNECTING_BANNER)?;
        out.flush()?;
    }
    let session = connector.open().await?;

    let result = match options.format {
        OutputFormat::Text => write_text(&session, options, out).await,
        OutputFormat::Json => write_json(&session, connector.endpoint(), options, out).await,
    };

    session.close();

    if let Ok(summary) = &result {
        info!(
            attempted = summary.attempted,
            failed = summary.failed,
            "Report complete"
        );
    }

    result
}
