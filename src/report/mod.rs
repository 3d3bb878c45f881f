//! Report
//!
//! Evaluates every catalog entry against a session, turns each outcome into
//! exactly one line (or JSON entry) and drives a whole run from connect to
//! release. A failed parameter is reported in place and never stops the run;
//! only a failed connection does.

pub mod constants;
pub mod errors;
pub mod functions;
pub mod impls;
pub mod types;


pub use functions::run;
pub use types::{OutputFormat, ReportOptions};
