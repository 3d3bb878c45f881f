//! Parameter Catalog
//!
//! The fixed, ordered list of Subtensor rate-limit parameters the reporter
//! knows how to query. Global entries come first, subnet-scoped entries
//! after them. Adding a parameter means appending an entry to
//! [`constants::CATALOG`]; the query and formatting code never changes.

pub mod constants;
pub mod impls;
pub mod types;

pub use types::{ParameterSpec, Scope, Unit};
