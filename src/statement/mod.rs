//! Statement submission and outcome classification.

mod executor;

pub use executor::{StatementExecutor, StatementOutcome};
