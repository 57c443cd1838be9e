//! Rule execution engine and finding aggregation

pub mod aggregator;
pub mod audit;
pub mod executor;
pub mod file_walker;

pub use aggregator::{AuditReport, Summary, Verdict};
pub use audit::{AuditOutcome, run_audit, run_audit_with};
pub use executor::{ExecutionEngine, ExecutionResult};
