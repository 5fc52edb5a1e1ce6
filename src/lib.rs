//! benchsift - commit-by-commit benchmark analysis
//!
//! This library ingests ordered functional-test timing reports and
//! microbenchmark reports, computes per-commit deltas, speedups and series
//! variance, and flags the commits whose change exceeds configured thresholds.

pub mod analysis;
pub mod cli;
pub mod csv_output;
pub mod discovery;
pub mod error;
pub mod filter;
pub mod json_output;
pub mod report;
pub mod text_output;
