//! payflow-core — receivables report and cash-flow projection.
//!
//! Two independent stages share this crate:
//!   1. The client classifier flags slow payers by fixed thresholds,
//!     ranks the table by average delay and builds the
//!     problematic-clients report.
//!   2. The cash-flow simulator projects 13 weeks of shortfalls
//!     before and after a hypothetical prepayment policy and prices
//!     the reduction.
//!
//! RULES:
//!   - classifier and simulator are pure: loaded records and an
//!     explicit RNG in, rows and metrics out.
//!   - File I/O lives in report (CSV) and chart (PNG) only.
//!   - All randomness flows through a ReportRng built from the single
//!     master seed. Same seed, same projection.

pub mod chart;
pub mod classifier;
pub mod error;
pub mod money;
pub mod report;
pub mod rng;
pub mod simulator;
pub mod types;
