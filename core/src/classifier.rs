//! Client classification — threshold flags, lateness ranking, report rows.
//!
//! This stage:
//!   1. Computes the late / low-on-time flags from fixed thresholds
//!   2. Ranks the table by average payment delay, slowest first
//!   3. Selects the top fifth of the ranked table (minimum one client)
//!   4. Builds a human-readable justification per selected client
//!
//! Pure: takes loaded records, returns report rows. No file I/O here.
//!
//! Selection is by rank, not by the problematic flag, so a selected
//! client can carry an empty reason when neither flag is set.

use crate::error::{ReportError, ReportResult};
use crate::types::ClientId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ── Thresholds ───────────────────────────────────────────────────────────────

/// Average payment delay above which a client counts as late, in days.
pub const LATE_THRESHOLD_DAYS: f64 = 50.0;

/// On-time payments (of the last 12) below which collection is weak.
pub const ON_TIME_THRESHOLD: u32 = 8;

/// Fraction of the ranked table selected into the report.
pub const SELECTION_SHARE: f64 = 0.2;

/// Fixed recommendation attached to every selected client.
pub const RECOMMENDATION: &str = "Switch to 100% prepayment";

// ── Public types ─────────────────────────────────────────────────────────────

/// One row of the input client table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRecord {
    pub client_id:                ClientId,
    pub client_name:              String,
    pub annual_revenue:           f64,
    pub avg_days_to_pay:          f64,
    pub last_12_payments_on_time: u32,
}

/// A client record with its derived threshold flags.
#[derive(Debug, Clone)]
pub struct FlaggedClient {
    pub record:      ClientRecord,
    pub late:        bool,
    pub low_on_time: bool,
    pub problematic: bool,
}

impl FlaggedClient {
    /// Human-readable justification for the report row. Empty when
    /// neither flag is set.
    pub fn reason(&self) -> String {
        let mut reasons = Vec::new();
        if self.late {
            reasons.push(format!(
                "avg delay = {} days",
                self.record.avg_days_to_pay as i64
            ));
        }
        if self.low_on_time {
            reasons.push(format!(
                "only {} of 12 payments on time",
                self.record.last_12_payments_on_time
            ));
        }
        reasons.join("; ")
    }
}

/// One row of the problematic-clients report.
#[derive(Debug, Clone, Serialize)]
pub struct ProblematicRow {
    pub client_id:                ClientId,
    pub client_name:              String,
    pub annual_revenue:           f64,
    pub avg_days_to_pay:          f64,
    pub last_12_payments_on_time: u32,
    pub reason:                   String,
    pub recommendation:           String,
}

// ── Operations ───────────────────────────────────────────────────────────────

/// Derive the threshold flags for a single record.
pub fn flag_client(record: &ClientRecord) -> FlaggedClient {
    let late = record.avg_days_to_pay > LATE_THRESHOLD_DAYS;
    let low_on_time = record.last_12_payments_on_time < ON_TIME_THRESHOLD;
    FlaggedClient {
        record: record.clone(),
        late,
        low_on_time,
        problematic: late && low_on_time,
    }
}

/// How many clients the report selects from a table of `total` rows.
/// Top fifth by rank, rounded up, never fewer than one.
pub fn selection_count(total: usize) -> usize {
    ((total as f64 * SELECTION_SHARE).ceil() as usize).max(1)
}

/// Classify the client table and build the report rows.
///
/// Ranks all records descending by average delay (stable: ties keep
/// input order), selects the head fraction and attaches the reason
/// and recommendation. The input slice is left untouched.
pub fn classify(records: &[ClientRecord]) -> ReportResult<Vec<ProblematicRow>> {
    if records.is_empty() {
        return Err(ReportError::EmptyClientTable);
    }

    let mut flagged: Vec<FlaggedClient> = records.iter().map(flag_client).collect();
    flagged.sort_by(|a, b| {
        b.record
            .avg_days_to_pay
            .partial_cmp(&a.record.avg_days_to_pay)
            .unwrap_or(Ordering::Equal)
    });

    let take = selection_count(flagged.len());
    log::debug!(
        "classifier: ranked {} clients, selecting top {take}",
        flagged.len()
    );

    Ok(flagged.iter().take(take).map(report_row).collect())
}

fn report_row(client: &FlaggedClient) -> ProblematicRow {
    ProblematicRow {
        client_id:                client.record.client_id.clone(),
        client_name:              client.record.client_name.clone(),
        annual_revenue:           client.record.annual_revenue,
        avg_days_to_pay:          client.record.avg_days_to_pay,
        last_12_payments_on_time: client.record.last_12_payments_on_time,
        reason:                   client.reason(),
        recommendation:           RECOMMENDATION.to_string(),
    }
}
