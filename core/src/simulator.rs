//! Cash-flow projection — 13-week shortfall modeling before/after policy.
//!
//! This stage:
//!   1. Interpolates the weekly revenue and expense baselines
//!   2. Draws weekly collection rates from the run RNG
//!   3. Derives the weekly cash gap for both scenarios
//!   4. Aggregates shortfall weeks into the savings metrics
//!
//! Pure: takes an explicit RNG, returns the projection. No I/O here.
//!
//! Draw order is part of the deterministic contract: all 13 "before"
//! rates are drawn first, then all 13 "after" rates.

use crate::error::{ReportError, ReportResult};
use crate::money::format_grouped;
use crate::rng::ReportRng;
use crate::types::Week;
use serde::Serialize;

// ── Model constants ──────────────────────────────────────────────────────────

/// Number of modeled weeks (one quarter).
pub const WEEKS: usize = 13;

/// Revenue ramps linearly between these endpoints over the quarter.
pub const REVENUE_START: f64 = 12_000_000.0;
pub const REVENUE_END: f64 = 18_000_000.0;

/// Expenses ramp linearly between these endpoints.
pub const EXPENSES_START: f64 = 10_000_000.0;
pub const EXPENSES_END: f64 = 13_000_000.0;

/// Weekly collection rate range before the prepayment policy.
pub const COLLECTION_BEFORE: (f64, f64) = (0.6, 0.8);

/// Collection rate range for the non-prepaid remainder afterwards.
pub const COLLECTION_AFTER: (f64, f64) = (0.7, 0.9);

/// Share of revenue collected up front under the policy.
pub const PREPAID_SHARE: f64 = 0.20;

/// Weeks per year when annualizing the shortfall reduction.
pub const ANNUAL_WEEKS: f64 = 52.0;

/// Overdraft interest rate applied to the annualized reduction.
pub const INTEREST_RATE: f64 = 0.067;

// ── Public types ─────────────────────────────────────────────────────────────

/// One modeled week. `gap_* = inflow_* - outflow`; negative means a
/// shortfall the company bridges with overdraft.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashFlowWeek {
    pub week:          Week,
    pub inflow_before: f64,
    pub inflow_after:  f64,
    pub outflow:       f64,
    pub gap_before:    f64,
    pub gap_after:     f64,
}

/// The full 13-week projection for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct CashFlowProjection {
    pub weeks: Vec<CashFlowWeek>,
}

/// Aggregated savings metrics over the shortfall weeks.
#[derive(Debug, Clone, PartialEq)]
pub struct SavingsSummary {
    /// Mean gap over weeks where the before-policy gap is negative.
    pub avg_gap_before: f64,
    /// Mean gap over weeks where the after-policy gap is negative.
    pub avg_gap_after: f64,
    /// Percent reduction of the average shortfall.
    pub reduction_pct: f64,
    /// Annualized interest saved on the avoided overdraft.
    pub annual_interest_saving: f64,
}

impl SavingsSummary {
    /// The fixed console rendering of the savings metrics.
    /// Byte-identical for identical summaries.
    pub fn console_block(&self) -> String {
        format!(
            "Average weekly cash gap before: {}\n\
             Average weekly cash gap after:  {}\n\
             Shortfall reduction: {:.0}%\n\
             Projected annual interest saving: ~{}\n",
            format_grouped(self.avg_gap_before),
            format_grouped(self.avg_gap_after),
            self.reduction_pct,
            format_grouped(self.annual_interest_saving),
        )
    }
}

// ── Baselines ────────────────────────────────────────────────────────────────

/// Evenly spaced values from `start` to `end` inclusive.
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    debug_assert!(n >= 2, "linspace needs at least two points");
    let step = (end - start) / (n as f64 - 1.0);
    (0..n).map(|i| start + step * i as f64).collect()
}

/// The deterministic weekly revenue baseline.
pub fn weekly_revenue() -> Vec<f64> {
    linspace(REVENUE_START, REVENUE_END, WEEKS)
}

/// The deterministic weekly expense baseline.
pub fn weekly_expenses() -> Vec<f64> {
    linspace(EXPENSES_START, EXPENSES_END, WEEKS)
}

// ── Operations ───────────────────────────────────────────────────────────────

/// Build the 13-week projection from the run RNG.
///
/// Before the policy the whole revenue is collected at a random
/// 60-80% weekly rate. After it, a fifth is prepaid in full and the
/// remainder collects at an improved 70-90% rate.
pub fn project(rng: &mut ReportRng) -> CashFlowProjection {
    let revenue = weekly_revenue();
    let expenses = weekly_expenses();

    let before_rates: Vec<f64> = (0..WEEKS)
        .map(|_| rng.uniform(COLLECTION_BEFORE.0, COLLECTION_BEFORE.1))
        .collect();
    let after_rates: Vec<f64> = (0..WEEKS)
        .map(|_| rng.uniform(COLLECTION_AFTER.0, COLLECTION_AFTER.1))
        .collect();

    let weeks = (0..WEEKS)
        .map(|i| {
            let inflow_before = revenue[i] * before_rates[i];
            let inflow_after = revenue[i] * PREPAID_SHARE
                + revenue[i] * (1.0 - PREPAID_SHARE) * after_rates[i];
            let outflow = expenses[i];
            CashFlowWeek {
                week: (i + 1) as Week,
                inflow_before,
                inflow_after,
                outflow,
                gap_before: inflow_before - outflow,
                gap_after: inflow_after - outflow,
            }
        })
        .collect();

    CashFlowProjection { weeks }
}

/// Mean of the negative gaps in one series. Errors when the series
/// has no shortfall week: the reduction is undefined there and the
/// run aborts.
fn mean_shortfall<I>(gaps: I, series: &'static str) -> ReportResult<f64>
where
    I: Iterator<Item = f64>,
{
    let shortfalls: Vec<f64> = gaps.filter(|g| *g < 0.0).collect();
    if shortfalls.is_empty() {
        return Err(ReportError::NoShortfallWeeks { series });
    }
    Ok(shortfalls.iter().sum::<f64>() / shortfalls.len() as f64)
}

/// Aggregate the projection into the savings metrics.
pub fn summarize(projection: &CashFlowProjection) -> ReportResult<SavingsSummary> {
    let avg_gap_before =
        mean_shortfall(projection.weeks.iter().map(|w| w.gap_before), "before")?;
    let avg_gap_after =
        mean_shortfall(projection.weeks.iter().map(|w| w.gap_after), "after")?;

    // avg_gap_before is a mean of strictly negative values, so the
    // denominator below is never zero.
    let reduction_pct = 100.0 * (1.0 - avg_gap_after.abs() / avg_gap_before.abs());
    let annual_interest_saving =
        (avg_gap_before - avg_gap_after).abs() * ANNUAL_WEEKS * INTEREST_RATE;

    log::debug!(
        "simulator: avg_gap_before={avg_gap_before:.0} avg_gap_after={avg_gap_after:.0} \
         reduction={reduction_pct:.1}%"
    );

    Ok(SavingsSummary {
        avg_gap_before,
        avg_gap_after,
        reduction_pct,
        annual_interest_saving,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_hits_both_endpoints() {
        let values = linspace(10.0, 20.0, 5);
        assert_eq!(values.len(), 5);
        assert_eq!(values[0], 10.0);
        assert_eq!(values[4], 20.0);
        assert_eq!(values[2], 15.0);
    }
}
