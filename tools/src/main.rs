//! report-runner: one-shot receivables report and cash-flow projection.
//!
//! Reads clients_data.csv from the working directory, writes
//! problematic_clients.csv and cash_flow_projection.png next to it,
//! and prints the savings summary. No flags: thresholds, paths and
//! the master seed are embedded constants.

use anyhow::Result;
use payflow_core::{
    chart::render_gap_chart,
    classifier::classify,
    report::{load_clients, write_problematic_report},
    rng::ReportRng,
    simulator::{project, summarize},
};
use std::path::Path;

const CLIENTS_PATH: &str = "clients_data.csv";
const REPORT_PATH: &str = "problematic_clients.csv";
const CHART_PATH: &str = "cash_flow_projection.png";
const MASTER_SEED: u64 = 42;

fn main() -> Result<()> {
    env_logger::init();

    // Stage 1: flag and rank problematic payers.
    let clients = load_clients(Path::new(CLIENTS_PATH))?;
    log::info!("classifying {} clients from {CLIENTS_PATH}", clients.len());
    let rows = classify(&clients)?;
    write_problematic_report(Path::new(REPORT_PATH), &rows)?;
    println!(
        "Saved {REPORT_PATH}: {} of {} clients flagged for prepayment terms.",
        rows.len(),
        clients.len()
    );

    // Stage 2: project the cash-flow effect of the policy.
    let mut rng = ReportRng::new(MASTER_SEED);
    let projection = project(&mut rng);
    let summary = summarize(&projection)?;

    println!();
    println!("=== CASH-FLOW PROJECTION (seed {MASTER_SEED}) ===");
    print!("{}", summary.console_block());

    render_gap_chart(Path::new(CHART_PATH), &projection)?;
    println!();
    println!("Chart written to {CHART_PATH}");

    Ok(())
}
