use anyhow::Context;
use clap::Parser;

use backend::dashboards::d400_balanced_scorecard::report::{KpiDetailReport, ScorecardReport};
use backend::dashboards::d400_balanced_scorecard::service;
use backend::shared::config;
use backend::shared::data::generator::{generate_snapshot, GeneratorSettings};
use backend::shared::data::SnapshotHandle;
use backend::shared::logger;
use contracts::dashboards::d400_balanced_scorecard::{KpiDetailRequest, ScorecardRequest};
use contracts::shared::indicators::{ComparisonMode, KpiId};
use contracts::shared::period::Period;

/// Balanced scorecard report for one period
#[derive(Parser, Debug)]
#[command(name = "backend")]
#[command(about = "Balanced scorecard KPI report")]
struct CliArgs {
    /// Reporting period (YYYY-MM); defaults to config, then the latest period
    period: Option<Period>,

    /// Comparison mode: month, quarter, year or budget
    #[arg(value_name = "MODE")]
    comparison: Option<ComparisonMode>,

    /// Case-insensitive substring of the KPI name
    filter: Option<String>,

    /// Show the drill-down of a single KPI instead of the scorecard
    #[arg(long)]
    kpi: Option<String>,

    /// Print JSON instead of the text report
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let config_path = config::find_config_file();
    let config = config::load_config(config_path.as_deref())?;
    logger::init(&config.logging)?;

    match &config_path {
        Some(path) => tracing::info!("Loading config from: {}", path.display()),
        None => tracing::warn!("config.toml not found, using default embedded configuration"),
    }

    let snapshot = generate_snapshot(&GeneratorSettings::with_seed(config.dashboard.seed))
        .context("data source produced an invalid snapshot")?;
    let handle = SnapshotHandle::new(snapshot);
    let snapshot = handle.current();

    let period = args.period.or(config.dashboard.period);

    if let Some(kpi) = args.kpi.map(KpiId) {
        let detail = service::get_kpi_detail(&snapshot, &KpiDetailRequest { kpi, period })?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&detail)?);
        } else {
            print!("{}", KpiDetailReport { detail: &detail });
        }
        return Ok(());
    }

    let request = ScorecardRequest {
        period,
        comparison: args.comparison.unwrap_or(config.dashboard.comparison),
        name_filter: args.filter,
    };
    let response = service::get_scorecard(&snapshot, &request)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!(
            "{}",
            ScorecardReport {
                response: &response,
                generated_at: chrono::Local::now(),
            }
        );
    }
    Ok(())
}
