//! Deterministic scorecard used across unit tests.
//!
//! Expected states for 2025-06:
//! - Financial: margin warn, ebitda good, cash_flow bad -> 33% bad
//! - Customer: otif, rework, complaints good, nps bad -> 75% good
//! - Process: scrap warn, oee warn -> 0% bad
//! - Learning: training good, ideas warn -> 50% warn
//! - Sustainability: energy good -> 100% good

use contracts::shared::indicators::{
    HistoricalRecord, KpiDefinition, KpiId, PerspectiveId, Polarity, SegmentBreakdown, UnitKind,
};
use contracts::shared::period::Period;

use super::store::SnapshotBuilder;

pub fn period(s: &str) -> Period {
    s.parse().unwrap()
}

pub fn record(actual: f64, target: f64, warning: f64, budget: f64) -> HistoricalRecord {
    HistoricalRecord {
        actual,
        target,
        warning,
        budget,
    }
}

pub fn definition(id: &str, polarity: Polarity) -> KpiDefinition {
    named(id, id, UnitKind::Percent, polarity)
}

pub fn named(id: &str, name: &str, unit: UnitKind, polarity: Polarity) -> KpiDefinition {
    KpiDefinition {
        id: KpiId::new(id),
        name: name.to_string(),
        unit,
        polarity,
    }
}

/// 2024-01 ..= 2025-12
pub fn sample_history() -> Vec<Period> {
    Period::range(period("2024-01"), period("2025-12"))
}

fn constant(actual: f64, target: f64, warning: f64, budget: f64) -> Vec<(Period, HistoricalRecord)> {
    sample_history()
        .into_iter()
        .map(|p| (p, record(actual, target, warning, budget)))
        .collect()
}

/// Margin: policy tightened in 2025 (target 23.0 -> 24.0).
fn margin_records() -> Vec<(Period, HistoricalRecord)> {
    sample_history()
        .into_iter()
        .map(|p| {
            let actual = match p.to_string().as_str() {
                "2024-06" => 20.0,
                "2024-12" => 23.5,
                "2025-03" => 25.0,
                "2025-05" => 22.0,
                "2025-06" => 23.0,
                _ => 22.5,
            };
            let target = if p.year() < 2025 { 23.0 } else { 24.0 };
            (p, record(actual, target, 21.5, 24.0))
        })
        .collect()
}

pub fn sample_builder() -> SnapshotBuilder {
    let visible = Period::range(period("2025-01"), period("2025-12"));
    SnapshotBuilder::new(sample_history())
        .visible(visible)
        // Financial
        .kpi(
            PerspectiveId::Financial,
            named("margin", "Gross Margin", UnitKind::Percent, Polarity::HigherIsBetter),
            margin_records(),
            vec![],
        )
        .kpi(
            PerspectiveId::Financial,
            named("ebitda", "EBITDA / Sales", UnitKind::Percent, Polarity::HigherIsBetter),
            constant(12.5, 12.0, 9.5, 12.0),
            vec![],
        )
        .kpi(
            PerspectiveId::Financial,
            named("cash_flow", "Operating Cash Flow", UnitKind::MillionsUsd, Polarity::HigherIsBetter),
            constant(1.0, 2.0, 1.2, 2.0),
            vec![],
        )
        // Customer
        .kpi(
            PerspectiveId::Customer,
            named("otif", "OTIF", UnitKind::Percent, Polarity::HigherIsBetter),
            constant(96.0, 95.0, 88.0, 94.0),
            vec![],
        )
        .kpi(
            PerspectiveId::Customer,
            named("rework", "Rework Rate", UnitKind::Percent, Polarity::LowerIsBetter),
            constant(4.0, 5.0, 7.5, 6.0),
            vec![],
        )
        .kpi(
            PerspectiveId::Customer,
            named("complaints", "Complaints per 10k Orders", UnitKind::PerTenThousand, Polarity::LowerIsBetter),
            constant(2.0, 2.5, 3.8, 2.8),
            vec![],
        )
        .kpi(
            PerspectiveId::Customer,
            named("nps", "NPS", UnitKind::Points, Polarity::HigherIsBetter),
            constant(40.0, 60.0, 48.0, 58.0),
            vec![],
        )
        // Process
        .kpi(
            PerspectiveId::Process,
            named("scrap", "Scrap", UnitKind::Percent, Polarity::LowerIsBetter),
            constant(2.5, 2.0, 3.0, 2.4),
            vec![
                SegmentBreakdown {
                    segment: "Line A".into(),
                    actual: 1.8,
                    polarity: None,
                    unit: None,
                },
                SegmentBreakdown {
                    segment: "Line B".into(),
                    actual: 2.8,
                    polarity: None,
                    unit: None,
                },
                SegmentBreakdown {
                    segment: "Line C".into(),
                    actual: 3.5,
                    polarity: Some(Polarity::HigherIsBetter),
                    unit: Some(UnitKind::Points),
                },
            ],
        )
        .kpi(
            PerspectiveId::Process,
            named("oee", "OEE", UnitKind::Percent, Polarity::HigherIsBetter),
            constant(65.0, 68.0, 60.0, 65.0),
            vec![],
        )
        // Learning
        .kpi(
            PerspectiveId::Learning,
            named("training", "Training Hours per Person", UnitKind::Hours, Polarity::HigherIsBetter),
            constant(24.0, 24.0, 16.0, 20.0),
            vec![],
        )
        .kpi(
            PerspectiveId::Learning,
            named("ideas", "Improvement Ideas Implemented", UnitKind::PerMonth, Polarity::HigherIsBetter),
            constant(13.0, 25.0, 12.0, 20.0),
            vec![],
        )
        // Sustainability
        .kpi(
            PerspectiveId::Sustainability,
            named("energy", "Energy per Tonne", UnitKind::KwhPerTonne, Polarity::LowerIsBetter),
            constant(380.0, 390.0, 430.0, 400.0),
            vec![],
        )
}
