use contracts::shared::indicators::{HistoricalRecord, Polarity, SegmentBreakdown, UnitKind};
use contracts::shared::period::Period;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::store::{ScorecardSnapshot, SnapshotBuilder};
use crate::shared::error::ScorecardResult;
use crate::shared::indicators::metadata::{build_catalog, KpiTemplate};

/// Monthly drift towards improvement.
const IMPROVEMENT_BIAS: f64 = 0.006;
/// Segment values deviate up to ±10% from the template base.
const SEGMENT_JITTER: f64 = 0.1;

/// Shape of the generated data set.
#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    pub seed: u64,
    pub first: Period,
    pub last: Period,
    /// First selectable period; everything before it is look-back history
    pub visible_from: Period,
}

impl GeneratorSettings {
    /// 24 months of history (2024-01 ..= 2025-12), 2025 selectable.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            first: Period::january(2024),
            last: Period::december(2025),
            visible_from: Period::january(2025),
        }
    }
}

fn noise_amplitude(unit: UnitKind) -> f64 {
    match unit {
        UnitKind::Percent => 0.6,
        UnitKind::MillionsUsd => 0.06,
        UnitKind::Ratio => 0.04,
        _ => 0.9,
    }
}

fn stored_decimals(unit: UnitKind) -> i32 {
    match unit {
        UnitKind::Percent | UnitKind::PerTenThousand | UnitKind::Ratio => 1,
        UnitKind::MillionsUsd => 2,
        _ => 0,
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn jitter(rng: &mut StdRng, base: f64, volatility: f64) -> f64 {
    let f: f64 = rng.gen_range(-1.0..1.0f64) * volatility;
    base * (1.0 + f)
}

/// Random walk drifting slowly towards improvement, floored (or capped) near
/// the warning threshold.
fn generate_series(rng: &mut StdRng, template: &KpiTemplate, len: usize) -> Vec<f64> {
    let unit = template.definition.unit;
    let polarity = template.definition.polarity;
    let direction = match polarity {
        Polarity::HigherIsBetter => 1.0,
        Polarity::LowerIsBetter => -1.0,
    };

    let mut value = template.base;
    let mut series = Vec::with_capacity(len);
    for _ in 0..len {
        let noise: f64 = rng.gen_range(-1.0..1.0f64) * noise_amplitude(unit);
        value = value * (1.0 + direction * IMPROVEMENT_BIAS) + noise;
        value = match polarity {
            Polarity::HigherIsBetter => value.max(template.warning * 0.85),
            Polarity::LowerIsBetter => value.min(template.warning * 1.2),
        };
        series.push(round_to(value, stored_decimals(unit)));
    }
    series
}

fn generate_segments(rng: &mut StdRng, template: &KpiTemplate) -> Vec<SegmentBreakdown> {
    [("Line A", 1.0), ("Line B", 1.02)]
        .into_iter()
        .map(|(segment, scale)| SegmentBreakdown {
            segment: segment.to_string(),
            actual: jitter(rng, template.base * scale, SEGMENT_JITTER),
            polarity: None,
            unit: None,
        })
        .collect()
}

/// Materialize a full snapshot from the KPI catalog. Same seed, same data.
pub fn generate_snapshot(settings: &GeneratorSettings) -> ScorecardResult<ScorecardSnapshot> {
    let history = Period::range(settings.first, settings.last);
    let visible: Vec<Period> = history
        .iter()
        .copied()
        .filter(|p| *p >= settings.visible_from)
        .collect();

    let mut rng = StdRng::seed_from_u64(settings.seed);
    let mut builder = SnapshotBuilder::new(history.clone()).visible(visible);
    let mut kpi_count = 0;

    for perspective in build_catalog() {
        for template in &perspective.kpis {
            let series = generate_series(&mut rng, template, history.len());
            let records = history.iter().zip(series).map(|(period, actual)| {
                (
                    *period,
                    HistoricalRecord {
                        actual,
                        target: template.target,
                        warning: template.warning,
                        budget: template.budget,
                    },
                )
            });
            let segments = generate_segments(&mut rng, template);
            builder = builder.kpi(
                perspective.id,
                template.definition.clone(),
                records,
                segments,
            );
            kpi_count += 1;
        }
    }

    let snapshot = builder.build()?;
    tracing::info!(
        "generated snapshot: seed={}, {} KPIs over {} .. {}",
        settings.seed,
        kpi_count,
        settings.first,
        settings.last
    );
    Ok(snapshot)
}
